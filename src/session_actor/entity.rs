//! [`ActorEntity`] implementation that lets [`CateringSession`] be owned by a
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! The actor's context is the delivery fee schedule used when quoting.

use super::actions::{SessionAction, SessionActionResult, SessionCreate};
use super::error::SessionError;
use crate::framework::ActorEntity;
use crate::model::{CateringSession, SessionId, Transition};
use crate::pricing::{DeliveryFeeSchedule, Quote};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for CateringSession {
    type Id = SessionId;
    type Create = SessionCreate;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = DeliveryFeeSchedule;
    type Error = SessionError;

    fn from_create_params(id: SessionId, params: SessionCreate) -> Result<Self, SessionError> {
        let session = CateringSession::new(id);
        Ok(match params {
            SessionCreate::Fresh => session,
            SessionCreate::Restore(saved) => session.apply(Transition::Hydrate(saved)),
        })
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        delivery: &DeliveryFeeSchedule,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::Apply(transition) => {
                debug!(id = %self.id, transition = transition.name(), "Applying transition");
                let id = self.id;
                let current = std::mem::replace(self, CateringSession::new(id));
                *self = current.apply(transition);
                Ok(SessionActionResult::Apply(Box::new(self.clone())))
            }
            SessionAction::Quote => Ok(SessionActionResult::Quote(Box::new(
                Quote::for_session(self, delivery),
            ))),
            SessionAction::Checkout {
                buyer,
                setup_required,
            } => {
                if let Some(reason) = checkout_blocker(self) {
                    return Err(SessionError::CheckoutNotReady(reason.to_string()));
                }
                if let Some(buyer) = buyer {
                    self.buyer_info = Some(buyer);
                }
                let buyer = self
                    .buyer_info
                    .clone()
                    .ok_or(SessionError::MissingBuyerInfo)?;
                let snapshot =
                    Quote::for_session(self, delivery).into_snapshot(self, buyer, setup_required);
                Ok(SessionActionResult::Checkout(Box::new(snapshot)))
            }
        }
    }
}

fn checkout_blocker(session: &CateringSession) -> Option<&'static str> {
    if session.can_proceed_to_checkout() {
        return None;
    }
    if session.event_type.is_none() {
        Some("no event type selected")
    } else {
        Some("cart is empty")
    }
}
