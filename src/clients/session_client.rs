//! # Session Client
//!
//! High-level API for the session actor: one method per wizard transition, plus quoting
//! and checkout. Every transition method returns the session as it is after the change.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    BudgetRange, BuyerInfo, CateringPackage, CateringSession, EventType, OrderSnapshot,
    OrderType, Product, ProductId, SessionId, Transition,
};
use crate::pricing::Quote;
use crate::session_actor::{SessionAction, SessionActionResult, SessionCreate, SessionError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<CateringSession>,
}

#[async_trait]
impl ActorClient<CateringSession> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<CateringSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            other => other.into_entity_error(SessionError::ActorCommunicationError),
        }
    }
}

impl SessionClient {
    pub fn new(inner: ResourceClient<CateringSession>) -> Self {
        Self { inner }
    }

    /// Start a blank session.
    #[instrument(skip(self))]
    pub async fn open(&self) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionCreate::Fresh)
            .await
            .map_err(Self::map_error)
    }

    /// Start a session from previously saved state.
    #[instrument(skip(self, saved), fields(saved_id = %saved.id))]
    pub async fn restore(&self, saved: CateringSession) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionCreate::Restore(Box::new(saved)))
            .await
            .map_err(Self::map_error)
    }

    /// Apply one transition and return the resulting state.
    #[instrument(skip(self, transition), fields(transition = transition.name()))]
    pub async fn apply(
        &self,
        id: SessionId,
        transition: Transition,
    ) -> Result<CateringSession, SessionError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, SessionAction::Apply(transition))
            .await
            .map_err(Self::map_error)?
        {
            SessionActionResult::Apply(session) => Ok(*session),
            other => Err(SessionError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    pub async fn select_event_type(
        &self,
        id: SessionId,
        event_type: EventType,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::SelectEventType(event_type)).await
    }

    pub async fn set_budget_range(
        &self,
        id: SessionId,
        range: BudgetRange,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::SetBudgetRange(range)).await
    }

    pub async fn set_custom_budget(
        &self,
        id: SessionId,
        amount: f64,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::SetCustomBudget(amount)).await
    }

    pub async fn set_order_type(
        &self,
        id: SessionId,
        order_type: OrderType,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::SetOrderType(order_type)).await
    }

    pub async fn set_headcount(
        &self,
        id: SessionId,
        guests: i64,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::SetHeadcount(guests)).await
    }

    pub async fn add_item(
        &self,
        id: SessionId,
        product: Product,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::AddItem(product)).await
    }

    pub async fn remove_item(
        &self,
        id: SessionId,
        product_id: ProductId,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::RemoveItem(product_id)).await
    }

    pub async fn update_item_quantity(
        &self,
        id: SessionId,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<CateringSession, SessionError> {
        self.apply(
            id,
            Transition::UpdateItemQuantity {
                product_id,
                quantity,
            },
        )
        .await
    }

    pub async fn clear_items(&self, id: SessionId) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::ClearItems).await
    }

    pub async fn select_package(
        &self,
        id: SessionId,
        package: CateringPackage,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::SelectPackage(package)).await
    }

    pub async fn clear_package(&self, id: SessionId) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::ClearPackage).await
    }

    pub async fn go_to_step(
        &self,
        id: SessionId,
        step: i64,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::GoToStep(step)).await
    }

    pub async fn go_back(&self, id: SessionId) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::GoBack).await
    }

    pub async fn set_buyer_info(
        &self,
        id: SessionId,
        buyer: BuyerInfo,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::SetBuyerInfo(buyer)).await
    }

    /// Replace the session's state with a saved one, keeping `id`.
    pub async fn hydrate(
        &self,
        id: SessionId,
        saved: CateringSession,
    ) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::Hydrate(Box::new(saved))).await
    }

    pub async fn reset(&self, id: SessionId) -> Result<CateringSession, SessionError> {
        self.apply(id, Transition::Reset).await
    }

    /// Totals, delivery, budget status and coverage for the current state.
    #[instrument(skip(self))]
    pub async fn quote(&self, id: SessionId) -> Result<Quote, SessionError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, SessionAction::Quote)
            .await
            .map_err(Self::map_error)?
        {
            SessionActionResult::Quote(quote) => Ok(*quote),
            other => Err(SessionError::UnexpectedResult(format!("{:?}", other))),
        }
    }

    /// Freeze the session into an [`OrderSnapshot`]. The session itself is left as is.
    #[instrument(skip(self, buyer))]
    pub async fn checkout(
        &self,
        id: SessionId,
        buyer: Option<BuyerInfo>,
        setup_required: bool,
    ) -> Result<OrderSnapshot, SessionError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(
                id,
                SessionAction::Checkout {
                    buyer,
                    setup_required,
                },
            )
            .await
            .map_err(Self::map_error)?
        {
            SessionActionResult::Checkout(snapshot) => Ok(*snapshot),
            other => Err(SessionError::UnexpectedResult(format!("{:?}", other))),
        }
    }
}
