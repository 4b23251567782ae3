//! [`ActorEntity`] implementation for [`DraftOrder`].
//!
//! The actor context is the commerce gateway. `on_create` submits the snapshot through
//! it, so a draft order only exists in the store once the platform has accepted it.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::commerce::CommerceGateway;
use crate::framework::ActorEntity;
use crate::model::{DraftOrder, OrderConfirmation, OrderId, OrderSnapshot, OrderStatus};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Reject snapshots the commerce platform would not accept.
pub fn validate_snapshot(snapshot: &OrderSnapshot) -> Result<(), OrderError> {
    if snapshot.is_empty() {
        return Err(OrderError::ValidationError("No items in order".to_string()));
    }
    if snapshot.buyer.email.trim().is_empty() {
        return Err(OrderError::ValidationError(
            "Buyer email is required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for DraftOrder {
    type Id = OrderId;
    type Create = OrderSnapshot;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = Arc<dyn CommerceGateway>;
    type Error = OrderError;

    fn from_create_params(id: OrderId, snapshot: OrderSnapshot) -> Result<Self, OrderError> {
        validate_snapshot(&snapshot)?;
        Ok(DraftOrder::new(id, snapshot))
    }

    async fn on_create(&mut self, gateway: &Arc<dyn CommerceGateway>) -> Result<(), OrderError> {
        let receipt = gateway.create_draft_order(&self.snapshot).await?;
        info!(
            order = %self.id,
            order_number = %self.order_number,
            draft_order_id = %receipt.draft_order_id,
            "Draft order submitted"
        );
        self.receipt = Some(receipt);
        self.status = OrderStatus::Submitted;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _gateway: &Arc<dyn CommerceGateway>,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Confirmation => Ok(OrderActionResult::Confirmation(Box::new(
                OrderConfirmation::from(&*self),
            ))),
        }
    }
}
