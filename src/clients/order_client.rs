//! # Order Client
//!
//! High-level API for the order actor. Validation and the commerce call happen in the
//! actor's `on_create` hook; this client only forwards and maps errors.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{DraftOrder, OrderConfirmation, OrderId, OrderSnapshot};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<DraftOrder>,
}

#[async_trait]
impl ActorClient<DraftOrder> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<DraftOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other.into_entity_error(OrderError::ActorCommunicationError),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<DraftOrder>) -> Self {
        Self { inner }
    }

    /// Submit a checkout snapshot as a draft order.
    #[instrument(skip(self, snapshot), fields(headcount = %snapshot.headcount, total = snapshot.order_total))]
    pub async fn submit(&self, snapshot: OrderSnapshot) -> Result<OrderId, OrderError> {
        info!("Sending submit to actor");
        self.inner.create(snapshot).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn confirmation(&self, id: OrderId) -> Result<OrderConfirmation, OrderError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, OrderAction::Confirmation)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Confirmation(confirmation) => Ok(*confirmation),
        }
    }
}
