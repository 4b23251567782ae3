use crate::catalog::{Catalog, CatalogError};
use crate::clients::{OrderClient, SessionClient};
use crate::commerce::{CommerceGateway, MockCommerceGateway};
use crate::config::StorefrontConfig;
use crate::model::{BuyerInfo, OrderConfirmation, SessionId};
use crate::order_actor::OrderError;
use crate::session_actor::SessionError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The running engine: catalog, session actor, order actor and the clients to reach them.
///
/// ```ignore
/// let storefront = Storefront::new(StorefrontConfig::from_env(), Catalog::embedded()?);
///
/// let id = storefront.open_session().await?;
/// storefront.sessions.select_event_type(id, EventType::Lunch).await?;
/// // ...
/// let confirmation = storefront.place_order(id, Some(buyer), false).await?;
///
/// storefront.shutdown().await?;
/// ```
pub struct Storefront {
    pub catalog: Arc<Catalog>,
    pub sessions: SessionClient,
    pub orders: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Start a storefront that submits orders through [`MockCommerceGateway`].
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let gateway = Arc::new(MockCommerceGateway::new(config.commerce.clone()));
        Self::with_gateway(config, catalog, gateway)
    }

    /// Start a storefront with the embedded catalog and default configuration.
    pub fn with_defaults() -> Result<Self, StorefrontError> {
        Ok(Self::new(StorefrontConfig::default(), Catalog::embedded()?))
    }

    pub fn with_gateway(
        config: StorefrontConfig,
        catalog: Catalog,
        gateway: Arc<dyn CommerceGateway>,
    ) -> Self {
        // 1. Create actors
        let (session_actor, session_client) = crate::session_actor::new(config.actor_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.actor_buffer);

        // 2. Start them with their contexts
        let session_handle = tokio::spawn(session_actor.run(config.delivery));
        let order_handle = tokio::spawn(order_actor.run(gateway));

        info!(
            products = catalog.products.len(),
            packages = catalog.packages.len(),
            "Storefront started"
        );
        Self {
            catalog: Arc::new(catalog),
            sessions: SessionClient::new(session_client),
            orders: OrderClient::new(order_client),
            handles: vec![session_handle, order_handle],
        }
    }

    pub async fn open_session(&self) -> Result<SessionId, StorefrontError> {
        Ok(self.sessions.open().await?)
    }

    /// Check out a session and submit it as a draft order.
    ///
    /// On success the session is reset for the next order and the confirmation is
    /// returned. On failure the cart is left as it was, so the same call can be retried.
    #[instrument(skip(self, buyer))]
    pub async fn place_order(
        &self,
        session: SessionId,
        buyer: Option<BuyerInfo>,
        setup_required: bool,
    ) -> Result<OrderConfirmation, StorefrontError> {
        let snapshot = self
            .sessions
            .checkout(session, buyer, setup_required)
            .await?;
        let order_id = self.orders.submit(snapshot).await?;
        self.sessions.reset(session).await?;

        let confirmation = self.orders.confirmation(order_id).await?;
        info!(
            order = %order_id,
            order_number = %confirmation.order_number,
            total = confirmation.order_total,
            "Order placed"
        );
        Ok(confirmation)
    }

    /// Drop every client and wait for the actors to drain.
    pub async fn shutdown(self) -> Result<(), StorefrontError> {
        info!("Shutting down storefront...");

        // Closing the channels ends each actor's receive loop.
        drop(self.sessions);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(StorefrontError::ActorTask(e.to_string()));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
