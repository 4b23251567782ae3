//! # Commerce Gateway
//!
//! The boundary to the external commerce platform that turns a checkout snapshot into a
//! draft order with an invoice.
//!
//! The order actor receives an `Arc<dyn CommerceGateway>` as its context, so the real
//! platform, the development mock and test doubles are interchangeable:
//!
//! ```rust,ignore
//! let gateway: Arc<dyn CommerceGateway> = Arc::new(MockCommerceGateway::new(config.commerce));
//! tokio::spawn(order_actor.run(gateway));
//! ```

pub mod error;
pub mod mock;

pub use error::CommerceError;
pub use mock::MockCommerceGateway;

use crate::model::{DraftOrderReceipt, OrderSnapshot};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait CommerceGateway: Send + Sync {
    /// Create a draft order for `snapshot` and return the platform's identifiers.
    async fn create_draft_order(
        &self,
        snapshot: &OrderSnapshot,
    ) -> Result<DraftOrderReceipt, CommerceError>;
}

/// Commerce platform credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommerceConfig {
    pub store_domain: Option<String>,
    pub admin_api_token: Option<String>,
}

impl CommerceConfig {
    pub fn new(store_domain: impl Into<String>, admin_api_token: impl Into<String>) -> Self {
        Self {
            store_domain: Some(store_domain.into()),
            admin_api_token: Some(admin_api_token.into()),
        }
    }

    /// Both the store domain and the admin token are present and non-empty.
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.store_domain) && present(&self.admin_api_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_needs_both_values() {
        assert!(!CommerceConfig::default().is_configured());
        assert!(CommerceConfig::new("shop.example.com", "token").is_configured());
        let partial = CommerceConfig {
            store_domain: Some("shop.example.com".into()),
            admin_api_token: Some(String::new()),
        };
        assert!(!partial.is_configured());
    }
}
