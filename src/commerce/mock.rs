//! Development gateway that accepts every draft order without calling out.

use crate::commerce::{CommerceConfig, CommerceError, CommerceGateway};
use crate::model::{DraftOrderReceipt, OrderSnapshot};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{info, instrument, warn};

pub const MOCK_INVOICE_URL: &str = "https://example.com/mock-invoice";

/// Returns sequential mock identifiers: `mock-order-1` / `#MOCK-1001`, then
/// `mock-order-2` / `#MOCK-1002`, and so on.
#[derive(Debug, Default)]
pub struct MockCommerceGateway {
    config: CommerceConfig,
    counter: AtomicU32,
}

impl MockCommerceGateway {
    pub fn new(config: CommerceConfig) -> Self {
        Self {
            config,
            counter: AtomicU32::new(0),
        }
    }

    /// Number of draft orders accepted so far.
    pub fn submitted(&self) -> u32 {
        self.counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommerceGateway for MockCommerceGateway {
    #[instrument(skip(self, snapshot), fields(headcount = %snapshot.headcount, total = snapshot.order_total))]
    async fn create_draft_order(
        &self,
        snapshot: &OrderSnapshot,
    ) -> Result<DraftOrderReceipt, CommerceError> {
        if self.config.is_configured() {
            warn!(
                store = self.config.store_domain.as_deref().unwrap_or_default(),
                "Commerce credentials configured but the platform integration is not implemented, using mock"
            );
        }

        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let receipt = DraftOrderReceipt {
            draft_order_id: format!("mock-order-{}", n),
            draft_order_number: format!("#MOCK-{}", 1000 + n),
            invoice_url: MOCK_INVOICE_URL.to_string(),
        };
        info!(draft_order_id = %receipt.draft_order_id, "Mock draft order created");
        Ok(receipt)
    }
}
