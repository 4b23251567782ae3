//! Walks one lunch order through the engine: build a cart, quote it, place it.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use catering_engine::catalog::Catalog;
use catering_engine::config::StorefrontConfig;
use catering_engine::lifecycle::{setup_tracing, Storefront};
use catering_engine::model::{BuyerInfo, EventType};
use catering_engine::pricing::{display_price, format_currency};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let catalog = Catalog::embedded()?;
    let storefront = Storefront::new(StorefrontConfig::from_env(), catalog);
    let session = storefront.open_session().await?;

    let span = tracing::info_span!("build_cart", %session);
    async {
        let sessions = &storefront.sessions;
        sessions.select_event_type(session, EventType::Lunch).await?;
        if let Some(range) = storefront.catalog.budget_range("budget-25-40") {
            sessions.set_budget_range(session, range.clone()).await?;
        }
        sessions.set_headcount(session, 40).await?;

        for product in storefront.catalog.suggested_menu(Some(EventType::Lunch)) {
            info!(product = %product.title, price = %display_price(product), "Adding");
            sessions.add_item(session, product.clone()).await?;
        }
        Ok::<_, catering_engine::session_actor::SessionError>(())
    }
    .instrument(span)
    .await?;

    let quote = storefront.sessions.quote(session).await?;
    for line in &quote.totals.lines {
        info!(
            item = %line.product.title,
            allocation = %line.display_text,
            total = %format_currency(line.line_total),
            "Line"
        );
    }
    info!(
        subtotal = %format_currency(quote.totals.subtotal),
        delivery = %format_currency(quote.delivery_fee),
        per_person = %format_currency(quote.per_person_with_delivery),
        budget = ?quote.budget_status,
        coverage = quote.coverage.percent,
        "Quote"
    );

    let buyer = BuyerInfo::new("Dana Reyes", "dana@example.com").with_event_date("2026-11-05");
    match storefront.place_order(session, Some(buyer), true).await {
        Ok(confirmation) => info!(
            order_number = %confirmation.order_number,
            draft = ?confirmation.draft_order_number,
            total = %format_currency(confirmation.order_total),
            "Order placed"
        ),
        Err(e) => error!(error = %e, "Order failed"),
    }

    storefront.shutdown().await?;
    Ok(())
}
