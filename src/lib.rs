//! # Catering Engine
//!
//! > **Order sizing and pricing for a catering storefront.**
//!
//! A buyer picks an event type, a per-person budget and a headcount, then either a flat
//! priced package or their own selection of products. The engine works out how much of
//! each product to send, what it costs, whether it fits the budget and whether it feeds
//! everyone, and hands the finished cart to a commerce platform as a draft order.
//!
//! ## 🧮 Pricing
//!
//! Every product carries one of six pricing models (trays, pans, per person, per dozen,
//! per each, per container). The [`pricing`] module is a set of pure functions over them:
//!
//! - [`allocate`](pricing::allocate) picks sizes and quantities for a headcount
//! - [`calculate_cart`](pricing::calculate_cart) prices a cart
//! - [`budget_status`](pricing::budget_status) and [`Coverage`](pricing::Coverage) judge it
//! - [`Quote`](pricing::Quote) bundles all of that with the delivery fee
//!
//! Totals are never stored. They are recomputed from the session state on every call.
//!
//! ## 🎭 Actors
//!
//! Mutable state lives in two actors built on the generic [`framework`]:
//!
//! - [`session_actor`]: owns every [`CateringSession`](model::CateringSession) and applies
//!   [`Transition`](model::Transition)s one at a time
//! - [`order_actor`]: submits checkout snapshots through a
//!   [`CommerceGateway`](commerce::CommerceGateway) and keeps the accepted draft orders
//!
//! Callers talk to them through the typed [`clients`], and the [`lifecycle`] module wires
//! everything into a [`Storefront`](lifecycle::Storefront).
//!
//! ## 🚀 Quick Start
//!
//! ```rust,no_run
//! use catering_engine::catalog::Catalog;
//! use catering_engine::config::StorefrontConfig;
//! use catering_engine::lifecycle::Storefront;
//! use catering_engine::model::{BuyerInfo, EventType, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let storefront = Storefront::new(StorefrontConfig::from_env(), Catalog::embedded()?);
//!     let id = storefront.open_session().await?;
//!
//!     storefront.sessions.select_event_type(id, EventType::Lunch).await?;
//!     storefront.sessions.set_headcount(id, 40).await?;
//!     if let Some(salad) = storefront.catalog.product(&ProductId::from("caesar-salad")) {
//!         storefront.sessions.add_item(id, salad.clone()).await?;
//!     }
//!
//!     let quote = storefront.sessions.quote(id).await?;
//!     println!("{} per person", quote.totals.per_person_cost);
//!
//!     let buyer = BuyerInfo::new("Dana", "dana@example.com");
//!     let confirmation = storefront.place_order(id, Some(buyer), false).await?;
//!     println!("{}", confirmation.order_number);
//!
//!     storefront.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`framework::mock`] for utilities to test clients without spawning full actors.

pub mod catalog;
pub mod clients;
pub mod commerce;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod session_actor;
