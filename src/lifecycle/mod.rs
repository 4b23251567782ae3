//! # Lifecycle
//!
//! Starting, wiring and stopping the actors behind a storefront.
//!
//! The session actor and the order actor are independent: the session actor's context is
//! the delivery fee schedule and the order actor's context is the commerce gateway. The
//! [`Storefront`] coordinates them for checkout, so neither actor holds a client of the
//! other and shutdown is just dropping the clients and awaiting the tasks.

pub mod storefront;
pub mod tracing;

pub use storefront::*;
pub use self::tracing::setup_tracing;
