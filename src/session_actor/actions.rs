//! Custom actions for the session actor.
//!
//! Every state change goes through [`SessionAction::Apply`], so a session is only ever
//! mutated by one transition at a time, in arrival order.

use crate::model::{BuyerInfo, CateringSession, OrderSnapshot, Transition};
use crate::pricing::Quote;

/// Payload for opening a session.
#[derive(Debug, Clone, Default)]
pub enum SessionCreate {
    /// A blank session on step 1 with the default headcount.
    #[default]
    Fresh,
    /// Resume a previously saved state under the new session id.
    Restore(Box<CateringSession>),
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Run one reducer transition.
    Apply(Transition),
    /// Price the current state.
    Quote,
    /// Freeze the current state into an order snapshot.
    ///
    /// A `buyer` given here is stored on the session first; otherwise the buyer info
    /// already on the session is used.
    Checkout {
        buyer: Option<BuyerInfo>,
        setup_required: bool,
    },
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone)]
pub enum SessionActionResult {
    /// The session after the transition.
    Apply(Box<CateringSession>),
    Quote(Box<Quote>),
    Checkout(Box<OrderSnapshot>),
}
