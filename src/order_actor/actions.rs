//! Custom actions for the order actor.

use crate::model::OrderConfirmation;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Build the buyer-facing confirmation for a submitted order.
    Confirmation,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    Confirmation(Box<OrderConfirmation>),
}
