//! # Checkout Quote
//!
//! One pass over a session state: cart or package totals, the delivery fee, budget
//! status and serving coverage, plus the frozen snapshot handed to the order actor.

use crate::model::{BuyerInfo, CartTotals, CateringSession, OrderSnapshot};
use crate::pricing::{budget_status, session_totals, BudgetStatus, Coverage, DeliveryFeeSchedule};
use serde::{Deserialize, Serialize};

/// Everything a cart or checkout summary shows, computed from one session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub totals: CartTotals,
    pub delivery_fee: f64,
    pub order_total: f64,
    /// `order_total / headcount`, i.e. including delivery.
    pub per_person_with_delivery: f64,
    pub budget_status: BudgetStatus,
    pub coverage: Coverage,
    pub can_checkout: bool,
}

impl Quote {
    pub fn for_session(session: &CateringSession, delivery: &DeliveryFeeSchedule) -> Self {
        let totals = session_totals(session);
        let delivery_fee = delivery.fee_for(session.headcount);
        let order_total = totals.subtotal + delivery_fee;
        let status = budget_status(
            totals.per_person_cost,
            session.budget_range.as_ref(),
            session.custom_budget,
        );
        let coverage = Coverage::evaluate(totals.total_servings, session.headcount);

        Self {
            per_person_with_delivery: order_total / session.headcount.as_f64(),
            delivery_fee,
            order_total,
            budget_status: status,
            coverage,
            can_checkout: session.can_proceed_to_checkout(),
            totals,
        }
    }

    /// Freeze this quote into the document handed to the commerce platform.
    pub fn into_snapshot(
        self,
        session: &CateringSession,
        buyer: BuyerInfo,
        setup_required: bool,
    ) -> OrderSnapshot {
        OrderSnapshot {
            lines: self.totals.lines,
            package: session.selected_package.clone(),
            headcount: session.headcount,
            event_type: session.event_type,
            buyer,
            setup_required,
            subtotal: self.totals.subtotal,
            delivery_fee: self.delivery_fee,
            order_total: self.order_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BudgetRange, EventType, PricingModel, Product, SessionId, Transition};

    #[test]
    fn quote_adds_delivery_and_evaluates() {
        let sandwich = Product::new(
            "sandwich-box",
            "Sandwich Box",
            PricingModel::PerPerson {
                price_per_person: 20.0,
                min_order: Some(10),
            },
        );
        let session = CateringSession::new(SessionId(1))
            .apply(Transition::SelectEventType(EventType::Lunch))
            .apply(Transition::SetBudgetRange(BudgetRange::new("budget-20-25", 20.0, 25.0)))
            .apply(Transition::SetHeadcount(30))
            .apply(Transition::AddItem(sandwich));

        let quote = Quote::for_session(&session, &DeliveryFeeSchedule::default());
        assert_eq!(quote.totals.subtotal, 600.0);
        assert_eq!(quote.delivery_fee, 125.0);
        assert_eq!(quote.order_total, 725.0);
        assert_eq!(quote.budget_status, BudgetStatus::OnTrack);
        assert_eq!(quote.coverage.percent, 100);
        assert!(quote.can_checkout);

        let snapshot = quote.into_snapshot(&session, BuyerInfo::new("Dana", "dana@example.com"), true);
        assert_eq!(snapshot.lines.len(), 1);
        assert_eq!(snapshot.order_total, 725.0);
        assert_eq!(snapshot.event_type, Some(EventType::Lunch));
    }
}
