//! # Order Calculator
//!
//! Applies the allocator to every cart entry, scales by the buyer's item quantity and
//! sums the result. Everything is recomputed from the inputs on each call.

use crate::model::{CartTotals, CateringPackage, CateringSession, Headcount, OrderLine, SelectedItem};
use crate::pricing::allocate;

pub fn calculate_line(item: &SelectedItem, headcount: Headcount) -> OrderLine {
    let allocation = allocate(&item.product.pricing, headcount);
    let item_quantity = item.quantity.max(1);
    let display_text = if item_quantity > 1 {
        format!("{} x {}", item_quantity, allocation.display_text)
    } else {
        allocation.display_text.clone()
    };

    OrderLine {
        product: item.product.clone(),
        selected_size: allocation.selected_size,
        units: allocation.units,
        unit_price: allocation.unit_price,
        item_quantity,
        line_total: allocation.total_price() * f64::from(item_quantity),
        // Serving counts describe one allocation; extra copies are not counted as coverage.
        serves_min: allocation.serves_min,
        serves_max: allocation.serves_max,
        display_text,
    }
}

pub fn calculate_cart(items: &[SelectedItem], headcount: Headcount) -> CartTotals {
    let lines: Vec<OrderLine> = items
        .iter()
        .map(|item| calculate_line(item, headcount))
        .collect();
    let subtotal: f64 = lines.iter().map(|line| line.line_total).sum();
    let total_servings = lines
        .iter()
        .fold(0u32, |acc, line| acc.saturating_add(line.serves_min));

    CartTotals {
        lines,
        subtotal,
        per_person_cost: subtotal / headcount.as_f64(),
        total_servings,
    }
}

/// Flat package pricing. The per-person figure is the package price itself.
pub fn package_totals(package: &CateringPackage, headcount: Headcount) -> CartTotals {
    CartTotals {
        lines: Vec::new(),
        subtotal: package.price_per_person * headcount.as_f64(),
        per_person_cost: package.price_per_person,
        total_servings: headcount.get(),
    }
}

/// Totals for whatever the session currently holds: its package if one is selected,
/// otherwise its item cart.
pub fn session_totals(session: &CateringSession) -> CartTotals {
    match &session.selected_package {
        Some(package) => package_totals(package, session.headcount),
        None => calculate_cart(&session.selected_items, session.headcount),
    }
}

pub fn total_cost(items: &[SelectedItem], headcount: Headcount) -> f64 {
    calculate_cart(items, headcount).subtotal
}

pub fn per_person_cost(items: &[SelectedItem], headcount: Headcount) -> f64 {
    calculate_cart(items, headcount).per_person_cost
}

pub fn total_servings(items: &[SelectedItem], headcount: Headcount) -> u32 {
    calculate_cart(items, headcount).total_servings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventType, PricingModel, Product, SessionId, SizeOption, Transition, TraySize};

    fn wings() -> Product {
        Product::new(
            "wings",
            "Wings",
            PricingModel::Tray {
                sizes: vec![
                    SizeOption::new(TraySize::Small, 98.0, 10, 15),
                    SizeOption::new(TraySize::Medium, 156.0, 15, 24),
                    SizeOption::new(TraySize::Large, 260.0, 25, 40),
                ],
            },
        )
    }

    fn lemonade() -> Product {
        Product::new(
            "lemonade",
            "Lemonade",
            PricingModel::PerContainer {
                price_per_container: 25.0,
                serves_per_container: 10,
            },
        )
    }

    #[test]
    fn line_scales_price_not_servings() {
        let line = calculate_line(&SelectedItem::new(wings(), 2), Headcount::new(20));
        assert_eq!(line.units, 1);
        assert_eq!(line.item_quantity, 2);
        assert_eq!(line.line_total, 312.0);
        assert_eq!(line.serves_min, 15);
        assert_eq!(line.display_text, "2 x Medium Tray (serves 15-24)");
    }

    #[test]
    fn single_quantity_has_no_prefix() {
        let line = calculate_line(&SelectedItem::new(lemonade(), 1), Headcount::new(30));
        assert_eq!(line.display_text, "3 containers (serves 30)");
        assert_eq!(line.line_total, 75.0);
    }

    #[test]
    fn cart_aggregates() {
        let items = vec![SelectedItem::new(wings(), 1), SelectedItem::new(lemonade(), 1)];
        let totals = calculate_cart(&items, Headcount::new(50));
        assert_eq!(totals.lines.len(), 2);
        // 2 large trays (520) + 5 containers (125)
        assert_eq!(totals.subtotal, 645.0);
        assert_eq!(totals.per_person_cost, 12.9);
        assert_eq!(totals.total_servings, 100);

        assert_eq!(total_cost(&items, Headcount::new(50)), 645.0);
        assert_eq!(per_person_cost(&items, Headcount::new(50)), 12.9);
        assert_eq!(total_servings(&items, Headcount::new(50)), 100);
    }

    #[test]
    fn empty_cart_is_zero() {
        let totals = calculate_cart(&[], Headcount::new(25));
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.per_person_cost, 0.0);
        assert_eq!(totals.total_servings, 0);
        assert!(totals.lines.is_empty());
    }

    #[test]
    fn package_price_is_source_of_truth() {
        let pkg = CateringPackage::new("brunch", "Brunch", 22.5);
        let totals = package_totals(&pkg, Headcount::new(30));
        assert_eq!(totals.subtotal, 675.0);
        assert_eq!(totals.per_person_cost, 22.5);
    }

    #[test]
    fn session_totals_prefers_package() {
        let session = CateringSession::new(SessionId(1))
            .apply(Transition::SelectEventType(EventType::Lunch))
            .apply(Transition::SetHeadcount(20))
            .apply(Transition::AddItem(wings()));
        assert_eq!(session_totals(&session).subtotal, 156.0);

        let session = session.apply(Transition::SelectPackage(CateringPackage::new("p", "P", 20.0)));
        assert_eq!(session_totals(&session).subtotal, 400.0);
    }

    #[test]
    fn total_servings_saturate() {
        let stadium = |id: &str| {
            Product::new(
                id,
                "Stadium Tray",
                PricingModel::Tray {
                    sizes: vec![SizeOption::new(TraySize::Large, 1.0, 3_000_000_000, 4_000_000_000)],
                },
            )
        };
        let items = vec![
            SelectedItem::new(stadium("north"), 1),
            SelectedItem::new(stadium("south"), 1),
        ];
        assert_eq!(calculate_cart(&items, Headcount::MAX).total_servings, u32::MAX);

        let five: Vec<_> = (0..5).map(|_| SelectedItem::new(wings(), 1)).collect();
        let totals = calculate_cart(&five, Headcount::new(1_000_000_000));
        assert_eq!(totals.total_servings, 5 * 100_000);
    }
}
