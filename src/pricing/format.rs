//! Money and price-label formatting for carts and product cards.

use crate::model::{PricingModel, Product};

/// US-dollar amount with thousands separators and two decimals, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Headline price for a product card.
pub fn display_price(product: &Product) -> String {
    match &product.pricing {
        PricingModel::Tray { .. } | PricingModel::Pan { .. } => match product.pricing.starting_price() {
            Some(price) => format!("From {}", format_currency(price)),
            None => "Price varies".to_string(),
        },
        PricingModel::PerPerson {
            price_per_person, ..
        } => format!("{}/person", format_currency(*price_per_person)),
        PricingModel::PerDozen {
            price_per_dozen, ..
        } => format!("{}/dozen", format_currency(*price_per_dozen)),
        PricingModel::PerEach { price_each, .. } => format!("{} each", format_currency(*price_each)),
        PricingModel::PerContainer {
            price_per_container,
            ..
        } => format!("{}/container", format_currency(*price_per_container)),
        PricingModel::Unknown => "Price varies".to_string(),
    }
}

/// Short description of how a product is sold.
pub fn pricing_type_label(product: &Product) -> String {
    match &product.pricing {
        PricingModel::Tray { .. } => "Tray sizes: S/M/L".to_string(),
        PricingModel::Pan { .. } => "Pan sizes: Half/Full".to_string(),
        PricingModel::PerPerson { .. } => "Per person".to_string(),
        PricingModel::PerDozen { .. } => "Per dozen".to_string(),
        PricingModel::PerEach { .. } => "Per item".to_string(),
        PricingModel::PerContainer {
            serves_per_container,
            ..
        } => format!("Serves {}", serves_per_container),
        PricingModel::Unknown => String::new(),
    }
}
