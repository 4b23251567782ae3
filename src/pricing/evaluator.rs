//! # Budget/Coverage Evaluator
//!
//! Classifies a per-person cost against the buyer's budget band and measures how much of
//! the headcount the cart feeds.

use crate::model::{BudgetRange, Headcount, SelectedItem};
use crate::pricing::total_servings;
use serde::{Deserialize, Serialize};

/// Floor of a custom budget, as a share of the amount the buyer typed in.
pub const CUSTOM_BUDGET_FLOOR: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    Under,
    OnTrack,
    Over,
}

/// The `(min, max)` a per-person cost is judged against.
///
/// A custom band uses the custom amount as its max and 80% of it as its min. A custom
/// band without an amount falls back to the band's own bounds.
pub fn effective_budget(range: &BudgetRange, custom_amount: Option<f64>) -> (f64, f64) {
    match custom_amount {
        Some(amount) if range.is_custom && amount > 0.0 => (amount * CUSTOM_BUDGET_FLOOR, amount),
        _ => (range.min, range.max),
    }
}

pub fn budget_status(
    per_person_cost: f64,
    range: Option<&BudgetRange>,
    custom_amount: Option<f64>,
) -> BudgetStatus {
    let Some(range) = range else {
        return BudgetStatus::OnTrack;
    };
    let (min, max) = effective_budget(range, custom_amount);
    if per_person_cost < min {
        BudgetStatus::Under
    } else if per_person_cost > max {
        BudgetStatus::Over
    } else {
        BudgetStatus::OnTrack
    }
}

/// `per_person_cost <= effective max`. Always true without a band.
pub fn is_within_budget(
    per_person_cost: f64,
    range: Option<&BudgetRange>,
    custom_amount: Option<f64>,
) -> bool {
    range.map_or(true, |range| {
        per_person_cost <= effective_budget(range, custom_amount).1
    })
}

/// `round(total_servings / headcount * 100)`. Not capped.
pub fn serving_coverage(items: &[SelectedItem], headcount: Headcount) -> u32 {
    coverage_percent(total_servings(items, headcount), headcount)
}

pub fn has_enough_servings(items: &[SelectedItem], headcount: Headcount) -> bool {
    total_servings(items, headcount) >= headcount.get()
}

pub fn coverage_percent(total_servings: u32, headcount: Headcount) -> u32 {
    (f64::from(total_servings) / headcount.as_f64() * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageLevel {
    /// Rounded percent of 100 or more.
    Enough,
    /// 70% or more.
    Close,
    Short,
}

/// Serving coverage with both the raw metric and its progress-bar clamp.
///
/// `level` follows the rounded percent; `enough` compares the raw counts, so 199
/// servings for 200 guests shows a full bar but is still short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub total_servings: u32,
    pub percent: u32,
    pub display_percent: u32,
    pub level: CoverageLevel,
    pub enough: bool,
}

impl Coverage {
    pub fn evaluate(total_servings: u32, headcount: Headcount) -> Self {
        let percent = coverage_percent(total_servings, headcount);
        let level = match percent {
            p if p >= 100 => CoverageLevel::Enough,
            p if p >= 70 => CoverageLevel::Close,
            _ => CoverageLevel::Short,
        };
        Self {
            total_servings,
            percent,
            display_percent: percent.min(100),
            level,
            enough: total_servings >= headcount.get(),
        }
    }

    /// Same answer as [`has_enough_servings`] for the cart this was built from.
    pub fn is_enough(&self) -> bool {
        self.enough
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PricingModel, Product};

    fn band() -> BudgetRange {
        BudgetRange::new("budget-20-25", 20.0, 25.0)
    }

    #[test]
    fn status_against_fixed_band() {
        assert_eq!(budget_status(10.0, Some(&band()), None), BudgetStatus::Under);
        assert_eq!(budget_status(20.0, Some(&band()), None), BudgetStatus::OnTrack);
        assert_eq!(budget_status(25.0, Some(&band()), None), BudgetStatus::OnTrack);
        assert_eq!(budget_status(25.01, Some(&band()), None), BudgetStatus::Over);
    }

    #[test]
    fn no_band_is_always_on_track() {
        assert_eq!(budget_status(999.0, None, None), BudgetStatus::OnTrack);
        assert!(is_within_budget(999.0, None, Some(5.0)));
    }

    #[test]
    fn custom_band_uses_floor() {
        let custom = BudgetRange::custom();
        assert_eq!(effective_budget(&custom, Some(30.0)), (24.0, 30.0));
        assert_eq!(budget_status(23.0, Some(&custom), Some(30.0)), BudgetStatus::Under);
        assert_eq!(budget_status(24.0, Some(&custom), Some(30.0)), BudgetStatus::OnTrack);
        assert_eq!(budget_status(31.0, Some(&custom), Some(30.0)), BudgetStatus::Over);
        assert!(is_within_budget(30.0, Some(&custom), Some(30.0)));
        assert!(!is_within_budget(30.5, Some(&custom), Some(30.0)));
    }

    #[test]
    fn custom_amount_ignored_on_fixed_band() {
        assert_eq!(effective_budget(&band(), Some(50.0)), (20.0, 25.0));
    }

    #[test]
    fn coverage_is_uncapped_but_display_is_clamped() {
        let c = Coverage::evaluate(60, Headcount::new(40));
        assert_eq!(c.percent, 150);
        assert_eq!(c.display_percent, 100);
        assert!(c.is_enough());

        let c = Coverage::evaluate(40, Headcount::new(50));
        assert_eq!(c.percent, 80);
        assert_eq!(c.level, CoverageLevel::Close);

        let c = Coverage::evaluate(10, Headcount::new(50));
        assert_eq!(c.level, CoverageLevel::Short);
    }

    #[test]
    fn one_serving_short_is_not_enough() {
        let c = Coverage::evaluate(199, Headcount::new(200));
        assert_eq!(c.percent, 100);
        assert_eq!(c.level, CoverageLevel::Enough);
        assert!(!c.is_enough());

        let c = Coverage::evaluate(200, Headcount::new(200));
        assert!(c.is_enough());
    }

    #[test]
    fn coverage_from_items() {
        let cookies = Product::new(
            "cookies",
            "Cookies",
            PricingModel::PerDozen {
                price_per_dozen: 30.0,
                serves_per_dozen: 12,
            },
        );
        let items = vec![SelectedItem::new(cookies, 1)];
        // 3 dozen cover 36 of 25 guests.
        assert_eq!(serving_coverage(&items, Headcount::new(25)), 144);
        assert!(has_enough_servings(&items, Headcount::new(25)));
        assert_eq!(serving_coverage(&[], Headcount::new(25)), 0);
        assert!(!has_enough_servings(&[], Headcount::new(25)));
    }
}
