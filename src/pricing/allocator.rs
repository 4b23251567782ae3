//! # Size/Quantity Allocator
//!
//! Turns a pricing model and a headcount into a concrete purchase: which size, how many
//! units, what they cost and how many guests they feed.
//!
//! Tray and pan products use a "smallest adequate bundle" rule. The first tier (ascending
//! by `serves_max`) whose `serves_max` reaches the headcount wins as a single unit. When no
//! tier is big enough alone, the largest tier is repeated `ceil(headcount / serves_min)`
//! times. Tiers are never mixed, so some headcounts over-provision.

use crate::model::{Headcount, PanSize, PricingModel, SelectedSize, SizeOption, TraySize};
use crate::pricing::format::format_currency;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Result of sizing one product for a headcount. `serves_*` aggregate over all units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub selected_size: Option<SelectedSize>,
    pub units: u32,
    pub unit_price: f64,
    pub serves_min: u32,
    pub serves_max: u32,
    pub display_text: String,
}

impl Allocation {
    /// Fallback for pricing this crate cannot size.
    pub fn unknown() -> Self {
        Self {
            selected_size: None,
            units: 1,
            unit_price: 0.0,
            serves_min: 0,
            serves_max: 0,
            display_text: "Unknown pricing".to_string(),
        }
    }

    /// `unit_price * units`, before any user quantity.
    pub fn total_price(&self) -> f64 {
        self.unit_price * f64::from(self.units)
    }
}

pub fn allocate(pricing: &PricingModel, headcount: Headcount) -> Allocation {
    let guests = headcount.get();
    match pricing {
        PricingModel::Tray { sizes } => match smallest_adequate(sizes, guests) {
            Some((size, units)) => tiered(size, units, SelectedSize::Tray(size.size), |n| {
                tray_label(size.size, n)
            }),
            None => empty_tiers("tray"),
        },
        PricingModel::Pan { sizes } => match smallest_adequate(sizes, guests) {
            Some((size, units)) => tiered(size, units, SelectedSize::Pan(size.size), |n| {
                pan_label(size.size, n)
            }),
            None => empty_tiers("pan"),
        },
        PricingModel::PerPerson {
            price_per_person,
            min_order,
        } => {
            let units = min_order.unwrap_or(1).max(1).max(guests);
            Allocation {
                selected_size: None,
                units,
                unit_price: *price_per_person,
                serves_min: units,
                serves_max: units,
                display_text: format!(
                    "{} servings @ {}/person",
                    units,
                    format_currency(*price_per_person)
                ),
            }
        }
        PricingModel::PerEach {
            price_each,
            min_order,
        } => {
            let units = min_order.unwrap_or(1).max(1).max(guests);
            Allocation {
                selected_size: None,
                units,
                unit_price: *price_each,
                serves_min: units,
                serves_max: units,
                display_text: format!("{} @ {} each", units, format_currency(*price_each)),
            }
        }
        PricingModel::PerDozen {
            price_per_dozen,
            serves_per_dozen,
        } => {
            let per_unit = (*serves_per_dozen).max(1);
            let units = guests.div_ceil(per_unit);
            let serves = units.saturating_mul(per_unit);
            Allocation {
                selected_size: None,
                units,
                unit_price: *price_per_dozen,
                serves_min: serves,
                serves_max: serves,
                display_text: if units == 1 {
                    format!("1 dozen (serves {})", per_unit)
                } else {
                    format!("{} dozen (serves {})", units, serves)
                },
            }
        }
        PricingModel::PerContainer {
            price_per_container,
            serves_per_container,
        } => {
            let per_unit = (*serves_per_container).max(1);
            let units = guests.div_ceil(per_unit);
            let serves = units.saturating_mul(per_unit);
            Allocation {
                selected_size: None,
                units,
                unit_price: *price_per_container,
                serves_min: serves,
                serves_max: serves,
                display_text: if units == 1 {
                    format!("1 container (serves {})", per_unit)
                } else {
                    format!("{} containers (serves {})", units, serves)
                },
            }
        }
        PricingModel::Unknown => {
            warn!("Unrecognised pricing model, using zeroed allocation");
            Allocation::unknown()
        }
    }
}

/// Pick a tier and unit count for `guests`. `None` only for an empty tier list.
fn smallest_adequate<S>(sizes: &[SizeOption<S>], guests: u32) -> Option<(&SizeOption<S>, u32)> {
    let mut ordered: Vec<&SizeOption<S>> = sizes.iter().collect();
    ordered.sort_by_key(|s| s.serves_max);

    if let Some(&single) = ordered.iter().find(|s| s.serves_max >= guests) {
        return Some((single, 1));
    }

    let largest = *ordered.last()?;
    Some((largest, guests.div_ceil(largest.serves_min.max(1))))
}

fn tiered<S>(
    size: &SizeOption<S>,
    units: u32,
    selected: SelectedSize,
    label: impl Fn(u32) -> String,
) -> Allocation {
    let serves_min = size.serves_min.saturating_mul(units);
    let serves_max = size.serves_max.saturating_mul(units);
    Allocation {
        selected_size: Some(selected),
        units,
        unit_price: size.price,
        serves_min,
        serves_max,
        display_text: format!("{} (serves {}-{})", label(units), serves_min, serves_max),
    }
}

fn tray_label(size: TraySize, units: u32) -> String {
    if units == 1 {
        format!("{} Tray", size.label())
    } else {
        format!("{} {} Trays", units, size.label())
    }
}

fn pan_label(size: PanSize, units: u32) -> String {
    if units == 1 {
        format!("{} Pan", size.label())
    } else {
        format!("{} {} Pans", units, size.label())
    }
}

fn empty_tiers(kind: &str) -> Allocation {
    warn!(kind, "Sized pricing has no tiers, using zeroed allocation");
    Allocation::unknown()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_tray() -> PricingModel {
        PricingModel::Tray {
            sizes: vec![
                SizeOption::new(TraySize::Small, 98.0, 10, 15),
                SizeOption::new(TraySize::Medium, 156.0, 15, 24),
                SizeOption::new(TraySize::Large, 260.0, 25, 40),
            ],
        }
    }

    fn standard_pan() -> PricingModel {
        PricingModel::Pan {
            sizes: vec![
                SizeOption::new(PanSize::Full, 187.0, 20, 25),
                SizeOption::new(PanSize::Half, 117.0, 10, 15),
            ],
        }
    }

    #[test]
    fn tray_picks_smallest_adequate_size() {
        let a = allocate(&standard_tray(), Headcount::new(12));
        assert_eq!(a.selected_size, Some(SelectedSize::Tray(TraySize::Small)));
        assert_eq!(a.display_text, "Small Tray (serves 10-15)");

        let a = allocate(&standard_tray(), Headcount::new(20));
        assert_eq!(a.selected_size, Some(SelectedSize::Tray(TraySize::Medium)));
        assert_eq!(a.units, 1);
        assert_eq!(a.unit_price, 156.0);

        // Exactly at a tier's max stays on that tier.
        let a = allocate(&standard_tray(), Headcount::new(24));
        assert_eq!(a.selected_size, Some(SelectedSize::Tray(TraySize::Medium)));
    }

    #[test]
    fn tray_repeats_largest_when_nothing_fits() {
        let a = allocate(&standard_tray(), Headcount::new(50));
        assert_eq!(a.selected_size, Some(SelectedSize::Tray(TraySize::Large)));
        assert_eq!(a.units, 2);
        assert_eq!((a.serves_min, a.serves_max), (50, 80));
        assert_eq!(a.total_price(), 520.0);
        assert_eq!(a.display_text, "2 Large Trays (serves 50-80)");

        let a = allocate(&standard_tray(), Headcount::new(41));
        assert_eq!(a.units, 2);
    }

    #[test]
    fn pan_labels_and_unsorted_tiers() {
        let a = allocate(&standard_pan(), Headcount::new(8));
        assert_eq!(a.display_text, "Half Pan (serves 10-15)");

        let a = allocate(&standard_pan(), Headcount::new(22));
        assert_eq!(a.display_text, "Full Pan (serves 20-25)");

        let a = allocate(&standard_pan(), Headcount::new(45));
        assert_eq!(a.units, 3);
        assert_eq!(a.display_text, "3 Full Pans (serves 60-75)");
    }

    #[test]
    fn per_person_respects_minimum_order() {
        let pricing = PricingModel::PerPerson {
            price_per_person: 20.0,
            min_order: Some(10),
        };
        let a = allocate(&pricing, Headcount::new(4));
        assert_eq!(a.units, 10);
        assert_eq!(a.display_text, "10 servings @ $20.00/person");

        let a = allocate(&pricing, Headcount::new(25));
        assert_eq!((a.units, a.serves_min, a.serves_max), (25, 25, 25));
    }

    #[test]
    fn per_each_shape() {
        let pricing = PricingModel::PerEach {
            price_each: 7.0,
            min_order: None,
        };
        let a = allocate(&pricing, Headcount::new(25));
        assert_eq!(a.units, 25);
        assert_eq!(a.total_price(), 175.0);
        assert_eq!(a.display_text, "25 @ $7.00 each");
    }

    #[test]
    fn per_dozen_rounds_up() {
        let pricing = PricingModel::PerDozen {
            price_per_dozen: 30.0,
            serves_per_dozen: 12,
        };
        let a = allocate(&pricing, Headcount::new(25));
        assert_eq!(a.units, 3);
        assert_eq!(a.serves_min, 36);
        assert_eq!(a.total_price(), 90.0);
        assert_eq!(a.display_text, "3 dozen (serves 36)");

        let a = allocate(&pricing, Headcount::new(12));
        assert_eq!(a.display_text, "1 dozen (serves 12)");
    }

    #[test]
    fn per_container_shape() {
        let pricing = PricingModel::PerContainer {
            price_per_container: 25.0,
            serves_per_container: 10,
        };
        let a = allocate(&pricing, Headcount::new(5));
        assert_eq!(a.display_text, "1 container (serves 10)");
        let a = allocate(&pricing, Headcount::new(21));
        assert_eq!(a.units, 3);
        assert_eq!(a.display_text, "3 containers (serves 30)");
    }

    #[test]
    fn unknown_and_empty_tiers_are_zeroed() {
        assert_eq!(allocate(&PricingModel::Unknown, Headcount::new(30)), Allocation::unknown());
        let empty = PricingModel::Tray { sizes: Vec::new() };
        let a = allocate(&empty, Headcount::new(30));
        assert_eq!(a.units, 1);
        assert_eq!(a.total_price(), 0.0);
        assert_eq!(a.display_text, "Unknown pricing");
    }

    #[test]
    fn zero_capacity_divisors_do_not_panic() {
        let dozen = PricingModel::PerDozen {
            price_per_dozen: 30.0,
            serves_per_dozen: 0,
        };
        assert_eq!(allocate(&dozen, Headcount::new(5)).units, 5);

        let tray = PricingModel::Tray {
            sizes: vec![SizeOption::new(TraySize::Large, 100.0, 0, 10)],
        };
        assert_eq!(allocate(&tray, Headcount::new(30)).units, 30);
    }

    #[test]
    fn sized_bundles_never_under_provision() {
        for guests in 1..=200 {
            for pricing in [standard_tray(), standard_pan()] {
                let a = allocate(&pricing, Headcount::new(guests));
                assert!(a.units >= 1);
                assert!(
                    a.serves_max >= guests as u32 || a.serves_min >= guests as u32,
                    "under-provisioned {} guests: {:?}",
                    guests,
                    a
                );
                assert_eq!(a, allocate(&pricing, Headcount::new(guests)));
            }
        }
    }

    #[test]
    fn largest_event_sizes_without_overflow() {
        let a = allocate(&standard_tray(), Headcount::new(3_000_000_000));
        assert_eq!(a.selected_size, Some(SelectedSize::Tray(TraySize::Large)));
        assert_eq!(a.units, 4_000);
        assert_eq!((a.serves_min, a.serves_max), (100_000, 160_000));

        let buckets = PricingModel::PerContainer {
            price_per_container: 25.0,
            serves_per_container: 10,
        };
        assert_eq!(allocate(&buckets, Headcount::MAX).serves_min, 100_000);
    }

    #[test]
    fn oversized_tier_serving_counts_saturate() {
        // Repeating a 1-60,000 tier 100,000 times overflows the max side.
        let banquet = PricingModel::Tray {
            sizes: vec![SizeOption::new(TraySize::Large, 10.0, 1, 60_000)],
        };
        let a = allocate(&banquet, Headcount::MAX);
        assert_eq!(a.units, 100_000);
        assert_eq!(a.serves_min, 100_000);
        assert_eq!(a.serves_max, u32::MAX);
    }
}
