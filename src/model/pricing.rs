//! Pricing models attached to catalog products.
//!
//! The catalog file tags each model with a kebab-case `type` field. Tags this crate does not
//! know deserialize to [`PricingModel::Unknown`] instead of failing the whole catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraySize {
    Small,
    Medium,
    Large,
}

impl TraySize {
    pub fn label(self) -> &'static str {
        match self {
            TraySize::Small => "Small",
            TraySize::Medium => "Medium",
            TraySize::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanSize {
    Half,
    Full,
}

impl PanSize {
    pub fn label(self) -> &'static str {
        match self {
            PanSize::Half => "Half",
            PanSize::Full => "Full",
        }
    }
}

/// The size tier an allocation settled on, for tray and pan products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedSize {
    Tray(TraySize),
    Pan(PanSize),
}

impl fmt::Display for SelectedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectedSize::Tray(size) => f.write_str(size.label()),
            SelectedSize::Pan(size) => f.write_str(size.label()),
        }
    }
}

/// One purchasable tier of a tray or pan product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption<S> {
    pub size: S,
    pub price: f64,
    pub serves_min: u32,
    pub serves_max: u32,
}

impl<S> SizeOption<S> {
    pub fn new(size: S, price: f64, serves_min: u32, serves_max: u32) -> Self {
        Self {
            size,
            price,
            serves_min,
            serves_max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PricingModel {
    Tray {
        sizes: Vec<SizeOption<TraySize>>,
    },
    Pan {
        sizes: Vec<SizeOption<PanSize>>,
    },
    PerPerson {
        price_per_person: f64,
        #[serde(default)]
        min_order: Option<u32>,
    },
    PerDozen {
        price_per_dozen: f64,
        serves_per_dozen: u32,
    },
    PerEach {
        price_each: f64,
        #[serde(default)]
        min_order: Option<u32>,
    },
    PerContainer {
        price_per_container: f64,
        serves_per_container: u32,
    },
    #[serde(other)]
    Unknown,
}

/// Pricing families in catalog display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PricingKind {
    Tray,
    Pan,
    PerPerson,
    PerDozen,
    PerEach,
    PerContainer,
    Unknown,
}

impl PricingModel {
    pub fn kind(&self) -> PricingKind {
        match self {
            PricingModel::Tray { .. } => PricingKind::Tray,
            PricingModel::Pan { .. } => PricingKind::Pan,
            PricingModel::PerPerson { .. } => PricingKind::PerPerson,
            PricingModel::PerDozen { .. } => PricingKind::PerDozen,
            PricingModel::PerEach { .. } => PricingKind::PerEach,
            PricingModel::PerContainer { .. } => PricingKind::PerContainer,
            PricingModel::Unknown => PricingKind::Unknown,
        }
    }

    /// Order tray and pan tiers by ascending `serves_max`.
    pub fn sort_sizes(&mut self) {
        match self {
            PricingModel::Tray { sizes } => sizes.sort_by_key(|s| s.serves_max),
            PricingModel::Pan { sizes } => sizes.sort_by_key(|s| s.serves_max),
            _ => {}
        }
    }

    /// Cheapest advertised unit price. For trays and pans, the lowest tier price.
    pub fn starting_price(&self) -> Option<f64> {
        match self {
            PricingModel::Tray { sizes } => lowest_price(sizes),
            PricingModel::Pan { sizes } => lowest_price(sizes),
            PricingModel::PerPerson {
                price_per_person, ..
            } => Some(*price_per_person),
            PricingModel::PerDozen {
                price_per_dozen, ..
            } => Some(*price_per_dozen),
            PricingModel::PerEach { price_each, .. } => Some(*price_each),
            PricingModel::PerContainer {
                price_per_container,
                ..
            } => Some(*price_per_container),
            PricingModel::Unknown => None,
        }
    }
}

fn lowest_price<S>(sizes: &[SizeOption<S>]) -> Option<f64> {
    sizes.iter().map(|s| s.price).reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_catalog_variant() {
        let tray: PricingModel = serde_json::from_str(
            r#"{"type":"tray","sizes":[{"size":"large","price":260,"serves_min":25,"serves_max":40}]}"#,
        )
        .unwrap();
        assert_eq!(tray.kind(), PricingKind::Tray);

        let per_person: PricingModel =
            serde_json::from_str(r#"{"type":"per-person","price_per_person":20}"#).unwrap();
        assert_eq!(
            per_person,
            PricingModel::PerPerson {
                price_per_person: 20.0,
                min_order: None
            }
        );

        let container: PricingModel = serde_json::from_str(
            r#"{"type":"per-container","price_per_container":25,"serves_per_container":10}"#,
        )
        .unwrap();
        assert_eq!(container.kind(), PricingKind::PerContainer);
    }

    #[test]
    fn unrecognised_type_is_unknown() {
        let model: PricingModel = serde_json::from_str(r#"{"type":"per-gallon"}"#).unwrap();
        assert_eq!(model, PricingModel::Unknown);
        assert_eq!(model.starting_price(), None);
    }

    #[test]
    fn sort_sizes_orders_by_capacity() {
        let mut pan = PricingModel::Pan {
            sizes: vec![
                SizeOption::new(PanSize::Full, 187.0, 20, 25),
                SizeOption::new(PanSize::Half, 117.0, 10, 15),
            ],
        };
        assert_eq!(pan.starting_price(), Some(117.0));
        pan.sort_sizes();
        match pan {
            PricingModel::Pan { sizes } => {
                assert_eq!(sizes[0].size, PanSize::Half);
                assert_eq!(sizes[1].size, PanSize::Full);
            }
            other => panic!("expected pan pricing, got {:?}", other),
        }
    }
}
