//! Flat delivery fee by headcount band.

use crate::model::Headcount;
use serde::{Deserialize, Serialize};

/// Fee charged when the headcount is at most `max_headcount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTier {
    pub max_headcount: u32,
    pub fee: f64,
}

/// Step function from headcount to fee. Tiers are kept sorted by `max_headcount`; anything
/// above the last tier pays `over_max_fee`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryFeeSchedule {
    tiers: Vec<DeliveryTier>,
    over_max_fee: f64,
}

impl DeliveryFeeSchedule {
    pub fn new(mut tiers: Vec<DeliveryTier>, over_max_fee: f64) -> Self {
        tiers.sort_by_key(|t| t.max_headcount);
        Self {
            tiers,
            over_max_fee,
        }
    }

    pub fn fee_for(&self, headcount: Headcount) -> f64 {
        self.tiers
            .iter()
            .find(|tier| headcount.get() <= tier.max_headcount)
            .map_or(self.over_max_fee, |tier| tier.fee)
    }

    pub fn tiers(&self) -> &[DeliveryTier] {
        &self.tiers
    }

    pub fn over_max_fee(&self) -> f64 {
        self.over_max_fee
    }
}

impl Default for DeliveryFeeSchedule {
    /// $75 up to 25 guests, $125 up to 50, $200 beyond.
    fn default() -> Self {
        Self::new(
            vec![
                DeliveryTier {
                    max_headcount: 25,
                    fee: 75.0,
                },
                DeliveryTier {
                    max_headcount: 50,
                    fee: 125.0,
                },
            ],
            200.0,
        )
    }
}

/// Fee under the standard schedule.
pub fn delivery_fee(headcount: Headcount) -> f64 {
    DeliveryFeeSchedule::default().fee_for(headcount)
}
