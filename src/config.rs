//! Storefront configuration.
//!
//! Everything has a working default, so `StorefrontConfig::default()` runs the engine
//! with the standard delivery tiers and the mock commerce gateway. [`StorefrontConfig::from_env`]
//! overrides individual values:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `CATERING_ACTOR_BUFFER` | mailbox size of each actor | `32` |
//! | `CATERING_DELIVERY_TIERS` | `max_headcount:fee` pairs, comma separated | `25:75,50:125` |
//! | `CATERING_DELIVERY_MAX_FEE` | fee above the last tier | `200` |
//! | `SHOPIFY_STORE_DOMAIN` | commerce store domain | unset |
//! | `SHOPIFY_ADMIN_API_ACCESS_TOKEN` | commerce admin token | unset |
//!
//! Log filtering stays on `RUST_LOG`, see [`setup_tracing`](crate::lifecycle::setup_tracing).

use crate::commerce::CommerceConfig;
use crate::pricing::{DeliveryFeeSchedule, DeliveryTier};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

pub const DEFAULT_ACTOR_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub actor_buffer: usize,
    pub delivery: DeliveryFeeSchedule,
    pub commerce: CommerceConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            delivery: DeliveryFeeSchedule::default(),
            commerce: CommerceConfig::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        let defaults = DeliveryFeeSchedule::default();
        let tiers = env::var("CATERING_DELIVERY_TIERS")
            .ok()
            .and_then(|raw| {
                let tiers = parse_delivery_tiers(&raw);
                if tiers.is_empty() {
                    warn!(value = %raw, "Ignoring CATERING_DELIVERY_TIERS without valid tiers");
                    None
                } else {
                    Some(tiers)
                }
            })
            .unwrap_or_else(|| defaults.tiers().to_vec());
        let over_max_fee = env_f64("CATERING_DELIVERY_MAX_FEE", defaults.over_max_fee());

        Self {
            actor_buffer: env_usize("CATERING_ACTOR_BUFFER", DEFAULT_ACTOR_BUFFER).max(1),
            delivery: DeliveryFeeSchedule::new(tiers, over_max_fee),
            commerce: CommerceConfig {
                store_domain: env_string("SHOPIFY_STORE_DOMAIN"),
                admin_api_token: env_string("SHOPIFY_ADMIN_API_ACCESS_TOKEN"),
            },
        }
    }

    pub fn with_actor_buffer(mut self, actor_buffer: usize) -> Self {
        self.actor_buffer = actor_buffer.max(1);
        self
    }

    pub fn with_delivery(mut self, delivery: DeliveryFeeSchedule) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_commerce(mut self, commerce: CommerceConfig) -> Self {
        self.commerce = commerce;
        self
    }
}

/// Parse `"25:75,50:125"` into delivery tiers. Malformed pairs are skipped.
pub fn parse_delivery_tiers(raw: &str) -> Vec<DeliveryTier> {
    raw.split(',')
        .filter_map(|item| {
            let (headcount, fee) = item.split_once(':')?;
            Some(DeliveryTier {
                max_headcount: headcount.trim().parse().ok()?,
                fee: fee.trim().parse().ok().filter(|fee: &f64| *fee >= 0.0)?,
            })
        })
        .collect()
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| *v >= 0.0)
        .unwrap_or(default)
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
