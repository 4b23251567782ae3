//! # Catalog
//!
//! Read-only product, package, budget band and event type data, loaded once from JSON
//! and shared by reference afterwards.
//!
//! The crate ships a default catalog in `data/catalog.json`, available through
//! [`Catalog::embedded`]. Deployments with their own menu load it with
//! [`Catalog::from_json`].

pub mod error;
pub mod search;

pub use error::CatalogError;
pub use search::*;

use crate::model::{
    BudgetRange, CateringPackage, EventType, EventTypeConfig, PackageId, Product, ProductId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub event_types: Vec<EventTypeConfig>,
    #[serde(default)]
    pub budget_ranges: Vec<BudgetRange>,
    #[serde(default)]
    pub packages: Vec<CateringPackage>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// Size tiers are sorted by capacity on load so every listing sees them smallest
    /// first.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        for product in &mut catalog.products {
            product.pricing.sort_sizes();
        }
        catalog.validate()?;
        info!(
            products = catalog.products.len(),
            packages = catalog.packages.len(),
            budget_ranges = catalog.budget_ranges.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.to_string()));
            }
            if product.categories.is_empty() {
                return Err(CatalogError::EmptyCategories(product.id.to_string()));
            }
        }

        let mut seen = HashSet::new();
        for package in &self.packages {
            if !seen.insert(&package.id) {
                return Err(CatalogError::DuplicatePackage(package.id.to_string()));
            }
            if package.price_per_person < 0.0 {
                return Err(CatalogError::NegativePrice(package.id.to_string()));
            }
        }

        for range in &self.budget_ranges {
            if !range.is_custom && range.min > range.max {
                return Err(CatalogError::InvertedBudgetRange(range.id.clone()));
            }
        }
        Ok(())
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products offered for an event type, or every product when no type is given.
    pub fn products_for(&self, event_type: Option<EventType>) -> Vec<&Product> {
        match event_type {
            Some(event_type) => self
                .products
                .iter()
                .filter(|p| p.is_offered_for(event_type))
                .collect(),
            None => self.products.iter().collect(),
        }
    }

    pub fn products_by_category(&self, category: EventType) -> Vec<&Product> {
        self.products_for(Some(category))
    }

    pub fn package(&self, id: &PackageId) -> Option<&CateringPackage> {
        self.packages.iter().find(|p| &p.id == id)
    }

    pub fn packages_for(&self, event_type: EventType) -> Vec<&CateringPackage> {
        self.packages
            .iter()
            .filter(|p| p.is_offered_for(event_type))
            .collect()
    }

    /// Packages whose per-person price falls inside `[min, max]`.
    pub fn packages_within_budget(&self, min: f64, max: f64) -> Vec<&CateringPackage> {
        let packages: Vec<_> = self
            .packages
            .iter()
            .filter(|p| p.priced_within(min, max))
            .collect();
        debug!(min, max, matched = packages.len(), "Filtered packages by budget");
        packages
    }

    pub fn budget_range(&self, id: &str) -> Option<&BudgetRange> {
        self.budget_ranges.iter().find(|r| r.id == id)
    }

    pub fn event_type(&self, id: EventType) -> Option<&EventTypeConfig> {
        self.event_types.iter().find(|c| c.id == id)
    }

    /// Configured display name, falling back to the raw id.
    pub fn event_type_name(&self, id: EventType) -> String {
        self.event_type(id)
            .map_or_else(|| id.as_str().to_string(), |c| c.name.clone())
    }
}
