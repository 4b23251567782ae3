//! Error types for catalog loading.

use thiserror::Error;

/// Errors raised while parsing or validating a catalog document.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    #[error("Catalog parse error: {0}")]
    Parse(String),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    #[error("Duplicate package id: {0}")]
    DuplicatePackage(String),

    /// Every product must belong to at least one event type.
    #[error("Product has no categories: {0}")]
    EmptyCategories(String),

    #[error("Package has a negative price: {0}")]
    NegativePrice(String),

    #[error("Budget range min exceeds max: {0}")]
    InvertedBudgetRange(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
