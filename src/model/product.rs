//! A catering product as listed in the catalog.
//!
//! Products are immutable once the catalog is loaded. Carts hold clones of them so a
//! session or snapshot never depends on the catalog outliving it.

use crate::model::PricingModel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier for products, e.g. `morning-mingle-tray`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Event types double as the product category vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Breakfast,
    Lunch,
    Dessert,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Breakfast, EventType::Lunch, EventType::Dessert];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Breakfast => "breakfast",
            EventType::Lunch => "lunch",
            EventType::Dessert => "dessert",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub categories: Vec<EventType>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub pricing: PricingModel,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, pricing: PricingModel) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            pricing,
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = EventType>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_popular(&self) -> bool {
        self.has_tag("popular")
    }

    pub fn is_offered_for(&self, event_type: EventType) -> bool {
        self.categories.contains(&event_type)
    }
}
