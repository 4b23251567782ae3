use crate::model::{EventType, Headcount};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub String);

impl From<&str> for PackageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A curated menu sold at a flat per-person price.
///
/// `items` are descriptive lines only. They are not cart items and carry no pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CateringPackage {
    pub id: PackageId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price_per_person: f64,
    #[serde(default)]
    pub items: Vec<String>,
    pub categories: Vec<EventType>,
    #[serde(default)]
    pub min_headcount: Option<u32>,
    #[serde(default)]
    pub max_headcount: Option<u32>,
}

impl CateringPackage {
    pub fn new(id: impl Into<PackageId>, title: impl Into<String>, price_per_person: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            price_per_person,
            items: Vec::new(),
            categories: Vec::new(),
            min_headcount: None,
            max_headcount: None,
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = EventType>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_min_headcount(mut self, min: u32) -> Self {
        self.min_headcount = Some(min);
        self
    }

    pub fn meets_min_headcount(&self, headcount: Headcount) -> bool {
        self.min_headcount.map_or(true, |min| headcount.get() >= min)
    }

    pub fn is_offered_for(&self, event_type: EventType) -> bool {
        self.categories.contains(&event_type)
    }

    /// Inclusive range check on the flat per-person price.
    pub fn priced_within(&self, min: f64, max: f64) -> bool {
        self.price_per_person >= min && self.price_per_person <= max
    }
}

impl From<String> for PackageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_headcount_gate() {
        let pkg = CateringPackage::new("lunch-box", "Boxed Lunch", 24.0).with_min_headcount(10);
        assert!(!pkg.meets_min_headcount(Headcount::new(9)));
        assert!(pkg.meets_min_headcount(Headcount::new(10)));
        assert!(CateringPackage::new("open", "Open", 20.0).meets_min_headcount(Headcount::MIN));
    }

    #[test]
    fn price_band_is_inclusive() {
        let pkg = CateringPackage::new("p", "P", 25.0);
        assert!(pkg.priced_within(20.0, 25.0));
        assert!(pkg.priced_within(25.0, 40.0));
        assert!(!pkg.priced_within(40.0, 100.0));
    }
}
