use crate::model::EventType;
use serde::{Deserialize, Serialize};

/// A per-person budget band the buyer picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl BudgetRange {
    pub const CUSTOM_ID: &'static str = "budget-custom";

    pub fn new(id: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            id: id.into(),
            label: format!("${} - ${}", min, max),
            min,
            max,
            description: String::new(),
            is_custom: false,
        }
    }

    /// The open-ended band whose bounds come from the session's custom amount.
    pub fn custom() -> Self {
        Self {
            id: Self::CUSTOM_ID.to_string(),
            label: "Custom".to_string(),
            min: 0.0,
            max: 0.0,
            description: "Set your own per-person budget".to_string(),
            is_custom: true,
        }
    }

    /// Short label for summaries: `"Custom"` or `"$20 - $25"`.
    pub fn display_label(&self) -> String {
        if self.is_custom {
            "Custom".to_string()
        } else {
            format!("${} - ${}", self.min, self.max)
        }
    }
}

/// Display metadata for an event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTypeConfig {
    pub id: EventType,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub suggested_items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_formats_whole_dollars() {
        assert_eq!(BudgetRange::new("b", 20.0, 25.0).display_label(), "$20 - $25");
        assert_eq!(BudgetRange::new("b", 40.0, 100.0).display_label(), "$40 - $100");
        assert_eq!(BudgetRange::custom().display_label(), "Custom");
    }
}
