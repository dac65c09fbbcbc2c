//! Beverage entity and draft

use crate::resource::{Resource, ResourceDraft};
use chrono::{DateTime, Utc};
use console_core::parse_price;
use serde::{Deserialize, Serialize};

// ============================================================================
// Beverage
// ============================================================================

/// A beverage on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beverage {
    /// User-assigned identifier, immutable after creation
    pub beverage_id: String,

    /// Display name, e.g. "Cola"
    pub name: String,

    /// Unit price, non-negative
    pub price: f64,

    /// Server-stamped creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Server-stamped last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Beverage {
    /// Create a new beverage
    pub fn new(beverage_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            beverage_id: beverage_id.into(),
            name: name.into(),
            price,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Resource for Beverage {
    const COLLECTION: &'static str = "beverages";
    const NOUN: &'static str = "beverage";
    const NOUN_PLURAL: &'static str = "beverages";

    type Draft = BeverageDraft;

    fn id(&self) -> &str {
        &self.beverage_id
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Dialog working copy of a beverage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeverageDraft {
    pub beverage_id: String,
    pub name: String,
    pub price: String,
}

impl ResourceDraft<Beverage> for BeverageDraft {
    fn from_entity(entity: &Beverage) -> Self {
        Self {
            beverage_id: entity.beverage_id.clone(),
            name: entity.name.clone(),
            price: entity.price.to_string(),
        }
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.beverage_id.trim().is_empty() {
            errors.push("Beverage ID is required".to_string());
        }
        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if parse_price(&self.price).is_none() {
            errors.push("Price must be a non-negative number".to_string());
        }

        errors
    }

    fn build(&self) -> Result<Beverage, Vec<String>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let price = parse_price(&self.price).unwrap_or_default();

        Ok(Beverage::new(
            self.beverage_id.trim(),
            self.name.trim(),
            price,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_draft_build() {
        let draft = BeverageDraft {
            beverage_id: "B1".to_string(),
            name: "Cola".to_string(),
            price: "2.25".to_string(),
        };
        let beverage = draft.build().unwrap();
        assert_eq!(beverage.id(), "B1");
        assert_eq!(beverage.price, 2.25);
    }

    #[test]
    fn test_draft_rejects_empty_name() {
        let draft = BeverageDraft {
            beverage_id: "B1".to_string(),
            name: String::new(),
            price: "2.25".to_string(),
        };
        assert_eq!(draft.validate(), vec!["Name is required".to_string()]);
    }

    #[test]
    fn test_draft_rejects_negative_price() {
        let draft = BeverageDraft {
            beverage_id: "B1".to_string(),
            name: "Cola".to_string(),
            price: "-2".to_string(),
        };
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_wire_round_trip() {
        let json = r#"{"beverage_id": "B1", "name": "Cola", "price": 2.0}"#;
        let beverage: Beverage = serde_json::from_str(json).unwrap();
        assert_eq!(beverage.name, "Cola");
        assert!(beverage.created_at.is_none());

        let back = serde_json::to_value(&beverage).unwrap();
        assert_eq!(back["beverage_id"], "B1");
    }
}
