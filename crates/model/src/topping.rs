//! Topping entity and draft
//!
//! Wire shape matches the billing backend: `topping_id`, `name`, `price`,
//! plus server-stamped `created_at`/`updated_at` that the console never
//! sends itself.

use crate::resource::{Resource, ResourceDraft};
use chrono::{DateTime, Utc};
use console_core::parse_price;
use serde::{Deserialize, Serialize};

// ============================================================================
// Topping
// ============================================================================

/// A pizza topping with its surcharge price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topping {
    /// User-assigned identifier, immutable after creation
    pub topping_id: String,

    /// Display name, e.g. "Cheese"
    pub name: String,

    /// Surcharge price, non-negative
    pub price: f64,

    /// Server-stamped creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Server-stamped last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Topping {
    /// Create a new topping
    pub fn new(topping_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            topping_id: topping_id.into(),
            name: name.into(),
            price,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Resource for Topping {
    const COLLECTION: &'static str = "toppings";
    const NOUN: &'static str = "topping";
    const NOUN_PLURAL: &'static str = "toppings";

    type Draft = ToppingDraft;

    fn id(&self) -> &str {
        &self.topping_id
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Dialog working copy of a topping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToppingDraft {
    pub topping_id: String,
    pub name: String,
    pub price: String,
}

impl ResourceDraft<Topping> for ToppingDraft {
    fn from_entity(entity: &Topping) -> Self {
        Self {
            topping_id: entity.topping_id.clone(),
            name: entity.name.clone(),
            price: entity.price.to_string(),
        }
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.topping_id.trim().is_empty() {
            errors.push("Topping ID is required".to_string());
        }
        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if parse_price(&self.price).is_none() {
            errors.push("Price must be a non-negative number".to_string());
        }

        errors
    }

    fn build(&self) -> Result<Topping, Vec<String>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        // validate() guarantees the price parses
        let price = parse_price(&self.price).unwrap_or_default();

        Ok(Topping::new(self.topping_id.trim(), self.name.trim(), price))
    }
}

// ============================================================================
// Tests
// ============================================================================
