//! Pizza type entity and draft
//!
//! A pizza type additionally has an associated ordered list of topping
//! names. That association lives behind a separate per-pizza lookup call
//! (`GET /pizzas/{id}/toppings`) and is never stored inline on the entity.

use crate::resource::{Resource, ResourceDraft};
use chrono::{DateTime, Utc};
use console_core::{PizzaSize, parse_price};
use serde::{Deserialize, Serialize};

// ============================================================================
// PizzaType
// ============================================================================

/// A pizza on the menu, in one size, with a base price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaType {
    /// User-assigned identifier, immutable after creation
    pub pizza_type_id: String,

    /// Display name, e.g. "Margherita"
    pub name: String,

    /// Pizza size
    pub size: PizzaSize,

    /// Base price before toppings, non-negative
    pub base_price: f64,

    /// Free-form description
    pub description: String,

    /// Server-stamped creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Server-stamped last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PizzaType {
    /// Create a new pizza type
    pub fn new(
        pizza_type_id: impl Into<String>,
        name: impl Into<String>,
        size: PizzaSize,
        base_price: f64,
    ) -> Self {
        Self {
            pizza_type_id: pizza_type_id.into(),
            name: name.into(),
            size,
            base_price,
            description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Resource for PizzaType {
    const COLLECTION: &'static str = "pizzas";
    const NOUN: &'static str = "pizza";
    const NOUN_PLURAL: &'static str = "pizza types";

    type Draft = PizzaTypeDraft;

    fn id(&self) -> &str {
        &self.pizza_type_id
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Dialog working copy of a pizza type
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaTypeDraft {
    pub pizza_type_id: String,
    pub name: String,
    pub size: PizzaSize,
    pub base_price: String,
    pub description: String,
}

impl Default for PizzaTypeDraft {
    fn default() -> Self {
        Self {
            pizza_type_id: String::new(),
            name: String::new(),
            size: PizzaSize::default(),
            base_price: String::new(),
            description: String::new(),
        }
    }
}

impl ResourceDraft<PizzaType> for PizzaTypeDraft {
    fn from_entity(entity: &PizzaType) -> Self {
        Self {
            pizza_type_id: entity.pizza_type_id.clone(),
            name: entity.name.clone(),
            size: entity.size,
            base_price: entity.base_price.to_string(),
            description: entity.description.clone(),
        }
    }

    fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.pizza_type_id.trim().is_empty() {
            errors.push("Pizza ID is required".to_string());
        }
        if self.name.trim().is_empty() {
            errors.push("Name is required".to_string());
        }
        if parse_price(&self.base_price).is_none() {
            errors.push("Base price must be a non-negative number".to_string());
        }

        errors
    }

    fn build(&self) -> Result<PizzaType, Vec<String>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let base_price = parse_price(&self.base_price).unwrap_or_default();

        Ok(
            PizzaType::new(self.pizza_type_id.trim(), self.name.trim(), self.size, base_price)
                .with_description(self.description.clone()),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
