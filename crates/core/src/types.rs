//! Core types shared across the pizza console
//!
//! This module contains the fundamental types used by the resource models,
//! the HTTP client, and the UI: the pizza size enumeration and the price
//! parsing/formatting helpers used at the dialog boundary.

use serde::{Deserialize, Serialize};

// ============================================================================
// Pizza Sizes
// ============================================================================

/// Available pizza sizes
///
/// The backend stores the size as a plain string; the wire values are the
/// capitalized variant names ("Small", "Medium", "Large").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PizzaSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PizzaSize {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PizzaSize::Small => "Small",
            PizzaSize::Medium => "Medium",
            PizzaSize::Large => "Large",
        }
    }

    /// Get all pizza sizes, in menu order
    pub fn all() -> &'static [PizzaSize] {
        &[PizzaSize::Small, PizzaSize::Medium, PizzaSize::Large]
    }

    /// Parse a size from its wire/display string
    pub fn parse(value: &str) -> Option<PizzaSize> {
        match value {
            "Small" => Some(PizzaSize::Small),
            "Medium" => Some(PizzaSize::Medium),
            "Large" => Some(PizzaSize::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Price Helpers
// ============================================================================

/// Parse a price entered in a dialog field
///
/// Accepts anything `f64::from_str` accepts after trimming, then rejects
/// values that are not finite or are negative. Returns `None` for input
/// that must not reach the network.
pub fn parse_price(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Format a price for table display, e.g. `$1.50`
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pizza_size_display() {
        assert_eq!(PizzaSize::Small.display_name(), "Small");
        assert_eq!(PizzaSize::Large.to_string(), "Large");
    }

    #[test]
    fn test_pizza_size_parse() {
        assert_eq!(PizzaSize::parse("Small"), Some(PizzaSize::Small));
        assert_eq!(PizzaSize::parse("Medium"), Some(PizzaSize::Medium));
        assert_eq!(PizzaSize::parse("Large"), Some(PizzaSize::Large));
        assert_eq!(PizzaSize::parse("large"), None);
        assert_eq!(PizzaSize::parse(""), None);
    }

    #[test]
    fn test_pizza_size_all() {
        assert_eq!(PizzaSize::all().len(), 3);
        assert_eq!(PizzaSize::all()[0], PizzaSize::Small);
    }

    #[test]
    fn test_pizza_size_serde() {
        let json = serde_json::to_string(&PizzaSize::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");

        let size: PizzaSize = serde_json::from_str("\"Large\"").unwrap();
        assert_eq!(size, PizzaSize::Large);
    }

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("1.50"), Some(1.5));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price("  12.99  "), Some(12.99));
        assert_eq!(parse_price("1e2"), Some(100.0));
    }

    #[test]
    fn test_parse_price_invalid() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("1.2.3"), None);
        assert_eq!(parse_price("-1.50"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1.5), "$1.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(12.999), "$13.00");
    }
}
