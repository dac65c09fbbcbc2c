//! Resource abstraction shared by all three collections
//!
//! Every screen in the console manages one resource collection the same
//! way: list it, draft an entity in a dialog, create or replace it, delete
//! it by identifier, refetch. The `Resource` and `ResourceDraft` traits
//! are the seam that lets the HTTP client and the screen controller be
//! written once and instantiated per resource.

use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Resource Trait
// ============================================================================

/// A CRUD-managed entity type backed by one backend collection
///
/// Identifiers are user-assigned strings, unique per collection and
/// immutable after creation; the console never generates them.
pub trait Resource:
    Clone + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// URL path segment of the collection, e.g. `toppings`
    const COLLECTION: &'static str;

    /// Singular noun for user-facing messages, e.g. `topping`
    const NOUN: &'static str;

    /// Plural noun for user-facing messages, e.g. `toppings`
    const NOUN_PLURAL: &'static str;

    /// The dialog's working copy of this resource's field values
    type Draft: ResourceDraft<Self>;

    /// The user-assigned identifier of this entity
    fn id(&self) -> &str;
}

// ============================================================================
// Draft Trait
// ============================================================================

/// The editable field set behind a create/edit dialog
///
/// Drafts hold raw field strings as typed by the user. `validate` reports
/// every problem at once; `build` trims the identifier, parses numeric
/// fields, and produces the wire entity. A draft that fails validation
/// never reaches the network.
pub trait ResourceDraft<R>: Clone + Default + PartialEq + std::fmt::Debug {
    /// Seed a draft from an existing entity, for editing
    fn from_entity(entity: &R) -> Self;

    /// Collect all validation failures, empty when the draft is valid
    fn validate(&self) -> Vec<String>;

    /// Build the wire entity, or return the validation failures
    fn build(&self) -> Result<R, Vec<String>>;

    /// Check if the draft is valid
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
