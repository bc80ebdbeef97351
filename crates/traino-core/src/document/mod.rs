//! Partial-document store abstraction.
//!
//! Subjects are persisted as schemaless JSON documents keyed by an opaque
//! id. Writers never replace a whole document; they apply a
//! [`DocumentPatch`] that sets some fields and deletes others, leaving
//! everything else untouched.

mod patch;
mod store;

pub use patch::DocumentPatch;
pub use store::DocumentStore;

/// A stored document: a JSON object of named fields.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Well-known document field names shared by all store implementations.
pub mod fields {
    /// Grouped exercise selection assigned to a student.
    pub const ASSIGNED_EXERCISES: &str = "assignedExercises";
    /// Goal selection chosen during onboarding.
    pub const GOALS: &str = "goals";
    /// Student birthday (RFC 3339 date).
    pub const BIRTHDAY: &str = "birthday";
    /// Timestamp of the last successful save or clear (RFC 3339).
    pub const LAST_UPDATED: &str = "lastUpdated";
    /// Student display name.
    pub const NAME: &str = "name";
}
