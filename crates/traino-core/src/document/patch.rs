//! Partial-document update description.

use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// A partial update to one document: fields to set and fields to delete.
///
/// Setting and deleting are conflated into one patch so a save can replace
/// a selection field (or delete it) and stamp `lastUpdated` in a single
/// atomic store operation.
/// Deleting here is the "remove this field" sentinel; deleting a field the
/// document does not have is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DocumentPatch {
    sets: HashMap<String, Value>,
    deletes: BTreeSet<String>,
}

impl DocumentPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to a value.
    ///
    /// A later `set` of the same field wins; a `set` also cancels a prior
    /// `delete` of that field within this patch.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let field = field.into();
        self.deletes.remove(&field);
        self.sets.insert(field, value.into());
        self
    }

    /// Marks a field for deletion, cancelling a prior `set` of the same
    /// field within this patch.
    pub fn delete(mut self, field: impl Into<String>) -> Self {
        let field = field.into();
        self.sets.remove(&field);
        self.deletes.insert(field);
        self
    }

    /// Fields this patch sets.
    pub fn sets(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.sets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fields this patch deletes.
    pub fn deletes(&self) -> impl Iterator<Item = &str> {
        self.deletes.iter().map(String::as_str)
    }

    /// Returns whether the patch neither sets nor deletes anything.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty() && self.deletes.is_empty()
    }

    /// Applies this patch to a document in place.
    ///
    /// Store implementations share this so merge semantics cannot drift
    /// between backends: named fields are set or removed, all other fields
    /// are untouched.
    pub fn apply_to(&self, document: &mut super::Document) {
        for (field, value) in &self.sets {
            document.insert(field.clone(), value.clone());
        }
        for field in &self.deletes {
            document.remove(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_merges_and_deletes() {
        let mut doc = super::super::Document::new();
        doc.insert("name".to_string(), json!("Dana"));
        doc.insert("goals".to_string(), json!([0, 1]));

        let patch = DocumentPatch::new()
            .set("birthday", "1990-05-01")
            .delete("goals");
        patch.apply_to(&mut doc);

        assert_eq!(doc.get("name"), Some(&json!("Dana")));
        assert_eq!(doc.get("birthday"), Some(&json!("1990-05-01")));
        assert!(!doc.contains_key("goals"));
    }

    #[test]
    fn test_delete_missing_field_is_noop() {
        let mut doc = super::super::Document::new();
        doc.insert("name".to_string(), json!("Dana"));

        DocumentPatch::new().delete("goals").apply_to(&mut doc);

        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_set_cancels_prior_delete() {
        let patch = DocumentPatch::new().delete("goals").set("goals", json!([2]));

        let mut doc = super::super::Document::new();
        patch.apply_to(&mut doc);

        assert_eq!(doc.get("goals"), Some(&json!([2])));
    }
}
