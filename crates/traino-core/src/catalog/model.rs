//! Catalog domain models.
//!
//! A catalog is the universe of selectable groups and items a session
//! presents: body parts with their exercises, or onboarding goal lists.
//! Catalogs are immutable for the duration of one editing session.

use serde::{Deserialize, Serialize};

/// A selectable item within a group.
///
/// Items have no identity of their own; selection state refers to them by
/// their ordinal position within the owning group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name (e.g., "Squat").
    pub name: String,
}

impl CatalogItem {
    /// Creates an item with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An identified, ordered collection of selectable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGroup {
    /// Opaque stable identifier (document id in the backing store).
    pub id: String,
    /// Display label (e.g., "Legs").
    pub label: String,
    /// Ordered items; the ordinal position is the item's identity.
    pub items: Vec<CatalogItem>,
}

impl CatalogGroup {
    /// Creates a group from item display names.
    pub fn new<I, S>(id: impl Into<String>, label: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            label: label.into(),
            items: items.into_iter().map(CatalogItem::new).collect(),
        }
    }

    /// Splits a delimited text (e.g., a goals sentence list) into items.
    ///
    /// Blank fragments produced by trailing delimiters are dropped; the
    /// surviving fragments keep their order so ordinal identity is stable.
    pub fn from_delimited(
        id: impl Into<String>,
        label: impl Into<String>,
        text: &str,
        delimiter: &str,
    ) -> Self {
        let items = text
            .split(delimiter)
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(CatalogItem::new)
            .collect();
        Self {
            id: id.into(),
            label: label.into(),
            items,
        }
    }

    /// Number of items in the group.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
