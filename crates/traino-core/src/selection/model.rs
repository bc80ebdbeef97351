//! Grouped selection domain model.
//!
//! This module contains the core `GroupedSelection` entity: the set of
//! selected item indices per catalog group that an editing session mutates
//! and the document store persists.

use serde::de::{Deserialize, Deserializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Selected item indices keyed by group id.
///
/// A group id is present in the map **iff** its selected-index set is
/// non-empty: removing the last selected index of a group removes the group
/// key entirely. This keeps the persisted document minimal and avoids the
/// ambiguity between "group present with zero selections" and "group never
/// touched."
///
/// Items are identified by their ordinal position within the group, not by
/// a separate id. Indices within a group are unique and keep their
/// insertion order so a presenter can show stable counts and ordering.
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedSelection {
    groups: BTreeMap<String, Vec<usize>>,
}

impl GroupedSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from raw per-group index lists, normalizing as it
    /// goes: duplicate indices are dropped (first occurrence wins) and
    /// groups left with no indices are omitted.
    ///
    /// Used when hydrating from storage, where hand-edited or legacy
    /// documents may violate the map invariants.
    pub fn from_groups(raw: BTreeMap<String, Vec<usize>>) -> Self {
        let mut groups = BTreeMap::new();
        for (group_id, indices) in raw {
            let mut seen = Vec::with_capacity(indices.len());
            for index in indices {
                if !seen.contains(&index) {
                    seen.push(index);
                }
            }
            if !seen.is_empty() {
                groups.insert(group_id, seen);
            }
        }
        Self { groups }
    }

    /// Toggles one item's membership.
    ///
    /// If the index is currently selected it is removed, collapsing the
    /// group key when the last index goes. Otherwise it is appended,
    /// creating the group key if absent. Accepts any group id and index
    /// without range checking against a catalog; an index the catalog never
    /// shows is simply inert. Never fails.
    pub fn toggle(&mut self, group_id: &str, item_index: usize) {
        match self.groups.get_mut(group_id) {
            Some(indices) if indices.contains(&item_index) => {
                indices.retain(|&i| i != item_index);
                if indices.is_empty() {
                    self.groups.remove(group_id);
                }
            }
            Some(indices) => indices.push(item_index),
            None => {
                self.groups.insert(group_id.to_string(), vec![item_index]);
            }
        }
    }

    /// Returns whether the given item is selected.
    ///
    /// Returns false for a group id that has no selections.
    pub fn is_selected(&self, group_id: &str, item_index: usize) -> bool {
        self.groups
            .get(group_id)
            .is_some_and(|indices| indices.contains(&item_index))
    }

    /// Selected indices for a group, in insertion order. Empty for an
    /// untouched group.
    pub fn selected_indices(&self, group_id: &str) -> &[usize] {
        self.groups.get(group_id).map_or(&[], Vec::as_slice)
    }

    /// Number of selected items in a group (the count badge next to a
    /// group header).
    pub fn selected_count(&self, group_id: &str) -> usize {
        self.groups.get(group_id).map_or(0, Vec::len)
    }

    /// Ids of all groups with at least one selection.
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Total number of selected items across all groups.
    pub fn total_selected(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns whether no group has a selection.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups with at least one selection.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Removes every selection.
    pub fn reset(&mut self) {
        self.groups.clear();
    }
}

impl<'de> Deserialize<'de> for GroupedSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Normalize on the way in so a deserialized value always satisfies
        // the non-empty-group and unique-index invariants.
        let raw = BTreeMap::<String, Vec<usize>>::deserialize(deserializer)?;
        Ok(Self::from_groups(raw))
    }
}
