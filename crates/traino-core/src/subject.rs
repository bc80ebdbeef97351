//! Subject domain model.
//!
//! A subject is the student an editing session operates on. Sessions only
//! need the id (to scope document reads/writes) and the display name.

use crate::selection::GroupedSelection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The student a selection belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Opaque stable identifier (document id in the backing store).
    pub id: String,
    /// Display name, used for presentation only.
    pub name: String,
}

impl Subject {
    /// Creates a subject reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A student's onboarding profile: birthday plus selected goals.
///
/// The goal selection reuses [`GroupedSelection`] with a single pseudo-group
/// (see `catalog::preset::GOALS_GROUP_ID`), so the same toggle and
/// persistence rules apply to goals as to exercises.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingProfile {
    /// Date of birth, if the student has entered one.
    pub birthday: Option<NaiveDate>,
    /// Selected goals.
    pub goals: GroupedSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_new() {
        let subject = Subject::new("s-1", "Dana");
        assert_eq!(subject.id, "s-1");
        assert_eq!(subject.name, "Dana");
    }

    #[test]
    fn test_profile_default_is_empty() {
        let profile = OnboardingProfile::default();
        assert!(profile.birthday.is_none());
        assert!(profile.goals.is_empty());
    }
}
