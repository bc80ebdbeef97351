//! Student onboarding session.
//!
//! Onboarding edits a student's profile: birthday plus a goal selection.
//! Goals reuse the grouped-selection model as a single pseudo-group whose
//! items come from a delimited goal list, so the same toggle and
//! collapse-to-delete rules apply as for exercise assignment.

use crate::reconciler::now_rfc3339;
use std::sync::Arc;
use traino_core::catalog::preset::{self, GOALS_GROUP_ID};
use traino_core::catalog::{CatalogGroup, CatalogSource};
use traino_core::document::{fields, DocumentPatch, DocumentStore};
use traino_core::error::Result;
use traino_core::selection::GroupedSelection;
use traino_core::subject::{OnboardingProfile, Subject};

/// Date format used for the persisted birthday field.
const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

fn empty_goal_group() -> CatalogGroup {
    CatalogGroup::new(GOALS_GROUP_ID, "Training goals", Vec::<String>::new())
}

/// One student's onboarding editing session.
pub struct OnboardingSession {
    subject: Subject,
    goal_group: CatalogGroup,
    profile: OnboardingProfile,
    store: Arc<dyn DocumentStore>,
}

impl OnboardingSession {
    /// Opens an onboarding session, loading the goal catalog and any
    /// persisted profile concurrently.
    ///
    /// The goal group is the catalog group with id `goals`; a missing or
    /// unreachable catalog degrades to an empty goal list, and an
    /// unreadable profile degrades to an empty one, each logged as a
    /// warning.
    pub async fn open(
        store: Arc<dyn DocumentStore>,
        catalog_source: Arc<dyn CatalogSource>,
        subject: Subject,
    ) -> Self {
        let (groups, document) = tokio::join!(catalog_source.list_groups(), store.get(&subject.id));

        let goal_group = match groups {
            Ok(groups) => groups
                .into_iter()
                .find(|g| g.id == GOALS_GROUP_ID)
                .unwrap_or_else(empty_goal_group),
            Err(e) => {
                tracing::warn!(subject_id = %subject.id, error = %e, "goal catalog load failed, showing no goals");
                empty_goal_group()
            }
        };

        let profile = match document {
            Ok(document) => Self::profile_from_document(document.as_ref()),
            Err(e) => {
                tracing::warn!(subject_id = %subject.id, error = %e, "profile load failed, starting empty");
                OnboardingProfile::default()
            }
        };

        Self {
            subject,
            goal_group,
            profile,
            store,
        }
    }

    fn profile_from_document(document: Option<&traino_core::Document>) -> OnboardingProfile {
        let Some(document) = document else {
            return OnboardingProfile::default();
        };

        let birthday = document
            .get(fields::BIRTHDAY)
            .and_then(|v| v.as_str())
            .and_then(|s| chrono::NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT).ok());

        let goals = document
            .get(fields::GOALS)
            .cloned()
            .and_then(|v| serde_json::from_value::<GroupedSelection>(v).ok())
            .unwrap_or_default();

        OnboardingProfile { birthday, goals }
    }

    /// The subject being onboarded.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The goal items offered to this student.
    pub fn goal_group(&self) -> &CatalogGroup {
        &self.goal_group
    }

    /// The current in-memory profile.
    pub fn profile(&self) -> &OnboardingProfile {
        &self.profile
    }

    /// Sets the birthday.
    pub fn set_birthday(&mut self, birthday: chrono::NaiveDate) {
        self.profile.birthday = Some(birthday);
    }

    /// Toggles one goal by its ordinal position in the goal list.
    pub fn toggle_goal(&mut self, goal_index: usize) {
        self.profile.goals.toggle(GOALS_GROUP_ID, goal_index);
    }

    /// Returns whether a goal is currently selected.
    pub fn is_goal_selected(&self, goal_index: usize) -> bool {
        self.profile.goals.is_selected(GOALS_GROUP_ID, goal_index)
    }

    /// Commits the profile in one atomic partial update: birthday (when
    /// set), the goal selection (deleted when empty), and `lastUpdated`.
    ///
    /// On failure the in-memory profile is left unchanged so the caller
    /// can retry.
    pub async fn save(&self) -> Result<()> {
        let mut patch = if self.profile.goals.is_empty() {
            DocumentPatch::new().delete(fields::GOALS)
        } else {
            DocumentPatch::new().set(fields::GOALS, serde_json::to_value(&self.profile.goals)?)
        };

        if let Some(birthday) = self.profile.birthday {
            patch = patch.set(
                fields::BIRTHDAY,
                birthday.format(BIRTHDAY_FORMAT).to_string(),
            );
        }
        patch = patch.set(fields::LAST_UPDATED, now_rfc3339());

        self.store.apply(&self.subject.id, patch).await?;
        tracing::info!(subject_id = %self.subject.id, "onboarding profile saved");
        Ok(())
    }

    /// Returns the default goal group used when no catalog provides one.
    pub fn preset_goal_group() -> CatalogGroup {
        preset::default_goal_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use traino_infrastructure::{InMemoryDocumentStore, StaticCatalogSource};

    fn goal_catalog() -> Arc<StaticCatalogSource> {
        Arc::new(StaticCatalogSource::new(vec![preset::default_goal_catalog()]))
    }

    fn subject() -> Subject {
        Subject::new("s-1", "Dana")
    }

    #[tokio::test]
    async fn test_open_with_fresh_subject() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let session = OnboardingSession::open(store, goal_catalog(), subject()).await;

        assert!(session.profile().birthday.is_none());
        assert!(session.profile().goals.is_empty());
        assert_eq!(session.goal_group().item_count(), 5);
    }

    #[tokio::test]
    async fn test_save_and_reload_profile() {
        let store = Arc::new(InMemoryDocumentStore::new());

        let mut session =
            OnboardingSession::open(store.clone(), goal_catalog(), subject()).await;
        session.set_birthday(chrono::NaiveDate::from_ymd_opt(1990, 5, 1).unwrap());
        session.toggle_goal(0);
        session.toggle_goal(2);
        session.save().await.unwrap();

        let reloaded = OnboardingSession::open(store, goal_catalog(), subject()).await;
        assert_eq!(
            reloaded.profile().birthday,
            chrono::NaiveDate::from_ymd_opt(1990, 5, 1)
        );
        assert!(reloaded.is_goal_selected(0));
        assert!(reloaded.is_goal_selected(2));
        assert!(!reloaded.is_goal_selected(1));
    }

    #[tokio::test]
    async fn test_empty_goal_selection_deletes_field() {
        let store = Arc::new(InMemoryDocumentStore::new());

        let mut session =
            OnboardingSession::open(store.clone(), goal_catalog(), subject()).await;
        session.toggle_goal(1);
        session.save().await.unwrap();

        session.toggle_goal(1);
        assert!(session.profile().goals.is_empty());
        session.save().await.unwrap();

        let document = store.get("s-1").await.unwrap().unwrap();
        assert!(!document.contains_key(fields::GOALS));
        assert!(document.contains_key(fields::LAST_UPDATED));
    }

    #[tokio::test]
    async fn test_missing_goal_group_degrades_to_empty() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let catalog = Arc::new(StaticCatalogSource::new(vec![CatalogGroup::new(
            "legs",
            "Legs",
            ["Squat"],
        )]));

        let session = OnboardingSession::open(store, catalog, subject()).await;
        assert_eq!(session.goal_group().item_count(), 0);
    }
}
