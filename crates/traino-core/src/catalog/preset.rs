//! Default catalog presets.
//!
//! Provides a built-in exercise catalog and onboarding goal list so a fresh
//! installation works before any catalog file has been authored.

use super::model::CatalogGroup;

/// Group id for the onboarding goals pseudo-group.
pub const GOALS_GROUP_ID: &str = "goals";

/// Delimiter used when a goal list is stored as one sentence-separated
/// string.
pub const GOALS_DELIMITER: &str = ". ";

/// Returns the built-in exercise catalog, grouped by body part.
pub fn default_exercise_catalog() -> Vec<CatalogGroup> {
    vec![
        CatalogGroup::new(
            "legs",
            "Legs",
            ["Squat", "Lunge", "Leg Press", "Calf Raise"],
        ),
        CatalogGroup::new(
            "back",
            "Back",
            ["Deadlift", "Pull-up", "Seated Row", "Lat Pulldown"],
        ),
        CatalogGroup::new(
            "chest",
            "Chest",
            ["Bench Press", "Push-up", "Chest Fly"],
        ),
        CatalogGroup::new(
            "arms",
            "Arms",
            ["Biceps Curl", "Triceps Extension", "Hammer Curl"],
        ),
        CatalogGroup::new(
            "core",
            "Core",
            ["Plank", "Crunch", "Russian Twist"],
        ),
    ]
}

/// Returns the built-in onboarding goal list as a single catalog group.
///
/// The goal text is stored as one delimited string, matching how the
/// onboarding content is authored, and split into items on load.
pub fn default_goal_catalog() -> CatalogGroup {
    CatalogGroup::from_delimited(
        GOALS_GROUP_ID,
        "Training goals",
        "Lose weight. Build muscle. Improve endurance. Increase flexibility. Train for an event",
        GOALS_DELIMITER,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_unique_ids() {
        let groups = default_exercise_catalog();
        let mut ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), groups.len());
    }

    #[test]
    fn test_default_goal_catalog_splits() {
        let goals = default_goal_catalog();
        assert_eq!(goals.id, GOALS_GROUP_ID);
        assert_eq!(goals.item_count(), 5);
        assert_eq!(goals.items[0].name, "Lose weight");
    }
}
