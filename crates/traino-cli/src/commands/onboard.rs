use super::CliEnv;
use anyhow::Result;
use traino_application::OnboardingSession;
use traino_core::subject::Subject;

/// Edits a student's onboarding profile: sets the birthday and toggles the
/// given goal indices, then saves in one update.
pub async fn edit(
    env: &CliEnv,
    subject_id: &str,
    birthday: Option<chrono::NaiveDate>,
    goals: &[usize],
) -> Result<()> {
    let subject = Subject::new(subject_id, subject_id);
    let mut session =
        OnboardingSession::open(env.store.clone(), env.catalog.clone(), subject).await;

    if let Some(birthday) = birthday {
        session.set_birthday(birthday);
    }
    for &goal_index in goals {
        session.toggle_goal(goal_index);
    }

    session.save().await?;

    let profile = session.profile();
    println!("Profile saved for '{subject_id}'.");
    if let Some(birthday) = profile.birthday {
        println!("  birthday: {birthday}");
    }
    let goal_group = session.goal_group();
    let selected: Vec<&str> = profile
        .goals
        .selected_indices(goal_group.id.as_str())
        .iter()
        .filter_map(|&i| goal_group.items.get(i).map(|item| item.name.as_str()))
        .collect();
    println!("  goals: {}", if selected.is_empty() { "(none)".to_string() } else { selected.join(", ") });

    Ok(())
}
