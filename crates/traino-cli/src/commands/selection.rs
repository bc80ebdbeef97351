use super::CliEnv;
use anyhow::{bail, Result};
use traino_application::SelectionSession;
use traino_core::subject::Subject;

/// Prints a student's current exercise assignment, resolving item names
/// against the catalog.
pub async fn show(env: &CliEnv, subject_id: &str) -> Result<()> {
    let subject = Subject::new(subject_id, subject_id);
    let session =
        SelectionSession::for_exercises(env.store.clone(), env.catalog.clone(), subject).await;

    if session.selection().is_empty() {
        println!("No exercises assigned to '{subject_id}'.");
        return Ok(());
    }

    for group in session.groups() {
        let count = session.selected_count(&group.id);
        if count == 0 {
            continue;
        }
        println!("{} ({count})", group.label);
        for index in session.selection().selected_indices(&group.id) {
            match group.items.get(*index) {
                Some(item) => println!("  [{index}] {}", item.name),
                None => println!("  [{index}] (not in catalog)"),
            }
        }
    }

    // Selections whose group the catalog no longer lists.
    for group_id in session.selection().group_ids() {
        if session.groups().iter().any(|g| g.id == group_id) {
            continue;
        }
        println!(
            "{group_id} (unknown group): {:?}",
            session.selection().selected_indices(group_id)
        );
    }

    Ok(())
}

/// Toggles the given item indices in one group and saves the result.
pub async fn assign(
    env: &CliEnv,
    subject_id: &str,
    name: &str,
    group_id: &str,
    indices: &[usize],
) -> Result<()> {
    let display_name = if name.is_empty() { subject_id } else { name };
    let subject = Subject::new(subject_id, display_name);
    let mut session =
        SelectionSession::for_exercises(env.store.clone(), env.catalog.clone(), subject).await;

    let group_len = session
        .groups()
        .iter()
        .find(|g| g.id == group_id)
        .map(|g| g.items.len());
    if group_len.is_none() {
        tracing::warn!(group_id, "group not in catalog; toggling anyway");
    }

    for &index in indices {
        if let Some(len) = group_len {
            if index >= len {
                tracing::warn!(group_id, index, "index outside catalog group; toggling anyway");
            }
        }
        session.toggle(group_id, index);
    }

    session.save().await?;

    println!(
        "Saved assignment for {}: {} exercise(s) in {} group(s).",
        session.subject().name,
        session.selection().total_selected(),
        session.selection().group_count(),
    );
    Ok(())
}

/// Deletes the whole assignment after an explicit confirmation flag.
pub async fn clear(env: &CliEnv, subject_id: &str, yes: bool) -> Result<()> {
    if !yes {
        bail!("deleting all assigned exercises cannot be undone; re-run with --yes to confirm");
    }

    let subject = Subject::new(subject_id, subject_id);
    let mut session =
        SelectionSession::for_exercises(env.store.clone(), env.catalog.clone(), subject).await;

    session.clear().await?;
    println!("Deleted all assigned exercises for '{subject_id}'.");
    Ok(())
}

/// Prints a fresh subject id.
pub fn new_subject() {
    println!("{}", uuid::Uuid::new_v4());
}
