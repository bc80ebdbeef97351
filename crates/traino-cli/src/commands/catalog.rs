use super::CliEnv;
use anyhow::Result;

/// Prints every catalog group with its items and their indices.
pub async fn list(env: &CliEnv) -> Result<()> {
    let groups = env.catalog.list_groups().await?;

    if groups.is_empty() {
        println!("No catalog groups available.");
        return Ok(());
    }

    for group in groups {
        println!("{} ({})", group.label, group.id);
        for (index, item) in group.items.iter().enumerate() {
            println!("  [{index}] {}", item.name);
        }
    }

    Ok(())
}
