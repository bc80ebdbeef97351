use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "traino")]
#[command(about = "Traino CLI - exercise assignment and student onboarding", long_about = None)]
struct Cli {
    /// Base directory for subject documents (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog file (default: platform config dir; falls back to the
    /// built-in catalog when the file does not exist)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog groups and their items
    Catalog,
    /// Show a student's current exercise assignment
    Show {
        /// Subject id
        subject_id: String,
    },
    /// Toggle exercises for a student and save the result
    Assign {
        /// Subject id
        subject_id: String,
        /// Group id (e.g., "legs")
        group_id: String,
        /// Item indices within the group to toggle
        #[arg(required = true)]
        indices: Vec<usize>,
        /// Student display name (for output only)
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Delete a student's entire exercise assignment
    Clear {
        /// Subject id
        subject_id: String,
        /// Confirm the deletion; without this flag nothing is deleted
        #[arg(long)]
        yes: bool,
    },
    /// Edit a student's onboarding profile (birthday and goals)
    Onboard {
        /// Subject id
        subject_id: String,
        /// Birthday as YYYY-MM-DD
        #[arg(long)]
        birthday: Option<chrono::NaiveDate>,
        /// Goal indices to toggle
        #[arg(long = "goal")]
        goals: Vec<usize>,
    },
    /// Create a new subject id
    NewSubject,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let env = commands::CliEnv::new(cli.data_dir, cli.catalog)?;

    match cli.command {
        Commands::Catalog => commands::catalog::list(&env).await?,
        Commands::Show { subject_id } => commands::selection::show(&env, &subject_id).await?,
        Commands::Assign {
            subject_id,
            group_id,
            indices,
            name,
        } => commands::selection::assign(&env, &subject_id, &name, &group_id, &indices).await?,
        Commands::Clear { subject_id, yes } => {
            commands::selection::clear(&env, &subject_id, yes).await?
        }
        Commands::Onboard {
            subject_id,
            birthday,
            goals,
        } => commands::onboard::edit(&env, &subject_id, birthday, &goals).await?,
        Commands::NewSubject => commands::selection::new_subject(),
    }

    Ok(())
}
