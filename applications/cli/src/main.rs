/// TechNotes CLI - inspect notes and users views from snapshot files
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use technotes_cli::{
    commands::{self, NotesArgs, UsersArgs, ValidateNoteArgs, ValidateUserArgs},
    CliConfig,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "technotes")]
#[command(about = "TechNotes list views from entity snapshots", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./technotes.toml when present)
    #[arg(short, long, global = true, env = "TECHNOTES_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging for the projection stages
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the notes list for an acting user
    Notes(NotesArgs),
    /// Show the users list (Manager or Admin only)
    Users(UsersArgs),
    /// Check a new-user draft against the account rules
    ValidateUser(ValidateUserArgs),
    /// Check a note draft has every required field
    ValidateNote(ValidateNoteArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "technotes=debug,technotes_cli=debug,technotes_views=debug,technotes_core=debug"
    } else {
        "technotes=info,technotes_cli=info,technotes_views=warn,technotes_core=warn"
    };

    // Initialize tracing; logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config =
        CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let output = match &cli.command {
        Commands::Notes(args) => commands::run_notes(args, &config)?,
        Commands::Users(args) => commands::run_users(args, &config)?,
        Commands::ValidateUser(args) => commands::run_validate_user(args)?,
        Commands::ValidateNote(args) => commands::run_validate_note(args)?,
    };

    print!("{}", output);
    Ok(())
}
