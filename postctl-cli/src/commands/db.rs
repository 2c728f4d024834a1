//! Schema maintenance without starting the server

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use postctl_server::{SchemaMode, SessionFactory};

use super::DatabaseArgs;

/// Arguments for the db command
#[derive(Args, Debug)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Create missing tables, keeping existing rows
    Ensure(DatabaseArgs),
    /// Drop and recreate all tables (destroys every row)
    Reset(DatabaseArgs),
}

/// Run a db subcommand
pub async fn run_db(args: DbArgs) -> Result<()> {
    let (database, mode) = match args.command {
        DbCommand::Ensure(database) => (database, SchemaMode::Ensure),
        DbCommand::Reset(database) => (database, SchemaMode::Reset),
    };

    let sessions = SessionFactory::connect(&database.database_url, database.max_connections)
        .await
        .with_context(|| format!("Failed to open {}", database.database_url))?;

    sessions
        .bootstrap(mode)
        .await
        .context("Failed to prepare schema")?;
    sessions.close().await;

    let verb = match mode {
        SchemaMode::Ensure => "ensured",
        SchemaMode::Reset => "reset",
    };
    println!("Schema {} for {}", verb, database.database_url);
    Ok(())
}
