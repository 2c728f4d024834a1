//! postctl CLI - users and posts over HTTP
//!
//! This is the main entry point for the postctl command-line tool, which provides:
//! - The HTTP API server (`serve` subcommand)
//! - Schema maintenance (`db ensure`, `db reset`)

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "postctl",
    author,
    version,
    about = "HTTP service for users and their posts, backed by SQLite"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Prepare or reset the database schema
    Db(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    for path in &loaded {
        info!("Loaded configuration from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Db(args) => commands::run_db(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn debug_flag_is_global() {
        let cli = Cli::parse_from(["postctl", "db", "ensure", "--debug"]);
        assert!(cli.debug);
        assert!(matches!(cli.command, Commands::Db(_)));
    }
}
