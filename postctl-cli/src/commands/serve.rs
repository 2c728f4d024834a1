//! HTTP server command
//!
//! Prepares the schema, then serves the user and post routes until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use postctl_server::{run_server, SchemaMode, ServerConfig, SessionFactory};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Drop and recreate all tables before serving (destroys every row)
    #[arg(long)]
    pub reset_schema: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    fn schema_mode(&self) -> SchemaMode {
        if self.reset_schema {
            SchemaMode::Reset
        } else {
            SchemaMode::Ensure
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting postctl server on {}", args.bind);

    let sessions = SessionFactory::connect(&args.database.database_url, args.database.max_connections)
        .await
        .context("Failed to create database pool")?;

    let mode = args.schema_mode();
    if mode == SchemaMode::Reset {
        tracing::warn!(database = %args.database.database_url, "resetting schema, all rows will be lost");
    }
    sessions
        .bootstrap(mode)
        .await
        .context("Failed to prepare schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(sessions, config).await.context("Server error")?;

    Ok(())
}
