//! Command implementations for postctl CLI

pub mod db;
pub mod serve;

use clap::Args;

use crate::config::DEFAULT_DATABASE_URL;

pub use db::run_db;
pub use serve::run_serve;

/// Database selection shared by every command that touches the store
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (e.g. sqlite://database.db or sqlite::memory:)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum pooled connections
    #[arg(long, default_value_t = postctl_server::db::pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}
