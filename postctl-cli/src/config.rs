//! Configuration loading for postctl
//!
//! Settings come from command-line flags, then environment variables,
//! then `.env` files. `.env` files never override a variable that is
//! already set.

use std::path::PathBuf;

use tracing::debug;

/// Database used when neither `--database-url` nor `DATABASE_URL` is given.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

/// Get the postctl config directory path (~/.postctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".postctl"))
}

/// Load environment variables from .env files
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.postctl/.env
///
/// Returns the files that were loaded.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(()) => loaded_from.push(env_file),
                Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
            }
        }
    }

    loaded_from
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_is_under_home() {
        if let Some(dir) = config_dir() {
            assert!(dir.ends_with(".postctl"));
        }
    }

    #[test]
    fn default_database_is_sqlite_file() {
        assert!(DEFAULT_DATABASE_URL.starts_with("sqlite://"));
    }
}
