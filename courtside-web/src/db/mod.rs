//! Database access layer for courtside-web
//!
//! All connections are read-only; the statistics database is a static
//! artifact the service must never modify. Entity queries live in the
//! submodules and map rows into the typed records from courtside-common.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;

pub mod games;
pub mod players;
pub mod plays;
pub mod teams;

/// Connect to the statistics database in read-only mode
///
/// Safety: Uses SQLite mode=ro to prevent any write operations
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        anyhow::bail!(
            "Database not found: {}\nPlace the statistics database there or pass --database.",
            db_path.display()
        );
    }

    // mode=ro: Read-only mode
    // immutable=1: Additional safety (SQLite won't write even for internal operations)
    let db_url = format!("sqlite://{}?mode=ro&immutable=1", db_path.display());

    let pool = SqlitePool::connect(&db_url)
        .await
        .context("Failed to connect to database in read-only mode")?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            panic!("SAFETY VIOLATION: Database connection is not read-only!");
        }
    }

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_connect_fails_for_missing_database() {
        let path = PathBuf::from("/nonexistent/stats.sqlite");
        let result = connect_readonly(&path).await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Database not found"));
    }
}
