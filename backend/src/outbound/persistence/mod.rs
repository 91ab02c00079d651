//! SQLite persistence adapters using Diesel ORM.
//!
//! Thin adapters only: repository implementations translate between Diesel
//! rows and domain types, connections are checked out per operation from an
//! r2d2 pool and returned by RAII on every exit path, and all database
//! errors are mapped to domain port error types. Blocking Diesel work runs
//! on the tokio blocking pool, never on the async executor.

mod diesel_entry_repository;
mod models;
mod pool;
mod schema;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub use diesel_entry_repository::DieselEntryRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Error raised when the embedded schema migrations cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("database migration failed: {message}")]
pub struct MigrationError {
    message: String,
}

/// Apply any pending embedded migrations.
///
/// Run once at startup, before the first repository call. Creates the
/// `diaries` table on a fresh database file.
///
/// # Errors
///
/// Returns [`MigrationError`] when a connection cannot be checked out or a
/// migration fails to apply.
pub fn run_migrations(pool: &DbPool) -> Result<(), MigrationError> {
    let mut conn = pool.get().map_err(|err| MigrationError {
        message: err.to_string(),
    })?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError {
            message: err.to_string(),
        })?;
    Ok(())
}
