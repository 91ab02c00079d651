//! SQLite-backed `EntryRepository` implementation using Diesel ORM.
//!
//! A thin adapter: each operation checks a connection out of the pool, runs
//! one Diesel query on the blocking pool, and maps rows and errors into
//! domain types. No business logic lives here.

use async_trait::async_trait;
use diesel::prelude::*;
use tracing::debug;

use crate::domain::ports::{EntryRepository, EntryRepositoryError};
use crate::domain::{DiaryEntry, NewEntry};

use super::models::{DiaryRow, NewDiaryRow};
use super::pool::{DbPool, PoolError};
use super::schema::diaries;

/// Diesel-backed implementation of the `EntryRepository` port.
#[derive(Clone)]
pub struct DieselEntryRepository {
    pool: DbPool,
}

impl DieselEntryRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EntryRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EntryRepositoryError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> EntryRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EntryRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => {
            EntryRepositoryError::query(format!("database error: {}", info.message()))
        }
        other => EntryRepositoryError::query(other.to_string()),
    }
}

fn map_join_error(error: tokio::task::JoinError) -> EntryRepositoryError {
    EntryRepositoryError::query(format!("blocking database task failed: {error}"))
}

#[async_trait]
impl EntryRepository for DieselEntryRepository {
    async fn create(&self, entry: NewEntry) -> Result<i32, EntryRepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            let row = NewDiaryRow::from(entry);
            diesel::insert_into(diaries::table)
                .values(&row)
                .returning(diaries::id)
                .get_result::<i32>(&mut conn)
                .map_err(map_diesel_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_all(&self) -> Result<Vec<DiaryEntry>, EntryRepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            let rows: Vec<DiaryRow> = diaries::table
                .select(DiaryRow::as_select())
                .order((diaries::date.desc(), diaries::id.desc()))
                .load(&mut conn)
                .map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(DiaryEntry::from).collect())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<DiaryEntry>, EntryRepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            diaries::table
                .find(id)
                .select(DiaryRow::as_select())
                .first(&mut conn)
                .optional()
                .map_err(map_diesel_error)
                .map(|row| row.map(DiaryEntry::from))
        })
        .await
        .map_err(map_join_error)?
    }
}
