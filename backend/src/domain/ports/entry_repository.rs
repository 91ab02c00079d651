//! Port for diary entry persistence.
//!
//! The store is append-only: there is no update or delete. A create
//! failure is recoverable; the analyze flow reports the analysis anyway
//! and flags the entry as not saved.

use async_trait::async_trait;

use crate::domain::entry::{DiaryEntry, NewEntry};

/// Errors raised by entry repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryRepositoryError {
    /// A storage connection could not be established or checked out.
    #[error("entry store connection failed: {message}")]
    Connection {
        /// Underlying connection failure description.
        message: String,
    },
    /// A query or insert failed during execution.
    #[error("entry store query failed: {message}")]
    Query {
        /// Underlying query failure description.
        message: String,
    },
}

impl EntryRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for storing and reading diary entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Insert a new entry and return its store-assigned id.
    async fn create(&self, entry: NewEntry) -> Result<i32, EntryRepositoryError>;

    /// Return every stored entry, ordered by date descending with ties
    /// broken by insertion order descending. An empty store yields an empty
    /// vector, not an error.
    async fn list_all(&self) -> Result<Vec<DiaryEntry>, EntryRepositoryError>;

    /// Fetch one entry by id. `Ok(None)` is the normal outcome for an
    /// unknown id.
    async fn find_by_id(&self, id: i32) -> Result<Option<DiaryEntry>, EntryRepositoryError>;
}

/// Fixture implementation behaving like an empty store.
///
/// `create` acknowledges writes without keeping them. Use it where entry
/// persistence is not under test.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEntryRepository;

#[async_trait]
impl EntryRepository for FixtureEntryRepository {
    async fn create(&self, _entry: NewEntry) -> Result<i32, EntryRepositoryError> {
        Ok(1)
    }

    async fn list_all(&self) -> Result<Vec<DiaryEntry>, EntryRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<DiaryEntry>, EntryRepositoryError> {
        Ok(None)
    }
}
