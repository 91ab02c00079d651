//! Diesel row models for the `diaries` table.
//!
//! Internal implementation details of the persistence adapter, never exposed
//! to the domain layer.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{DiaryEntry, NewEntry};

use super::schema::diaries;

/// Read model for one diary row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = diaries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(super) struct DiaryRow {
    pub(super) id: i32,
    pub(super) date: NaiveDate,
    pub(super) text: String,
    pub(super) mood: Option<String>,
    pub(super) keywords: Option<String>,
}

/// Insert model for a new diary row; `id` is assigned by SQLite.
#[derive(Debug, Insertable)]
#[diesel(table_name = diaries)]
pub(super) struct NewDiaryRow {
    pub(super) date: NaiveDate,
    pub(super) text: String,
    pub(super) mood: Option<String>,
    pub(super) keywords: Option<String>,
}

impl From<DiaryRow> for DiaryEntry {
    fn from(row: DiaryRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            text: row.text,
            mood: row.mood,
            keywords: row.keywords,
        }
    }
}

impl From<NewEntry> for NewDiaryRow {
    fn from(entry: NewEntry) -> Self {
        Self {
            date: entry.date,
            text: entry.text,
            mood: entry.mood,
            keywords: entry.keywords,
        }
    }
}
