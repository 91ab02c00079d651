//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the embedded migrations exactly; Diesel
//! uses them for compile-time query validation and type-safe SQL
//! generation.

diesel::table! {
    /// Diary entries table.
    ///
    /// Append-only: rows are inserted once and never updated or deleted.
    diaries (id) {
        /// Primary key, assigned by SQLite in insertion order.
        id -> Integer,
        /// Calendar date of the submission.
        date -> Date,
        /// Full original diary text.
        text -> Text,
        /// Mood label from analysis (max 32 characters), nullable.
        mood -> Nullable<Text>,
        /// Keyword list from analysis (max 256 characters), nullable.
        keywords -> Nullable<Text>,
    }
}
