//! Outbound adapters: the Anthropic analysis client and SQLite persistence.

pub mod anthropic;
pub mod persistence;
