//! Diary analyzer backend library.
//!
//! The crate follows a hexagonal layout: `domain` holds transport-agnostic
//! types, the reply parser, mood aggregation, and the ports the rest of the
//! system is written against; `inbound::http` adapts the four web routes onto
//! those ports; `outbound` provides the Anthropic analysis adapter and the
//! SQLite persistence adapter.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Request-logging middleware applied to every route.
pub use middleware::request_log::RequestLog;
