//! Actix middleware.

pub mod request_log;
