//! Anthropic outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `AnalysisSource`
//! port against the Anthropic Messages API.

mod dto;
mod http_source;

pub use http_source::{AnthropicHttpSource, DEFAULT_MODEL};
