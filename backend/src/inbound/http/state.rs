//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on domain ports and remain testable without I/O. The bundle is
//! constructed once at startup and injected explicitly; there are no
//! process-wide singletons.

use std::sync::Arc;

use crate::domain::ports::{AnalysisSource, EntryRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Diary entry persistence port.
    pub entries: Arc<dyn EntryRepository>,
    /// Outbound analysis port.
    pub analysis: Arc<dyn AnalysisSource>,
}

impl HttpState {
    /// Construct state from port implementations.
    #[must_use]
    pub fn new(entries: Arc<dyn EntryRepository>, analysis: Arc<dyn AnalysisSource>) -> Self {
        Self { entries, analysis }
    }
}
