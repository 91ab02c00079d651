//! Domain ports for the hexagonal boundary.
//!
//! Handlers and the batch entry point depend only on these traits; concrete
//! adapters live under `outbound`. Each port ships a `Fixture*`
//! implementation for wiring tests without real I/O, and a mockall mock
//! under `cfg(test)`.

mod analysis_source;
mod entry_repository;

#[cfg(test)]
pub use analysis_source::MockAnalysisSource;
pub use analysis_source::{AnalysisSource, AnalysisSourceError, FixtureAnalysisSource};
#[cfg(test)]
pub use entry_repository::MockEntryRepository;
pub use entry_repository::{EntryRepository, EntryRepositoryError, FixtureEntryRepository};
