//! Shared doubles and builders for handler tests.

use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error as ActixError, test as actix_test, web};
use async_trait::async_trait;

use crate::domain::ports::{
    AnalysisSource, AnalysisSourceError, EntryRepository, EntryRepositoryError,
    FixtureAnalysisSource,
};
use crate::domain::{DiaryEntry, NewEntry};

use super::state::HttpState;

/// In-memory entry repository honouring the ordering contract of the port.
#[derive(Debug, Default)]
pub(crate) struct InMemoryEntryRepository {
    entries: Mutex<Vec<DiaryEntry>>,
}

impl InMemoryEntryRepository {
    /// Seed an entry with an explicit id.
    pub(crate) fn insert(&self, entry: DiaryEntry) {
        self.entries.lock().expect("repository lock").push(entry);
    }

    /// Copy of the stored entries in insertion order.
    pub(crate) fn snapshot(&self) -> Vec<DiaryEntry> {
        self.entries.lock().expect("repository lock").clone()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.lock().expect("repository lock").is_empty()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn create(&self, entry: NewEntry) -> Result<i32, EntryRepositoryError> {
        let mut entries = self.entries.lock().expect("repository lock");
        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        entries.push(DiaryEntry {
            id,
            date: entry.date,
            text: entry.text,
            mood: entry.mood,
            keywords: entry.keywords,
        });
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<DiaryEntry>, EntryRepositoryError> {
        let mut entries = self.entries.lock().expect("repository lock").clone();
        entries.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(entries)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<DiaryEntry>, EntryRepositoryError> {
        let entries = self.entries.lock().expect("repository lock");
        Ok(entries.iter().find(|entry| entry.id == id).cloned())
    }
}

/// Analysis source returning a fixed reply verbatim.
#[derive(Debug, Clone)]
pub(crate) struct CannedAnalysisSource {
    reply: String,
}

impl CannedAnalysisSource {
    pub(crate) fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl AnalysisSource for CannedAnalysisSource {
    async fn analyze(&self, _text: &str) -> Result<String, AnalysisSourceError> {
        Ok(self.reply.clone())
    }
}

/// Build a diary entry for seeding the in-memory repository.
pub(crate) fn seeded_entry(
    id: i32,
    date: &str,
    mood: Option<&str>,
    keywords: Option<&str>,
) -> DiaryEntry {
    DiaryEntry {
        id,
        date: date.parse().expect("valid test date"),
        text: format!("entry text for {id}"),
        mood: mood.map(str::to_owned),
        keywords: keywords.map(str::to_owned),
    }
}

/// Default handler state: in-memory entries, fixture analysis source.
pub(crate) fn test_state() -> (HttpState, Arc<InMemoryEntryRepository>) {
    let entries = Arc::new(InMemoryEntryRepository::default());
    let state = HttpState::new(entries.clone(), Arc::new(FixtureAnalysisSource));
    (state, entries)
}

/// Application with all four routes registered against the given state.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = ActixError,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(super::home::home)
        .service(super::analyze::analyze)
        .service(super::detail::detail)
        .service(super::report::report)
}

/// Collect a response body into a string.
pub(crate) async fn read_body_text(response: ServiceResponse) -> String {
    let bytes = actix_test::read_body(response).await;
    String::from_utf8_lossy(&bytes).into_owned()
}
