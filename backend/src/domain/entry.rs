//! Diary entry entity and its insert form.
//!
//! Entries are append-only: they are created once with the fields derived
//! from analysis and never updated or deleted afterwards. `mood` and
//! `keywords` are optional; an absent value is stored as NULL and only
//! replaced by a sentinel string at presentation time.

use chrono::NaiveDate;

use crate::domain::analysis::Analysis;

/// One persisted diary submission.
///
/// ## Invariants
/// - `id` is assigned by the store and unique, monotonic per insertion order.
/// - `date` and `text` are always present; `mood` and `keywords` may be
///   absent.
/// - Instances are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    /// Store-assigned identifier.
    pub id: i32,
    /// Calendar date of the submission (server-local, no time of day).
    pub date: NaiveDate,
    /// The full original diary text.
    pub text: String,
    /// Mood label derived from analysis, at most 32 characters.
    pub mood: Option<String>,
    /// Keyword list derived from analysis, at most 256 characters.
    pub keywords: Option<String>,
}

/// Insert form for a diary entry, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    /// Calendar date of the submission.
    pub date: NaiveDate,
    /// The full original diary text.
    pub text: String,
    /// Mood label derived from analysis, if any.
    pub mood: Option<String>,
    /// Keyword list derived from analysis, if any.
    pub keywords: Option<String>,
}

impl NewEntry {
    /// Build an insert form from submitted text and its parsed analysis.
    ///
    /// Only the bounded `mood` and `keywords` fields are persisted; feedback
    /// and the recommended task exist solely in the rendered response.
    #[must_use]
    pub fn from_analysis(date: NaiveDate, text: String, analysis: &Analysis) -> Self {
        Self {
            date,
            text,
            mood: analysis.mood.clone(),
            keywords: analysis.keywords.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::parse_analysis;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("valid test date")
    }

    #[test]
    fn from_analysis_copies_only_persisted_fields() {
        let analysis = parse_analysis(
            "Keywords: rain, trains\nMood: Neutral\nFeedback: Noted.\nRecommended task: Stretch.",
        );
        let entry = NewEntry::from_analysis(date("2026-07-12"), "a long day".to_owned(), &analysis);

        assert_eq!(entry.mood.as_deref(), Some("Neutral"));
        assert_eq!(entry.keywords.as_deref(), Some("rain, trains"));
        assert_eq!(entry.text, "a long day");
    }

    #[test]
    fn from_analysis_keeps_absent_fields_absent() {
        let analysis = parse_analysis("nonsense reply");
        let entry = NewEntry::from_analysis(date("2026-07-12"), "text".to_owned(), &analysis);

        assert_eq!(entry.mood, None);
        assert_eq!(entry.keywords, None);
    }
}
