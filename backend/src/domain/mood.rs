//! Mood aggregation over stored entries.
//!
//! Two read models feed the report view: the percentage distribution of
//! mood labels and a per-entry mood-score series ordered by date for trend
//! plotting.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::entry::DiaryEntry;

/// Labels reported with a zero share when no entry carries a mood.
///
/// Chart rendering expects these three keys to always exist, so an empty
/// store yields a fixed zero-valued mapping instead of an empty one.
pub const DEFAULT_MOOD_LABELS: [&str; 3] = ["Happy", "Sad", "Neutral"];

/// One point of the mood trend series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    /// Date of the underlying entry.
    pub date: NaiveDate,
    /// Mood score: Happy = 100, Neutral = 50, Sad = 0.
    pub score: i32,
}

/// Percentage share of each distinct mood label, rounded to two decimals.
///
/// Entries without a mood are ignored. When no entry carries a mood the
/// result is exactly `{Happy: 0, Sad: 0, Neutral: 0}` (see
/// [`DEFAULT_MOOD_LABELS`]); otherwise only labels that actually occur are
/// present. Keys iterate in lexicographic order.
#[must_use]
pub fn mood_distribution(entries: &[DiaryEntry]) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for mood in entries.iter().filter_map(|entry| entry.mood.as_deref()) {
        *counts.entry(mood).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return DEFAULT_MOOD_LABELS
            .iter()
            .map(|label| ((*label).to_owned(), 0.0))
            .collect();
    }

    counts
        .into_iter()
        .map(|(label, count)| {
            let share = count as f64 / total as f64 * 100.0;
            (label.to_owned(), round_two_decimals(share))
        })
        .collect()
}

/// Map a mood label to its trend score.
///
/// Labels are matched ASCII-case-insensitively; anything outside the three
/// known labels has no score and is skipped by the trend series.
#[must_use]
pub fn mood_score(label: &str) -> Option<i32> {
    if label.eq_ignore_ascii_case("happy") {
        Some(100)
    } else if label.eq_ignore_ascii_case("neutral") {
        Some(50)
    } else if label.eq_ignore_ascii_case("sad") {
        Some(0)
    } else {
        None
    }
}

/// Per-entry mood scores ordered by date ascending (ties by id ascending).
///
/// Entries with an absent or unrecognised mood carry no score and are left
/// out rather than plotted as fake values.
#[must_use]
pub fn mood_trend(entries: &[DiaryEntry]) -> Vec<TrendPoint> {
    let mut scored: Vec<(NaiveDate, i32, i32)> = entries
        .iter()
        .filter_map(|entry| {
            let score = entry.mood.as_deref().and_then(mood_score)?;
            Some((entry.date, entry.id, score))
        })
        .collect();
    scored.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    scored
        .into_iter()
        .map(|(date, _, score)| TrendPoint { date, score })
        .collect()
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
