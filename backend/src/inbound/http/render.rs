//! Minimal HTML rendering for the four views.
//!
//! A shared document shell plus escaping for every piece of user- or
//! model-originated text. No templating engine, no styling.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use chrono::NaiveDate;

use crate::domain::{Analysis, DiaryEntry, TrendPoint};

use super::analyze::ENTRY_PLACEHOLDER;

/// Escape text for embedding into HTML content or attribute values.
pub(crate) fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Home view: submission form plus full entry history.
pub(crate) fn home_page(entries: &[DiaryEntry]) -> String {
    let mut body = String::new();
    body.push_str("<h1>What happened today?</h1>\n");
    body.push_str(&format!(
        "<form method=\"post\" action=\"/analyze\">\n\
         <textarea name=\"diary\" rows=\"12\" cols=\"60\" placeholder=\"{placeholder}\" required></textarea>\n\
         <p><input type=\"submit\" value=\"Save\"></p>\n\
         </form>\n",
        placeholder = escape(ENTRY_PLACEHOLDER),
    ));

    body.push_str("<h2>History</h2>\n");
    if entries.is_empty() {
        body.push_str("<p>No diary entries yet.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for entry in entries {
            body.push_str(&format!(
                "<li><a href=\"/diary/{id}\">{date}</a> &mdash; {keywords}</li>\n",
                id = entry.id,
                date = escape(&format_date(entry.date)),
                keywords = escape(entry.keywords.as_deref().unwrap_or("No keywords")),
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/analysis\">Mood report</a></p>");

    page("Diary Analyzer", &body)
}

/// Analyze view: the four parsed fields plus the persisted indicator.
pub(crate) fn analysis_page(analysis: &Analysis, saved: bool) -> String {
    let body = format!(
        "<h1>Analysis result</h1>\n\
         <p><strong>Keywords:</strong> {keywords}</p>\n\
         <p><strong>Mood:</strong> {mood}</p>\n\
         <p><strong>Feedback:</strong> {feedback}</p>\n\
         <p><strong>Recommended task:</strong> {task}</p>\n\
         <p><strong>Saved:</strong> {saved}</p>\n\
         <p><a href=\"/\">Back</a></p>",
        keywords = escape(analysis.keywords_or_default()),
        mood = escape(analysis.mood_or_default()),
        feedback = escape(analysis.feedback_or_default()),
        task = escape(analysis.recommended_task_or_default()),
        saved = if saved { "Yes" } else { "No" },
    );
    page("Analysis result", &body)
}

/// Detail view: one entry in full.
pub(crate) fn detail_page(entry: &DiaryEntry) -> String {
    let body = format!(
        "<h1>Diary entry</h1>\n\
         <p><strong>Date:</strong> {date}</p>\n\
         <p><strong>Mood:</strong> {mood}</p>\n\
         <p><strong>Keywords:</strong> {keywords}</p>\n\
         <p><strong>Full text:</strong></p>\n\
         <pre>{text}</pre>\n\
         <p><a href=\"/\">Back</a></p>",
        date = escape(&format_date(entry.date)),
        mood = escape(entry.mood.as_deref().unwrap_or("Not set")),
        keywords = escape(entry.keywords.as_deref().unwrap_or("Not set")),
        text = escape(&entry.text),
    );
    page("Diary entry", &body)
}

/// Report view: mood distribution percentages and the trend series.
pub(crate) fn report_page(distribution: &BTreeMap<String, f64>, trend: &[TrendPoint]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Mood report</h1>\n<h2>Mood distribution</h2>\n<ul>\n");
    for (label, share) in distribution {
        body.push_str(&format!(
            "<li>{label}: {share:.2}%</li>\n",
            label = escape(label),
        ));
    }
    body.push_str("</ul>\n<h2>Mood trend</h2>\n");
    if trend.is_empty() {
        body.push_str("<p>Not enough mood data to plot a trend.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for point in trend {
            body.push_str(&format!(
                "<li>{date}: {score}</li>\n",
                date = point.date,
                score = point.score,
            ));
        }
        body.push_str("</ul>\n");
    }
    body.push_str("<p><a href=\"/\">Back</a></p>");

    page("Mood report", &body)
}

/// Error view shared by all failure responses.
pub(crate) fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{status_code} {reason}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back</a></p>",
        status_code = status.as_u16(),
        reason = escape(reason),
        message = escape(message),
    );
    page(reason, &body)
}
