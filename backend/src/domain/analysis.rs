//! Parser for the analysis reply returned by the text-generation model.
//!
//! The model is asked to reply as exactly four lines with fixed literal
//! prefixes. The parser is positional and strict about those prefixes: a
//! line that is missing or does not start with its expected prefix yields
//! an absent field rather than an error, so drift in the model's output
//! degrades to sentinel values instead of failing the request. The same
//! prefix constants drive the prompt construction in the Anthropic
//! adapter, keeping the requested and parsed formats in lockstep.

/// Literal prefix expected on the first reply line.
pub const KEYWORDS_PREFIX: &str = "Keywords:";
/// Literal prefix expected on the second reply line.
pub const MOOD_PREFIX: &str = "Mood:";
/// Literal prefix expected on the third reply line.
pub const FEEDBACK_PREFIX: &str = "Feedback:";
/// Literal prefix expected on the fourth reply line.
pub const RECOMMENDED_TASK_PREFIX: &str = "Recommended task:";

/// Sentinel shown by views for a field the parser could not extract.
pub const NOT_AVAILABLE: &str = "Not available";

/// Maximum number of characters kept from the keywords line.
pub const KEYWORDS_MAX_CHARS: usize = 256;
/// Maximum number of characters kept from the mood line.
pub const MOOD_MAX_CHARS: usize = 32;

/// Structured analysis extracted from a model reply.
///
/// Each field is `None` when the corresponding line was missing or did not
/// carry its expected prefix. The stored value for an absent field is NULL;
/// [`NOT_AVAILABLE`] is substituted at presentation time only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Comma-separated keyword list, truncated to [`KEYWORDS_MAX_CHARS`].
    pub keywords: Option<String>,
    /// Overall mood label, truncated to [`MOOD_MAX_CHARS`].
    pub mood: Option<String>,
    /// Brief feedback on the entry, unmodified.
    pub feedback: Option<String>,
    /// One recommended positive task, unmodified.
    pub recommended_task: Option<String>,
}

impl Analysis {
    /// Keywords, or the sentinel when absent.
    #[must_use]
    pub fn keywords_or_default(&self) -> &str {
        self.keywords.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Mood label, or the sentinel when absent.
    #[must_use]
    pub fn mood_or_default(&self) -> &str {
        self.mood.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Feedback, or the sentinel when absent.
    #[must_use]
    pub fn feedback_or_default(&self) -> &str {
        self.feedback.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Recommended task, or the sentinel when absent.
    #[must_use]
    pub fn recommended_task_or_default(&self) -> &str {
        self.recommended_task.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Parse a raw model reply into its four named fields.
///
/// Line 0 must start with [`KEYWORDS_PREFIX`], line 1 with [`MOOD_PREFIX`],
/// line 2 with [`FEEDBACK_PREFIX`], line 3 with [`RECOMMENDED_TASK_PREFIX`].
/// Matching values are stripped of the prefix and surrounding whitespace;
/// keywords and mood are additionally truncated by character count. This
/// never fails: any malformed, empty, or short input simply produces absent
/// fields.
#[must_use]
pub fn parse_analysis(raw: &str) -> Analysis {
    let lines: Vec<&str> = raw.lines().collect();
    Analysis {
        keywords: field_at(&lines, 0, KEYWORDS_PREFIX, Some(KEYWORDS_MAX_CHARS)),
        mood: field_at(&lines, 1, MOOD_PREFIX, Some(MOOD_MAX_CHARS)),
        feedback: field_at(&lines, 2, FEEDBACK_PREFIX, None),
        recommended_task: field_at(&lines, 3, RECOMMENDED_TASK_PREFIX, None),
    }
}

fn field_at(
    lines: &[&str],
    index: usize,
    prefix: &str,
    max_chars: Option<usize>,
) -> Option<String> {
    let value = lines.get(index)?.strip_prefix(prefix)?.trim();
    if value.is_empty() {
        return None;
    }
    match max_chars {
        Some(limit) => Some(value.chars().take(limit).collect()),
        None => Some(value.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn conforming_reply() -> String {
        format!(
            "{KEYWORDS_PREFIX} work, deadline, coffee\n\
             {MOOD_PREFIX} Sad\n\
             {FEEDBACK_PREFIX} That sounds like a draining day.\n\
             {RECOMMENDED_TASK_PREFIX} Take a ten minute walk outside."
        )
    }

    #[test]
    fn parses_a_conforming_four_line_reply() {
        let analysis = parse_analysis(&conforming_reply());

        assert_eq!(analysis.keywords.as_deref(), Some("work, deadline, coffee"));
        assert_eq!(analysis.mood.as_deref(), Some("Sad"));
        assert_eq!(
            analysis.feedback.as_deref(),
            Some("That sounds like a draining day.")
        );
        assert_eq!(
            analysis.recommended_task.as_deref(),
            Some("Take a ten minute walk outside.")
        );
    }

    #[test]
    fn truncates_keywords_and_mood_by_character_count() {
        let keywords = "k".repeat(KEYWORDS_MAX_CHARS + 40);
        let mood = "m".repeat(MOOD_MAX_CHARS + 8);
        let reply = format!("{KEYWORDS_PREFIX} {keywords}\n{MOOD_PREFIX} {mood}\nx\ny");

        let analysis = parse_analysis(&reply);
        assert_eq!(
            analysis.keywords.map(|v| v.chars().count()),
            Some(KEYWORDS_MAX_CHARS)
        );
        assert_eq!(
            analysis.mood.map(|v| v.chars().count()),
            Some(MOOD_MAX_CHARS)
        );
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mood = "é".repeat(MOOD_MAX_CHARS);
        let reply = format!("x\n{MOOD_PREFIX} {mood}");

        let analysis = parse_analysis(&reply);
        assert_eq!(analysis.mood.as_deref(), Some(mood.as_str()));
    }

    #[rstest]
    #[case::empty("")]
    #[case::one_line("Keywords: only the first line")]
    #[case::unprefixed("here are\nsome lines\nwithout any\nprefixes at all")]
    #[case::reordered("Mood: Happy\nKeywords: swapped\nRecommended task: x\nFeedback: y")]
    fn non_matching_lines_become_absent_fields(#[case] raw: &str) {
        let analysis = parse_analysis(raw);
        // Line 0 of the first case is the only prefix sitting at its expected
        // index; everything else must resolve to None.
        assert_eq!(analysis.mood, None);
        assert_eq!(analysis.feedback, None);
        assert_eq!(analysis.recommended_task, None);
    }

    #[test]
    fn short_reply_fills_remaining_fields_with_none() {
        let reply = format!("{KEYWORDS_PREFIX} home\n{MOOD_PREFIX} Happy");
        let analysis = parse_analysis(&reply);

        assert_eq!(analysis.keywords.as_deref(), Some("home"));
        assert_eq!(analysis.mood.as_deref(), Some("Happy"));
        assert_eq!(analysis.feedback, None);
        assert_eq!(analysis.recommended_task, None);
    }

    #[test]
    fn prefix_variants_are_not_tolerated() {
        let reply = "keywords: lowercase\nMood - dashed\nFeedback missing colon\nTask: renamed";
        assert_eq!(parse_analysis(reply), Analysis::default());
    }

    #[test]
    fn blank_values_are_treated_as_absent() {
        let reply = format!("{KEYWORDS_PREFIX}   \n{MOOD_PREFIX} Happy");
        let analysis = parse_analysis(&reply);

        assert_eq!(analysis.keywords, None);
        assert_eq!(analysis.mood.as_deref(), Some("Happy"));
    }

    #[test]
    fn sentinel_accessors_substitute_for_absent_fields() {
        let analysis = Analysis::default();
        assert_eq!(analysis.keywords_or_default(), NOT_AVAILABLE);
        assert_eq!(analysis.mood_or_default(), NOT_AVAILABLE);
        assert_eq!(analysis.feedback_or_default(), NOT_AVAILABLE);
        assert_eq!(analysis.recommended_task_or_default(), NOT_AVAILABLE);
    }
}
