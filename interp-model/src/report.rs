//! Labeled-section parser for press-article sentiment replies.
//!
//! The scoring service answers with sections introduced by labels such as
//! `Sentiment:` or `Short Report:`. Dispatch is a priority-ordered table
//! of (label prefix, field) pairs — adding a section is one table line.
//! Parsing is a pure function over the whole reply: a fresh record per
//! call, no instance state to reset.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Typed result of one press-reply parse.
///
/// `None` sentiment/confidence means the reply never produced a usable
/// integer for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressReport {
    pub sentiment: Option<i32>,
    /// 0..100 self-assessed confidence.
    pub confidence: Option<i32>,
    pub author: String,
    pub title: String,
    pub short_report: String,
    pub long_report: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Sentiment,
    Author,
    Title,
    Short,
    Long,
    Confidence,
}

const LABELS: &[(&str, Field)] = &[
    ("Sentiment:", Field::Sentiment),
    ("Author:", Field::Author),
    ("Title:", Field::Title),
    ("Article Title:", Field::Title),
    ("Short Report:", Field::Short),
    ("Long Report:", Field::Long),
    ("Confidence:", Field::Confidence),
];

/// Case-insensitive prefix match of `line` against a label table.
///
/// Returns the matched field and the inline remainder after the label
/// (trimmed), which counts as the first content line of the new section.
pub(crate) fn match_label<'a, F: Copy>(line: &'a str, labels: &[(&str, F)]) -> Option<(F, &'a str)> {
    for (pattern, field) in labels {
        if let Some(prefix) = line.get(..pattern.len()) {
            if prefix.eq_ignore_ascii_case(pattern) {
                return Some((*field, line[pattern.len()..].trim()));
            }
        }
    }
    None
}

/// Append `line` to a multi-line section with a `"\n"` separator.
pub(crate) fn append_line(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push('\n');
    }
    target.push_str(line);
}

/// Parse a press-reply into a fresh [`PressReport`].
///
/// Blank lines are skipped; a line starting with a known label switches
/// sections (inline content included); unlabeled lines before the first
/// label are ignored. A non-integer sentiment or confidence line is logged
/// and leaves the field unset — content errors never abort the parse.
pub fn parse_press_reply(reply: &str) -> PressReport {
    let mut report = PressReport::default();
    let mut state: Option<Field> = None;

    for raw in reply.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((field, inline)) = match_label(line, LABELS) {
            state = Some(field);
            if !inline.is_empty() {
                apply(&mut report, field, inline);
            }
            continue;
        }
        if let Some(field) = state {
            apply(&mut report, field, line);
        }
        // No active section and no label: noise, ignore.
    }

    report
}

fn apply(report: &mut PressReport, field: Field, line: &str) {
    match field {
        Field::Sentiment => match line.parse::<i32>() {
            Ok(v) => report.sentiment = Some(v),
            Err(_) => warn!("unparseable sentiment line: {line:?}"),
        },
        Field::Confidence => match line.parse::<i32>() {
            Ok(v) => report.confidence = Some(v),
            Err(_) => warn!("unparseable confidence line: {line:?}"),
        },
        Field::Author => {
            if !line.eq_ignore_ascii_case("n/a") {
                report.author = line.to_string();
            }
        }
        Field::Title => report.title = line.to_string(),
        Field::Short => append_line(&mut report.short_report, line),
        Field::Long => append_line(&mut report.long_report, line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_reply() {
        let reply = "Sentiment: 42\n\
                     Author:\n\
                     Jane Doe\n\
                     Article Title: Budget Deal Reached\n\
                     Short Report: One line.\n\
                     And another.\n\
                     \n\
                     Long Report:\n\
                     First paragraph line.\n\
                     Second paragraph line.\n\
                     Confidence: 87";
        let report = parse_press_reply(reply);

        assert_eq!(report.sentiment, Some(42));
        assert_eq!(report.confidence, Some(87));
        assert_eq!(report.author, "Jane Doe");
        assert_eq!(report.title, "Budget Deal Reached");
        assert_eq!(report.short_report, "One line.\nAnd another.");
        assert_eq!(
            report.long_report,
            "First paragraph line.\nSecond paragraph line."
        );
    }

    #[test]
    fn labels_match_case_insensitively() {
        let report = parse_press_reply("SENTIMENT: -3\ntitle: lower");
        assert_eq!(report.sentiment, Some(-3));
        assert_eq!(report.title, "lower");
    }

    #[test]
    fn author_na_is_discarded() {
        let report = parse_press_reply("Author: N/A");
        assert_eq!(report.author, "");
    }

    #[test]
    fn later_title_replaces_earlier() {
        let report = parse_press_reply("Title: first\nsecond");
        assert_eq!(report.title, "second");
    }

    #[test]
    fn bad_integers_leave_fields_unset_and_parsing_continues() {
        let reply = "Sentiment: quite positive\nConfidence: high\nTitle: Still Parsed";
        let report = parse_press_reply(reply);

        assert_eq!(report.sentiment, None);
        assert_eq!(report.confidence, None);
        assert_eq!(report.title, "Still Parsed");
    }

    #[test]
    fn preamble_before_first_label_is_ignored() {
        let report = parse_press_reply("Here is my analysis.\nSentiment: 5");
        assert_eq!(report.sentiment, Some(5));
        assert_eq!(report.short_report, "");
    }

    #[test]
    fn consecutive_parses_share_no_state() {
        let first = parse_press_reply("Sentiment: 9\nAuthor: Someone\nTitle: A");
        let second = parse_press_reply("Title: B");

        assert_eq!(first.sentiment, Some(9));
        assert_eq!(second.sentiment, None);
        assert_eq!(second.author, "");
        assert_eq!(second.title, "B");
    }
}
