//! Labeled-section parser for whole-bill interpretation replies.
//!
//! Same line-by-line engine as the press parser, different vocabulary:
//! `Stats:` carries a score block, `Riders:` a bullet list, plus title and
//! short/long report sections.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::issues::TrackedIssue;
use crate::report::{append_line, match_label};
use crate::stats::{IssueStats, parse_stat_line};

/// Typed result of one bill-reply parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillReport {
    pub title: String,
    /// Unrelated provisions the reply flagged, one entry per rider.
    pub riders: Vec<String>,
    pub short_report: String,
    pub long_report: String,
    pub stats: IssueStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Stats,
    Title,
    Riders,
    Short,
    Long,
}

const LABELS: &[(&str, Field)] = &[
    ("Stats:", Field::Stats),
    ("Title:", Field::Title),
    ("Bill Title:", Field::Title),
    ("Riders:", Field::Riders),
    ("Short Report:", Field::Short),
    ("Long Report:", Field::Long),
];

/// Parse a bill-interpretation reply into a fresh [`BillReport`].
///
/// Score lines inside `Stats:` use the same line grammar as
/// [`IssueStats::parse`]; anything unrecognized there is skipped. After
/// parsing, a malformed-reply heuristic drops spurious zero scores (see
/// [`validate_stats`]).
pub fn parse_bill_reply(reply: &str) -> BillReport {
    let mut report = BillReport::default();
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
    }

    validate_stats(&mut report.stats);
    report
}

fn apply(report: &mut BillReport, field: Field, line: &str) {
    match field {
        Field::Stats => match parse_stat_line(line) {
            Some((Some(issue), Some(value))) => report.stats.set_stat(issue, value),
            Some((Some(_), None)) => {} // N/A: stays unset
            _ => debug!("skipping unrecognized stats line: {line:?}"),
        },
        Field::Title => report.title = line.to_string(),
        Field::Riders => {
            if let Some(rider) = parse_rider_line(line) {
                report.riders.push(rider);
            }
        }
        Field::Short => append_line(&mut report.short_report, line),
        Field::Long => append_line(&mut report.long_report, line),
    }
}

/// Strip `- ` / `1. ` bullets; `none` means no riders at all.
fn parse_rider_line(line: &str) -> Option<String> {
    let bullet = Regex::new(r"^\s*(?:-|\d\.?)\s*").unwrap();
    let stripped = bullet.replace(line, "").trim().to_string();
    if stripped.is_empty() || stripped.eq_ignore_ascii_case("none") {
        return None;
    }
    Some(stripped)
}

/// Malformed-reply heuristic: when nearly every category was scored and
/// more than one non-overall category is exactly zero, the zeros are
/// padding rather than signal — drop them so they do not read as
/// deliberate "set to zero" entries downstream.
fn validate_stats(stats: &mut IssueStats) {
    let mut total_set = 0usize;
    let mut zero_count = 0usize;
    for issue in TrackedIssue::ALL {
        if !issue.is_overall() && stats.has_stat(issue) {
            total_set += 1;
            if stats.stat(issue) == Some(0) {
                zero_count += 1;
            }
        }
    }

    if TrackedIssue::ALL.len() - total_set <= 2 && zero_count > 1 {
        error!(
            "malformed reply: {zero_count} tracked issues scored 0; removing zeros from stats"
        );
        for issue in TrackedIssue::ALL {
            if !issue.is_overall() && stats.stat(issue) == Some(0) {
                stats.remove_stat(issue);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_reply() {
        let reply = "Stats:\n\
                     Energy: +12\n\
                     Healthcare: N/A\n\
                     Overall Benefit to Society: 8\n\
                     \n\
                     Bill Title: Grid Modernization Act\n\
                     Riders:\n\
                     - Unrelated land transfer in Sec. 404\n\
                     2. Museum funding earmark\n\
                     Short Report: Funds grid upgrades.\n\
                     Long Report:\n\
                     Detailed discussion.\n\
                     More discussion.";
        let report = parse_bill_reply(reply);

        assert_eq!(report.title, "Grid Modernization Act");
        assert_eq!(report.stats.stat(TrackedIssue::Energy), Some(12));
        assert!(!report.stats.has_stat(TrackedIssue::Healthcare));
        assert_eq!(
            report.riders,
            vec![
                "Unrelated land transfer in Sec. 404".to_string(),
                "Museum funding earmark".to_string()
            ]
        );
        assert_eq!(report.short_report, "Funds grid upgrades.");
        assert_eq!(report.long_report, "Detailed discussion.\nMore discussion.");
    }

    #[test]
    fn rider_none_is_skipped() {
        let report = parse_bill_reply("Riders:\nNone");
        assert!(report.riders.is_empty());
    }

    #[test]
    fn spurious_zeros_are_dropped_when_nearly_all_issues_scored() {
        let mut lines = vec!["Stats:".to_string()];
        for (i, issue) in TrackedIssue::ALL.iter().enumerate() {
            let value = if i < 3 { 0 } else { 1 };
            lines.push(format!("{}: {}", issue.name(), value));
        }
        let report = parse_bill_reply(&lines.join("\n"));

        // The three zeroed non-overall categories were removed.
        let set: Vec<_> = report.stats.set_issues().collect();
        assert_eq!(set.len(), TrackedIssue::ALL.len() - 3);
        assert!(set.iter().all(|(_, v)| *v != 0));
    }

    #[test]
    fn sparse_zeros_are_kept() {
        let report = parse_bill_reply("Stats:\nEnergy: 0\nHousing: 0\nTransportation: 2");
        // Only 3 of 17 categories set: the heuristic does not fire.
        assert_eq!(report.stats.stat(TrackedIssue::Energy), Some(0));
        assert_eq!(report.stats.stat(TrackedIssue::Housing), Some(0));
    }
}
