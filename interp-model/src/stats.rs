//! Issue-score tables and the score-block reply parser.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::issues::TrackedIssue;

/// Per-category integer scores plus a free-text explanation.
///
/// A category absent from the table is *unset*, which is distinct from a
/// score of zero: unset categories contribute nothing when tables are
/// combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueStats {
    scores: BTreeMap<TrackedIssue, i32>,
    pub explanation: String,
}

impl IssueStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stat(&self, issue: TrackedIssue) -> Option<i32> {
        self.scores.get(&issue).copied()
    }

    pub fn has_stat(&self, issue: TrackedIssue) -> bool {
        self.scores.contains_key(&issue)
    }

    pub fn set_stat(&mut self, issue: TrackedIssue, value: i32) {
        self.scores.insert(issue, value);
    }

    pub fn remove_stat(&mut self, issue: TrackedIssue) -> Option<i32> {
        self.scores.remove(&issue)
    }

    /// Set categories in iteration order (the map is ordered, so stable).
    pub fn set_issues(&self) -> impl Iterator<Item = (TrackedIssue, i32)> + '_ {
        self.scores.iter().map(|(i, v)| (*i, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Parse a score-block reply: leading `"<category>: <integer>"` lines,
    /// then everything from the first non-score line onward is the
    /// explanation.
    ///
    /// Score lines tolerate bullet/emphasis decoration and an `N/A` value
    /// (which leaves the category unset). Unknown category names are
    /// ignored without ending the block; duplicates overwrite.
    pub fn parse(reply: &str) -> IssueStats {
        let mut stats = IssueStats::new();
        let mut explanation: Vec<&str> = Vec::new();
        let mut in_scores = true;

        for line in reply.trim_start().lines() {
            if in_scores {
                match parse_stat_line(line) {
                    Some((Some(issue), Some(value))) => stats.set_stat(issue, value),
                    Some((Some(_), None)) => {} // explicit N/A: stays unset
                    Some((None, _)) => {
                        debug!("ignoring score line with unknown category: {line:?}");
                    }
                    None => {
                        in_scores = false;
                        explanation.push(line);
                    }
                }
            } else {
                explanation.push(line);
            }
        }

        stats.explanation = explanation.join("\n").trim().to_string();
        stats
    }
}

/// Match one `"<name>: <integer|N/A>"` score line.
///
/// Returns `None` when the line is not score-shaped at all (the block
/// boundary), otherwise the resolved category (or `None` if unknown) and
/// the value (or `None` for `N/A`).
pub(crate) fn parse_stat_line(line: &str) -> Option<(Option<TrackedIssue>, Option<i32>)> {
    // Compiled per call like the other literal patterns in this workspace;
    // reply parsing is nowhere near hot.
    let re = Regex::new(
        r"(?i)^\s*(?:[-•]\s*)?\**\s*(?P<name>[a-z][a-z ,&']*?)\s*\**\s*:\s*(?P<value>[+-]?\d+|n/a)\s*$",
    )
    .unwrap();

    let caps = re.captures(line)?;
    let issue = TrackedIssue::from_name(&caps["name"]);
    let value = match &caps["value"] {
        v if v.eq_ignore_ascii_case("n/a") => None,
        v => v.parse::<i32>().ok(),
    };
    Some((issue, value))
}

/// Fold per-fragment score tables into one document-level table.
///
/// Category sums only include the tables where the category is set; a
/// category unset everywhere stays unset. Explanations are concatenated in
/// input order with `"\n"`, never reordered or deduplicated.
pub fn combine<'a, I>(tables: I) -> IssueStats
where
    I: IntoIterator<Item = &'a IssueStats>,
{
    let mut out = IssueStats::new();
    let mut explanations: Vec<&str> = Vec::new();

    for table in tables {
        for (issue, value) in table.set_issues() {
            let sum = out.stat(issue).unwrap_or(0) + value;
            out.set_stat(issue, sum);
        }
        if !table.explanation.is_empty() {
            explanations.push(&table.explanation);
        }
    }

    out.explanation = explanations.join("\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scores_then_explanation() {
        let reply = "Energy: +4\n\
                     Healthcare: -2\n\
                     Overall Benefit to Society: 3\n\
                     This bill mostly funds grid modernization.\n\
                     It trims a hospital subsidy to pay for it.";
        let stats = IssueStats::parse(reply);

        assert_eq!(stats.stat(TrackedIssue::Energy), Some(4));
        assert_eq!(stats.stat(TrackedIssue::Healthcare), Some(-2));
        assert_eq!(stats.stat(TrackedIssue::OverallBenefitToSociety), Some(3));
        assert!(!stats.has_stat(TrackedIssue::Housing));
        assert!(stats.explanation.starts_with("This bill mostly funds"));
        assert!(stats.explanation.contains("hospital subsidy"));
    }

    #[test]
    fn tolerates_bullets_emphasis_and_na() {
        let reply = "- Energy: +4\n\
                     **Healthcare**: N/A\n\
                     Done.";
        let stats = IssueStats::parse(reply);

        assert_eq!(stats.stat(TrackedIssue::Energy), Some(4));
        assert!(!stats.has_stat(TrackedIssue::Healthcare)); // N/A stays unset
        assert_eq!(stats.explanation, "Done.");
    }

    #[test]
    fn unknown_category_does_not_end_the_block() {
        let reply = "Quantum Affairs: 9\nEnergy: 1\nExplanation here.";
        let stats = IssueStats::parse(reply);

        assert_eq!(stats.stat(TrackedIssue::Energy), Some(1));
        assert_eq!(stats.explanation, "Explanation here.");
    }

    #[test]
    fn duplicate_category_overwrites() {
        let stats = IssueStats::parse("Energy: 1\nEnergy: 5\ntext");
        assert_eq!(stats.stat(TrackedIssue::Energy), Some(5));
    }

    #[test]
    fn unset_is_not_zero() {
        let zero = IssueStats::parse("Energy: 0\nx");
        let unset = IssueStats::parse("x");
        assert_eq!(zero.stat(TrackedIssue::Energy), Some(0));
        assert_eq!(unset.stat(TrackedIssue::Energy), None);
        assert_ne!(zero, unset);
    }

    #[test]
    fn combine_sums_only_set_occurrences() {
        let mut a = IssueStats::new();
        a.set_stat(TrackedIssue::Energy, 3);
        a.set_stat(TrackedIssue::Housing, -1);
        a.explanation = "first".into();

        let mut b = IssueStats::new();
        b.set_stat(TrackedIssue::Energy, 2);
        b.explanation = "second".into();

        let total = combine([&a, &b]);
        assert_eq!(total.stat(TrackedIssue::Energy), Some(5));
        assert_eq!(total.stat(TrackedIssue::Housing), Some(-1));
        assert_eq!(total.stat(TrackedIssue::Education), None);
        assert_eq!(total.explanation, "first\nsecond");
    }

    #[test]
    fn combine_is_commutative_for_sums_but_not_explanations() {
        let mut a = IssueStats::new();
        a.set_stat(TrackedIssue::Energy, 3);
        a.explanation = "A".into();
        let mut b = IssueStats::new();
        b.set_stat(TrackedIssue::Energy, -7);
        b.set_stat(TrackedIssue::Transportation, 2);
        b.explanation = "B".into();

        let ab = combine([&a, &b]);
        let ba = combine([&b, &a]);

        for issue in TrackedIssue::ALL {
            assert_eq!(ab.stat(issue), ba.stat(issue));
        }
        assert_eq!(ab.explanation, "A\nB");
        assert_eq!(ba.explanation, "B\nA");
    }

    #[test]
    fn combine_tolerates_missing_fragments() {
        // A shorter-than-expected sequence is fine: missing fragments
        // simply do not contribute.
        let mut a = IssueStats::new();
        a.set_stat(TrackedIssue::Energy, 3);

        let only_a = combine([&a]);
        assert_eq!(only_a.stat(TrackedIssue::Energy), Some(3));

        let none = combine(std::iter::empty::<&IssueStats>());
        assert!(none.is_empty());
        assert_eq!(none.explanation, "");
    }
}
