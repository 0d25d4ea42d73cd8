//! System prompts for the three scoring call shapes.
//!
//! Every prompt enumerates the tracked-issue vocabulary so the reply's
//! score block lines up with what the parsers expect. The wording asks
//! for exactly the labeled sections the `interp-model` parsers recognize.

use interp_model::TrackedIssue;

/// `"<name>: <score or N/A>"` line per tracked issue, prompt-ready.
pub fn issues_list() -> String {
    TrackedIssue::ALL
        .iter()
        .map(|issue| format!("{}: <score or N/A>", issue.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

const PREAMBLE: &str = "You will be given the text of a legislative bill. Act as a non-partisan \
oversight committee evaluating whether the bill produces a positive overall benefit to society. \
Fill out exactly the sections listed below, including each section title in your response.";

const STATS_SECTION: &str = "Stats:\nScore the bill's estimated impact on each of the following \
criteria from -100 (very harmful) to +100 (very helpful), or N/A if not relevant:";

const TITLE_SECTION: &str = "Bill Title:\nThe bill's title, or a very short invented title if it \
only has a number.";

const RIDERS_SECTION: &str = "Riders:\n- One line per unrelated provision identified and the \
section it occurs at, or 'None'.";

const SHORT_SECTION: &str = "Short Report:\nA single-paragraph summary of the bill, its goals, \
and its expected impact. No formatting characters, no markup identifiers.";

const LONG_SECTION: &str = "Long Report:\nA detailed report for layman voters: overall summary, \
goals and how the bill achieves them, and the impact if enacted. One to seven paragraphs. No \
formatting characters, no markup identifiers.";

/// Prompt for a bill that fits in a single scoring call.
pub fn whole_bill_prompt() -> String {
    [
        PREAMBLE,
        STATS_SECTION,
        &issues_list(),
        TITLE_SECTION,
        RIDERS_SECTION,
        SHORT_SECTION,
        LONG_SECTION,
    ]
    .join("\n\n")
}

/// Prompt for one fragment of a bill too large to score at once.
pub fn fragment_prompt() -> String {
    [PREAMBLE, STATS_SECTION, &issues_list(), SHORT_SECTION].join("\n\n")
}

/// Prompt for the aggregate pass over the per-fragment summaries.
pub fn aggregate_prompt() -> String {
    [
        "A large legislative bill has been split into sections and each section summarized. \
         Act as a non-partisan oversight committee evaluating whether the bill produces a \
         positive overall benefit to society. Fill out exactly the sections listed below, \
         including each section title in your response.",
        TITLE_SECTION,
        RIDERS_SECTION,
        SHORT_SECTION,
        LONG_SECTION,
    ]
    .join("\n\n")
}
