//! Pipeline driver: slice, score, parse, aggregate.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use bill_slicer::{DocumentTree, Fragment, slice};
use interp_model::{BillReport, InterpretationMetadata, combine, parse_bill_reply};

use crate::cfg::InterpreterConfig;
use crate::errors::{InterpretError, InterpretResult};
use crate::prompt;
use crate::scorer::ScoreService;

/// One fragment's interpretation, kept for provenance next to the
/// document-level result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceInterpretation {
    /// Sequence index of the fragment this covers.
    pub fragment_index: usize,
    pub report: BillReport,
    pub metadata: InterpretationMetadata,
}

/// Document-level interpretation handed to the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillInterpretation {
    pub bill_id: String,
    /// Final report; for multi-fragment bills its stats are the combined
    /// per-fragment sums, not whatever the aggregate reply contained.
    pub report: BillReport,
    pub metadata: InterpretationMetadata,
    /// Per-fragment interpretations, document order (failed fragments
    /// are absent).
    pub slices: Vec<SliceInterpretation>,
    /// How many fragments the slicer produced.
    pub fragments_total: usize,
}

/// Interpret one document end to end.
///
/// Returns `Ok(None)` for a document with no extractable text — nothing
/// to score, not an error. On the multi-fragment path a fragment whose
/// scoring call fails is logged and skipped; only when *every* fragment
/// fails does the pipeline give up.
pub async fn interpret_bill<S: ScoreService>(
    tree: &DocumentTree,
    bill_id: &str,
    scorer: &S,
    cfg: &InterpreterConfig,
) -> InterpretResult<Option<BillInterpretation>> {
    let fragments = slice(tree, bill_id, cfg.max_fragment_len)?;
    if fragments.is_empty() {
        info!("bill {bill_id}: no extractable text, nothing to score");
        return Ok(None);
    }

    if fragments.len() == 1 {
        let reply = scorer
            .score(&prompt::whole_bill_prompt(), &fragments[0].text)
            .await?;
        let report = parse_bill_reply(&reply);
        info!("bill {bill_id}: interpreted in one call");
        return Ok(Some(BillInterpretation {
            bill_id: bill_id.to_string(),
            report,
            metadata: InterpretationMetadata::now(&cfg.model),
            slices: Vec::new(),
            fragments_total: 1,
        }));
    }

    let slices = score_fragments(&fragments, scorer, cfg).await;
    if slices.is_empty() {
        return Err(InterpretError::AllFragmentsFailed {
            total: fragments.len(),
        });
    }

    // Document-order fold: summation is commutative, explanation and
    // summary concatenation are not.
    let combined = combine(slices.iter().map(|s| &s.report.stats));
    let summaries: Vec<&str> = slices
        .iter()
        .map(|s| s.report.short_report.as_str())
        .collect();

    let reply = scorer
        .score(&prompt::aggregate_prompt(), &summaries.join("\n"))
        .await?;
    let mut report = parse_bill_reply(&reply);
    report.stats = combined;

    info!(
        "bill {bill_id}: interpreted {}/{} fragments",
        slices.len(),
        fragments.len()
    );

    Ok(Some(BillInterpretation {
        bill_id: bill_id.to_string(),
        report,
        metadata: InterpretationMetadata::now(&cfg.model),
        slices,
        fragments_total: fragments.len(),
    }))
}

/// Score every fragment, skipping the ones that fail. Dispatch order is
/// sequential here; results stay paired to fragment indices either way,
/// which is the contract aggregation relies on.
async fn score_fragments<S: ScoreService>(
    fragments: &[Fragment],
    scorer: &S,
    cfg: &InterpreterConfig,
) -> Vec<SliceInterpretation> {
    let system = prompt::fragment_prompt();
    let mut slices = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        match scorer.score(&system, &fragment.text).await {
            Ok(reply) => {
                debug!(
                    "fragment {} scored ({} chars in, {} chars out)",
                    fragment.index,
                    fragment.text.len(),
                    reply.len()
                );
                slices.push(SliceInterpretation {
                    fragment_index: fragment.index,
                    report: parse_bill_reply(&reply),
                    metadata: InterpretationMetadata::for_slice(
                        &cfg.model,
                        fragment.index,
                        fragment.start.to_string(),
                        fragment.end.to_string(),
                    ),
                });
            }
            Err(err) => {
                warn!("fragment {} failed to score, skipping: {err}", fragment.index);
            }
        }
    }

    slices
}
