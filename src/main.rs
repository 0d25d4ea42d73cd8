//! Bill slicing size report.
//!
//! Reads a plain-text bill, builds a paragraph tree, runs the structural
//! slicer with the configured fragment limit, and reports how many
//! scoring calls the bill would take and how large each one is. Handy
//! for tuning `MAX_FRAGMENT_LEN` before pointing the pipeline at a real
//! scoring service.

use anyhow::{Context, bail};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bill_interpreter::InterpreterConfig;
use bill_slicer::{DocumentTree, slice};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: bill-review-backend <bill-text-file>");
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let tree = paragraph_tree(&text);
    let cfg = InterpreterConfig::from_env();
    let fragments = slice(&tree, &path, cfg.max_fragment_len)?;

    if fragments.is_empty() {
        tracing::warn!("{path}: no extractable text");
        return Ok(());
    }

    tracing::info!(
        "{path}: {} chars, {} fragments at max {} chars",
        text.len(),
        fragments.len(),
        cfg.max_fragment_len
    );
    for f in &fragments {
        tracing::info!(
            "  fragment {}: {} chars, {} .. {}",
            f.index,
            f.text.len(),
            f.start,
            f.end
        );
    }

    Ok(())
}

/// Flat tree over blank-line-separated paragraphs. The first paragraph
/// doubles as the title when the rest of the document is long enough to
/// split, matching how bill texts lead with their official title.
fn paragraph_tree(text: &str) -> DocumentTree {
    let mut b = DocumentTree::builder();
    let root = b.root();

    let mut paragraphs = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .peekable();

    if let Some(first) = paragraphs.peek() {
        if first.len() < 200 && !first.contains('\n') {
            b.title(*first);
        }
    }
    for p in paragraphs {
        b.child(root, Some(p));
    }

    b.finish()
}
