//! Seam to the external text-scoring service.
//!
//! The pipeline never talks to the network itself; whoever hosts it
//! implements [`ScoreService`] over their client of choice and hands it
//! in. Failure modes stay visible to the pipeline — a timeout or garbage
//! reply surfaces as a [`ScoreError`], which the multi-fragment path
//! treats as "skip this fragment" rather than "abort the document".

use std::future::Future;

use thiserror::Error;

/// Failure of one scoring round trip.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Transport-level failure (timeout, connection, HTTP status).
    #[error("scoring transport error: {0}")]
    Transport(String),

    /// The service answered, but with nothing usable.
    #[error("scoring service returned an empty reply")]
    EmptyReply,
}

/// One scoring call: a system instruction plus one fragment's text in,
/// one free-form reply out.
pub trait ScoreService {
    fn score(
        &self,
        system_prompt: &str,
        user_text: &str,
    ) -> impl Future<Output = Result<String, ScoreError>> + Send;
}
