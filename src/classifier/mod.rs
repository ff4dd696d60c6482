//! Content moderation classifier boundary.
//!
//! The pipeline talks to the classifier through the `Classifier` trait so the
//! real OpenAI-backed client can be swapped for an in-memory fake in tests.
//! One input part maps to exactly one classifier call; parts are never batched
//! so a flagged image cannot be diluted by an unflagged text body scored in
//! the same request.

pub mod openai;
pub mod scores;

use serenity::async_trait;

use crate::{error::classification::ClassificationError, moderation::extract::InputPart};

use self::scores::CategoryScores;

/// Classifier output for a single input part.
#[derive(Debug, Clone, Default)]
pub struct Verdict {
    /// Whether the classifier detected a policy violation in this part
    pub flagged: bool,
    /// Per-category confidence scores, each expected in `[0, 1]`
    pub category_scores: CategoryScores,
}

/// A content moderation classifier scoring one input part per call.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classifies a single input part.
    async fn classify(&self, part: &InputPart) -> Result<Verdict, ClassificationError>;
}
