//! Per-part classification results and their aggregation.

use crate::{
    classifier::{scores::CategoryScores, Classifier, Verdict},
    error::classification::ClassificationError,
};

use super::extract::InputPart;

/// One input part together with its classifier verdict.
///
/// Created while analyzing a single message and discarded once the report
/// (if any) is sent.
#[derive(Debug, Clone)]
pub struct ModerationResult {
    /// The part that was classified
    pub part: InputPart,
    /// Whether the classifier flagged this specific part
    pub flagged: bool,
    /// Per-category scores for this part
    pub category_scores: CategoryScores,
}

impl ModerationResult {
    pub fn new(part: InputPart, verdict: Verdict) -> Self {
        Self {
            part,
            flagged: verdict.flagged,
            category_scores: verdict.category_scores,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.part, InputPart::Text { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self.part, InputPart::Image { .. })
    }

    /// The text body or image URL this result was scored on.
    pub fn content(&self) -> &str {
        match &self.part {
            InputPart::Text { content } => content,
            InputPart::Image { url } => url,
        }
    }
}

/// Classifies every part independently, in order.
///
/// Each part is submitted in its own classifier call and results accumulate
/// in input order, so the text result stays first. A failed call fails the
/// whole message; no partial results are returned.
pub async fn aggregate(
    classifier: &dyn Classifier,
    parts: Vec<InputPart>,
) -> Result<Vec<ModerationResult>, ClassificationError> {
    let mut results = Vec::with_capacity(parts.len());

    for part in parts {
        let verdict = classifier.classify(&part).await?;
        results.push(ModerationResult::new(part, verdict));
    }

    Ok(results)
}

/// A message is flagged overall when at least one part is flagged.
pub fn any_flagged(results: &[ModerationResult]) -> bool {
    results.iter().any(|result| result.flagged)
}

/// Sums category scores across all results.
///
/// The category set is the union across parts, in first-seen order; parts
/// missing a category contribute zero to it.
pub fn combined_scores(results: &[ModerationResult]) -> CategoryScores {
    CategoryScores::sum(results.iter().map(|result| &result.category_scores))
}
