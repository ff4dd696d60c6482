use std::collections::HashMap;

use serenity::async_trait;

use crate::{
    classifier::{scores::CategoryScores, Classifier, Verdict},
    error::classification::ClassificationError,
};

use super::extract::InputPart;

mod extract;
mod report;

/// Classifier fake returning canned verdicts keyed by part content.
///
/// Parts without a canned verdict come back unflagged with no scores. A
/// part whose content matches `fail_on` errors instead, to exercise the
/// whole-message failure path.
struct FakeClassifier {
    verdicts: HashMap<String, Verdict>,
    fail_on: Option<String>,
}

impl FakeClassifier {
    fn new() -> Self {
        Self {
            verdicts: HashMap::new(),
            fail_on: None,
        }
    }

    fn with_verdict(mut self, content: &str, verdict: Verdict) -> Self {
        self.verdicts.insert(content.to_string(), verdict);
        self
    }

    fn failing_on(mut self, content: &str) -> Self {
        self.fail_on = Some(content.to_string());
        self
    }
}

#[async_trait]
impl Classifier for FakeClassifier {
    async fn classify(&self, part: &InputPart) -> Result<Verdict, ClassificationError> {
        let key = match part {
            InputPart::Text { content } => content,
            InputPart::Image { url } => url,
        };

        if self.fail_on.as_deref() == Some(key.as_str()) {
            return Err(ClassificationError::EmptyResponse);
        }

        Ok(self.verdicts.get(key).cloned().unwrap_or_default())
    }
}

/// Builds a verdict with the given flag and scores.
fn verdict(flagged: bool, scores: &[(&str, f64)]) -> Verdict {
    Verdict {
        flagged,
        category_scores: category_scores(scores),
    }
}

fn category_scores(scores: &[(&str, f64)]) -> CategoryScores {
    scores
        .iter()
        .map(|(name, score)| (name.to_string(), *score))
        .collect()
}
