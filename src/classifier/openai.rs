//! OpenAI moderation endpoint client.
//!
//! Submits one input part per request to `/v1/moderations` using the
//! `omni-moderation-latest` model and maps the first result into a `Verdict`.

use serde::{Deserialize, Serialize};
use serenity::async_trait;

use crate::{error::classification::ClassificationError, moderation::extract::InputPart};

use super::{scores::CategoryScores, Classifier, Verdict};

const MODERATIONS_URL: &str = "https://api.openai.com/v1/moderations";
const MODERATION_MODEL: &str = "omni-moderation-latest";

/// Client for the OpenAI moderation endpoint.
pub struct OpenAiClassifier {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClassifier {
    pub fn new(api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            endpoint: MODERATIONS_URL.to_string(),
        }
    }
}

#[async_trait]
impl Classifier for OpenAiClassifier {
    async fn classify(&self, part: &InputPart) -> Result<Verdict, ClassificationError> {
        let request = ModerationRequest {
            model: MODERATION_MODEL,
            input: vec![ModerationInput::from(part)],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassificationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ModerationResponse = response.json().await?;
        let outcome = parsed
            .results
            .into_iter()
            .next()
            .ok_or(ClassificationError::EmptyResponse)?;

        Ok(Verdict {
            flagged: outcome.flagged,
            category_scores: outcome.category_scores,
        })
    }
}

/// Request body for the moderation endpoint.
#[derive(Serialize)]
struct ModerationRequest<'a> {
    model: &'a str,
    input: Vec<ModerationInput<'a>>,
}

/// One multimodal input item in the request.
#[derive(Serialize)]
#[serde(tag = "type")]
enum ModerationInput<'a> {
    #[serde(rename = "text")]
    Text { text: &'a str },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl<'a> },
}

#[derive(Serialize)]
struct ImageUrl<'a> {
    url: &'a str,
}

impl<'a> From<&'a InputPart> for ModerationInput<'a> {
    fn from(part: &'a InputPart) -> Self {
        match part {
            InputPart::Text { content } => ModerationInput::Text { text: content },
            InputPart::Image { url } => ModerationInput::ImageUrl {
                image_url: ImageUrl { url },
            },
        }
    }
}

#[derive(Deserialize)]
struct ModerationResponse {
    results: Vec<ModerationOutcome>,
}

#[derive(Deserialize)]
struct ModerationOutcome {
    flagged: bool,
    category_scores: CategoryScores,
}
