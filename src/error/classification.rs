use thiserror::Error;

/// Failures calling the content moderation classifier.
///
/// Any of these fails the whole per-message analysis; no report is sent for
/// that message and other in-flight messages are unaffected.
#[derive(Error, Debug)]
pub enum ClassificationError {
    /// The HTTP request to the classifier could not be completed.
    #[error("Moderation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The classifier answered with a non-success status code.
    #[error("Moderation endpoint returned status {status}: {body}")]
    Api {
        /// The HTTP status code returned
        status: u16,
        /// The response body, for operator diagnostics
        body: String,
    },

    /// The classifier response carried no results for the submitted input.
    #[error("Moderation response contained no results")]
    EmptyResponse,
}
