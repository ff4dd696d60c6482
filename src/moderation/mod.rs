//! Message moderation pipeline.
//!
//! Transforms one inbound Discord message into classifier verdicts and, when
//! any part of the message is flagged, a structured report:
//!
//! 1. `extract` splits the message into classification input parts (the text
//!    body plus any image attachments).
//! 2. `result::aggregate` classifies each part independently and wraps the
//!    verdicts with their originating parts, in input order.
//! 3. `report` deterministically builds the summary posted to the reports
//!    channel.
//!
//! The pipeline holds no shared state; delivery and channel resolution live
//! in the bot event handlers.

pub mod extract;
pub mod report;
pub mod result;

#[cfg(test)]
mod test;

use serenity::all::Message;

use crate::{classifier::Classifier, error::classification::ClassificationError};

use self::{
    report::Report,
    result::{aggregate, any_flagged},
};

/// Runs the full moderation pipeline for one message.
///
/// Returns the report to deliver, or `None` when no part was flagged. A
/// failed classifier call fails the whole message; no partial report is
/// produced.
pub async fn analyze_message(
    classifier: &dyn Classifier,
    message: &Message,
) -> Result<Option<Report>, ClassificationError> {
    let parts = extract::extract(message);
    let results = aggregate(classifier, parts).await?;

    if !any_flagged(&results) {
        return Ok(None);
    }

    Ok(Some(Report::build(message, &results)))
}
