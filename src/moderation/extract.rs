//! Splitting messages into classification inputs.

use serenity::all::Message;

/// One classification input derived from an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPart {
    /// The message's text body. Always submitted, even when empty.
    Text { content: String },
    /// An image attachment, referenced by its retrievable URL.
    Image { url: String },
}

/// Splits a message into an ordered sequence of classification inputs.
///
/// The text body is always the first part. Attachments follow in upload
/// order; attachments without a content type, or with a content type outside
/// `image/*`, are skipped. No deduplication and no attachment limit.
pub fn extract(message: &Message) -> Vec<InputPart> {
    let mut parts = vec![InputPart::Text {
        content: message.content.clone(),
    }];

    for attachment in &message.attachments {
        let Some(content_type) = &attachment.content_type else {
            continue;
        };
        if !content_type.starts_with("image/") {
            continue;
        }
        parts.push(InputPart::Image {
            url: attachment.url.clone(),
        });
    }

    parts
}
