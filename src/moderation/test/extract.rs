use test_utils::serenity::{create_test_attachment, create_test_message};

use crate::moderation::extract::{extract, InputPart};

/// Tests extraction from a plain text message.
///
/// Expected: exactly one Text part equal to the message body.
#[test]
fn message_without_attachments_yields_one_text_part() {
    let message = create_test_message(1, 2, Some(3), "hello world", vec![]);

    let parts = extract(&message);

    assert_eq!(
        parts,
        vec![InputPart::Text {
            content: "hello world".to_string()
        }]
    );
}

/// Tests extraction from a message with an empty body.
///
/// Empty text is still submitted to the classifier, not filtered out.
#[test]
fn empty_body_still_yields_a_text_part() {
    let message = create_test_message(1, 2, Some(3), "", vec![]);

    let parts = extract(&message);

    assert_eq!(
        parts,
        vec![InputPart::Text {
            content: String::new()
        }]
    );
}

/// Tests that attachments without a declared content type are skipped.
#[test]
fn skips_attachments_without_a_content_type() {
    let message = create_test_message(
        1,
        2,
        Some(3),
        "body",
        vec![create_test_attachment(
            10,
            "mystery.bin",
            None,
            "https://cdn.example.com/mystery.bin",
        )],
    );

    let parts = extract(&message);

    assert_eq!(parts.len(), 1);
    assert!(matches!(parts[0], InputPart::Text { .. }));
}

/// Tests that non-image attachments are skipped.
#[test]
fn skips_attachments_outside_the_image_prefix() {
    let message = create_test_message(
        1,
        2,
        Some(3),
        "body",
        vec![
            create_test_attachment(
                10,
                "notes.txt",
                Some("text/plain"),
                "https://cdn.example.com/notes.txt",
            ),
            create_test_attachment(
                11,
                "clip.mp4",
                Some("video/mp4"),
                "https://cdn.example.com/clip.mp4",
            ),
        ],
    );

    let parts = extract(&message);

    assert_eq!(parts.len(), 1);
}

/// Tests that every image attachment is included, in upload order, after
/// the text part.
#[test]
fn keeps_image_attachments_in_order() {
    let message = create_test_message(
        1,
        2,
        Some(3),
        "body",
        vec![
            create_test_attachment(
                10,
                "first.png",
                Some("image/png"),
                "https://cdn.example.com/first.png",
            ),
            create_test_attachment(
                11,
                "skipped.pdf",
                Some("application/pdf"),
                "https://cdn.example.com/skipped.pdf",
            ),
            create_test_attachment(
                12,
                "second.jpg",
                Some("image/jpeg"),
                "https://cdn.example.com/second.jpg",
            ),
        ],
    );

    let parts = extract(&message);

    assert_eq!(
        parts,
        vec![
            InputPart::Text {
                content: "body".to_string()
            },
            InputPart::Image {
                url: "https://cdn.example.com/first.png".to_string()
            },
            InputPart::Image {
                url: "https://cdn.example.com/second.jpg".to_string()
            },
        ]
    );
}
