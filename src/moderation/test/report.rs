use test_utils::serenity::create_test_message;

use super::{category_scores, verdict};
use crate::moderation::{
    extract::InputPart,
    report::{violation_fields, Report, ViolationField},
    result::ModerationResult,
};

fn text_result(content: &str, flagged: bool) -> ModerationResult {
    ModerationResult::new(
        InputPart::Text {
            content: content.to_string(),
        },
        verdict(flagged, &[]),
    )
}

fn image_result(url: &str, flagged: bool) -> ModerationResult {
    ModerationResult::new(
        InputPart::Image {
            url: url.to_string(),
        },
        verdict(flagged, &[]),
    )
}

/// Tests the 10% inclusion threshold on combined scores.
///
/// 0.099 stays off the report even though it rounds to 10%; 0.10 is
/// included with percentage 10.
#[test]
fn violation_threshold_compares_the_unrounded_score() {
    let fields = violation_fields(&category_scores(&[("near", 0.099), ("boundary", 0.10)]));

    assert_eq!(
        fields,
        vec![ViolationField {
            name: "boundary".to_string(),
            percentage: 10
        }]
    );
}

/// Tests descending percentage order.
///
/// Given {a: 0.5, b: 0.8, c: 0.3}, fields render b(80), a(50), c(30).
#[test]
fn violations_sort_by_percentage_descending() {
    let fields = violation_fields(&category_scores(&[("a", 0.5), ("b", 0.8), ("c", 0.3)]));

    assert_eq!(
        fields,
        vec![
            ViolationField {
                name: "b".to_string(),
                percentage: 80
            },
            ViolationField {
                name: "a".to_string(),
                percentage: 50
            },
            ViolationField {
                name: "c".to_string(),
                percentage: 30
            },
        ]
    );
}

/// Tests that equal percentages keep their original category order.
#[test]
fn violation_ties_keep_first_seen_order() {
    let fields = violation_fields(&category_scores(&[
        ("second", 0.4),
        ("first", 0.7),
        ("third", 0.4),
    ]));

    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

/// Tests the report header block: title, jump link and author info.
#[test]
fn report_header_carries_title_link_and_author() {
    let message = create_test_message(5, 20, Some(30), "bad stuff", vec![]);
    let results = vec![text_result("bad stuff", true)];

    let report = Report::build(&message, &results);

    assert_eq!(report.title, "Message Flagged!");
    assert_eq!(report.origin_url, "https://discord.com/channels/30/20/5");
    assert_eq!(report.author_name, "tester <@100000000000000000>");
    assert!(!report.author_icon_url.is_empty());
}

/// Tests that the User field is always first and the Channel field is
/// present for guild messages.
#[test]
fn guild_message_report_has_user_then_channel_fields() {
    let message = create_test_message(5, 20, Some(30), "bad stuff", vec![]);
    let results = vec![text_result("bad stuff", true)];

    let report = Report::build(&message, &results);

    assert_eq!(report.fields[0].name, "User");
    assert_eq!(report.fields[0].value, "<@100000000000000000>");
    assert_eq!(report.fields[1].name, "Channel");
    assert_eq!(report.fields[1].value, "<#20>");
}

/// Tests that direct messages produce no Channel field.
#[test]
fn direct_message_report_omits_the_channel_field() {
    let message = create_test_message(5, 20, None, "bad stuff", vec![]);
    let results = vec![text_result("bad stuff", true)];

    let report = Report::build(&message, &results);

    assert!(report.fields.iter().all(|field| field.name != "Channel"));
}

/// Tests the Message field: flagged marker on the label and the body
/// wrapped in blank lines.
#[test]
fn message_field_marks_flagged_text_and_wraps_the_body() {
    let message = create_test_message(5, 20, Some(30), "bad stuff", vec![]);
    let results = vec![text_result("bad stuff", true)];

    let report = Report::build(&message, &results);

    let field = report
        .fields
        .iter()
        .find(|field| field.name.starts_with("Message"))
        .unwrap();
    assert_eq!(field.name, "Message (flagged)");
    assert_eq!(field.value, "\nbad stuff\n");
}

/// Tests that unflagged text keeps a plain Message label.
#[test]
fn unflagged_text_keeps_a_plain_message_label() {
    let message = create_test_message(5, 20, Some(30), "spam", vec![]);
    let results = vec![
        text_result("spam", false),
        image_result("https://cdn.example.com/a.png", true),
    ];

    let report = Report::build(&message, &results);

    assert!(report.fields.iter().any(|field| field.name == "Message"));
}

/// Tests the Images field: newline-joined URLs with per-image markers.
#[test]
fn images_field_joins_urls_and_marks_flagged_ones() {
    let message = create_test_message(5, 20, Some(30), "body", vec![]);
    let results = vec![
        text_result("body", false),
        image_result("https://cdn.example.com/a.png", true),
        image_result("https://cdn.example.com/b.png", false),
    ];

    let report = Report::build(&message, &results);

    let field = report
        .fields
        .iter()
        .find(|field| field.name == "Images")
        .unwrap();
    assert_eq!(
        field.value,
        "https://cdn.example.com/a.png (flagged)\nhttps://cdn.example.com/b.png"
    );
}

/// Tests that a report with no image results has no Images field.
#[test]
fn report_without_images_omits_the_images_field() {
    let message = create_test_message(5, 20, Some(30), "bad stuff", vec![]);
    let results = vec![text_result("bad stuff", true)];

    let report = Report::build(&message, &results);

    assert!(report.fields.iter().all(|field| field.name != "Images"));
}

/// Tests that violation fields land after the content fields, rendered as
/// percentages.
#[test]
fn violation_fields_render_last_with_percent_signs() {
    let message = create_test_message(5, 20, Some(30), "bad stuff", vec![]);
    let results = vec![ModerationResult::new(
        InputPart::Text {
            content: "bad stuff".to_string(),
        },
        verdict(true, &[("violence", 0.72), ("harassment", 0.15)]),
    )];

    let report = Report::build(&message, &results);

    let tail: Vec<(&str, &str)> = report
        .fields
        .iter()
        .rev()
        .take(2)
        .rev()
        .map(|field| (field.name.as_str(), field.value.as_str()))
        .collect();
    assert_eq!(tail, vec![("violence", "72%"), ("harassment", "15%")]);
}
