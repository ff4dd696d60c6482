//! Report construction for flagged messages.
//!
//! A `Report` is a pure value built from the original message and its
//! moderation results. Rendering it into a serenity embed is a separate,
//! final step so the construction logic stays testable without Discord.

use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, Mentionable, Message};

use crate::classifier::scores::CategoryScores;

use super::result::{combined_scores, ModerationResult};

const REPORT_TITLE: &str = "Message Flagged!";

/// Marker appended to the Message/Images entries whose part was flagged.
const FLAGGED_MARKER: &str = " (flagged)";

/// Minimum combined percentage for a category to appear on the report.
const VIOLATION_THRESHOLD: i64 = 10;

/// A category whose combined score crossed the report threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationField {
    pub name: String,
    pub percentage: i64,
}

/// Ranks combined scores into renderable violation fields.
///
/// Categories at or above 10% are kept, sorted by percentage descending.
/// The threshold compares the unrounded value, so a 9.9% score stays off
/// the report even though it would display as 10%. The sort is stable, so
/// equal percentages keep their first-seen category order.
pub fn violation_fields(scores: &CategoryScores) -> Vec<ViolationField> {
    let mut fields: Vec<ViolationField> = scores
        .iter()
        .filter_map(|(name, score)| {
            let percent = score * 100.0;
            (percent >= VIOLATION_THRESHOLD as f64).then(|| ViolationField {
                name: name.to_string(),
                percentage: percent.round() as i64,
            })
        })
        .collect();

    fields.sort_by_key(|field| std::cmp::Reverse(field.percentage));
    fields
}

/// A name/value pair rendered as one embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub name: String,
    pub value: String,
}

/// The structured summary posted to the reports channel.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    /// Direct link back to the original message
    pub origin_url: String,
    pub author_name: String,
    pub author_icon_url: String,
    /// Fields in render order: User, Channel?, Message?, Images?, violations
    pub fields: Vec<ReportField>,
}

impl Report {
    /// Builds the report for a flagged message.
    ///
    /// Deterministic in its inputs; neither the message nor the results are
    /// mutated.
    pub fn build(message: &Message, results: &[ModerationResult]) -> Report {
        let mut fields = vec![ReportField {
            name: "User".to_string(),
            value: message.author.mention().to_string(),
        }];

        // Only regular guild channels are addressable in a report.
        if message.guild_id.is_some() {
            fields.push(ReportField {
                name: "Channel".to_string(),
                value: message.channel_id.mention().to_string(),
            });
        }

        if let Some(text) = results.iter().find(|result| result.is_text()) {
            let marker = if text.flagged { FLAGGED_MARKER } else { "" };
            fields.push(ReportField {
                name: format!("Message{marker}"),
                value: format!("\n{}\n", message.content),
            });
        }

        let images: Vec<String> = results
            .iter()
            .filter(|result| result.is_image())
            .map(|result| {
                let marker = if result.flagged { FLAGGED_MARKER } else { "" };
                format!("{}{marker}", result.content())
            })
            .collect();
        if !images.is_empty() {
            fields.push(ReportField {
                name: "Images".to_string(),
                value: images.join("\n"),
            });
        }

        for violation in violation_fields(&combined_scores(results)) {
            fields.push(ReportField {
                name: violation.name,
                value: format!("{}%", violation.percentage),
            });
        }

        Report {
            title: REPORT_TITLE.to_string(),
            origin_url: message.link(),
            author_name: format!(
                "{} {}",
                message.author.display_name(),
                message.author.mention()
            ),
            author_icon_url: message.author.face(),
            fields,
        }
    }

    /// Renders the report as the embed sent to the reports channel.
    pub fn into_embed(self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(self.title)
            .description(format!("[Jump To Message]({})", self.origin_url))
            .colour(Colour::RED)
            .author(CreateEmbedAuthor::new(self.author_name).icon_url(self.author_icon_url));

        for field in self.fields {
            embed = embed.field(field.name, field.value, false);
        }

        embed
    }
}
