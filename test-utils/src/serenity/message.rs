//! Test factories for Serenity Message, Attachment and User objects.
//!
//! These factories create valid structs by deserializing JSON shaped like
//! Discord's API payloads. All incidental fields are set to reasonable
//! defaults; the parameters cover what moderation tests care about.

use serenity::all::{Attachment, Message, User};

/// Creates a test Serenity User.
///
/// The username doubles as the global display name; the avatar is unset so
/// `User::face()` falls back to the default avatar URL.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Username and global display name
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, name: &str) -> User {
    serde_json::from_value(user_json(user_id, name))
        .expect("Failed to create test user - invalid JSON structure")
}

/// Creates a test Serenity Attachment.
///
/// # Arguments
/// - `attachment_id` - Discord attachment ID (snowflake)
/// - `filename` - Uploaded file name
/// - `content_type` - Declared media type, or `None` when Discord omitted one
/// - `url` - CDN URL of the attachment
///
/// # Panics
/// - If the JSON cannot be deserialized into an Attachment (indicates invalid test data)
pub fn create_test_attachment(
    attachment_id: u64,
    filename: &str,
    content_type: Option<&str>,
    url: &str,
) -> Attachment {
    serde_json::from_value(serde_json::json!({
        "id": attachment_id.to_string(),
        "filename": filename,
        "description": null,
        "content_type": content_type,
        "size": 1024,
        "url": url,
        "proxy_url": url,
        "height": null,
        "width": null,
        "ephemeral": false,
        "duration_secs": null,
        "waveform": null,
    }))
    .expect("Failed to create test attachment - invalid JSON structure")
}

/// Creates a test Serenity Message with customizable fields.
///
/// The author is a fixed non-bot test user. Pass `guild_id: None` to
/// simulate a direct message.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `guild_id` - Guild the message was posted in, or `None` for a DM
/// - `content` - Message text body
/// - `attachments` - Attachments carried by the message, in upload order
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    guild_id: Option<u64>,
    content: &str,
    attachments: Vec<Attachment>,
) -> Message {
    let attachments: Vec<serde_json::Value> = attachments
        .iter()
        .map(|attachment| {
            serde_json::to_value(attachment)
                .expect("Failed to serialize test attachment back to JSON")
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "author": user_json(100000000000000000, "tester"),
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": attachments,
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "application_id": null,
        "message_reference": null,
        "flags": null,
        "referenced_message": null,
        "interaction": null,
        "thread": null,
        "components": [],
        "sticker_items": [],
        "position": null,
        "role_subscription_data": null,
        "member": null,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}

fn user_json(user_id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0001",
        "global_name": name,
        "avatar": null,
        "bot": false,
        "system": false,
        "banner": null,
        "accent_color": null,
        "public_flags": 0,
    })
}
