//! Discord bot integration.
//!
//! Wires the serenity gateway client to the moderation pipeline. The bot
//! listens for guild messages, runs each through the classifier, and posts
//! flagged-message reports to the configured reports channel. A prefix
//! command lets guild administrators pick that channel.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Channel metadata for report delivery
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `MESSAGE_CONTENT` - Read message bodies and attachments for
//!   classification (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
