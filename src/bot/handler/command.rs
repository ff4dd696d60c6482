//! The `$set-reports-channel` admin command.
//!
//! Durably associates the invoking guild with the channel that receives
//! flagged-message reports. Restricted to guild administrators; all
//! validation failures are answered with a user-visible reply and leave the
//! stored configuration untouched.

use serenity::all::{ChannelId, ChannelType, Context, Mentionable, Message};

use crate::error::AppError;

use super::Handler;

const COMMAND: &str = "$set-reports-channel";

/// Parses a message as the set-reports-channel command.
///
/// Returns `None` when the message is not this command at all, and
/// `Some(channel_arg)` when it is, with `channel_arg` carrying the parsed
/// channel ID or `None` when the argument is missing or not an integer.
pub fn parse(content: &str) -> Option<Option<u64>> {
    let rest = content.strip_prefix(COMMAND)?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        // Another command sharing the prefix, e.g. "$set-reports-channels"
        return None;
    }
    Some(rest.trim().parse().ok().filter(|id| *id != 0))
}

/// Handles the command, logging any Discord API failure.
pub async fn handle_set_reports_channel(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    channel_arg: Option<u64>,
) {
    if let Err(e) = run(handler, ctx, message, channel_arg).await {
        tracing::error!("set-reports-channel failed: {e}");
    }
}

/// Validates the caller and target channel, then records the guild's
/// reports channel.
///
/// Validation order: guild context, administrator permission, channel
/// resolution. Each failure is a reply to the invoker; only replies that
/// themselves fail bubble up as errors.
async fn run(
    handler: &Handler,
    ctx: &Context,
    message: &Message,
    channel_arg: Option<u64>,
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        message
            .reply(&ctx.http, "This command must be used in a server")
            .await?;
        return Ok(());
    };

    let guild = guild_id.to_partial_guild(&ctx.http).await?;
    let member = guild.member(&ctx.http, message.author.id).await?;
    let is_admin = guild.owner_id == message.author.id
        || member.roles.iter().any(|role_id| {
            guild
                .roles
                .get(role_id)
                .is_some_and(|role| role.permissions.administrator())
        });
    if !is_admin {
        message
            .reply(
                &ctx.http,
                "You must be a server administrator to use this command",
            )
            .await?;
        return Ok(());
    }

    let channels = guild.channels(&ctx.http).await?;
    let channel = channel_arg
        .map(ChannelId::new)
        .and_then(|id| channels.get(&id))
        .filter(|channel| channel.kind == ChannelType::Text);

    let Some(channel) = channel else {
        message
            .reply(&ctx.http, "Invalid channel ID or channel type")
            .await?;
        return Ok(());
    };

    if let Err(e) = handler.store.set(guild_id.get(), channel.id.get()).await {
        tracing::error!("Failed to persist reports channel for guild {guild_id}: {e}");
        message
            .reply(&ctx.http, "Failed to save the reports channel, please try again")
            .await?;
        return Ok(());
    }

    message
        .reply(
            &ctx.http,
            format!("I will now send reports to: {}", channel.id.mention()),
        )
        .await?;

    Ok(())
}
