//! Message event handler running the moderation pipeline.

use serenity::all::{ChannelId, Context, CreateMessage, Message, MessageFlags};

use crate::moderation;

use super::{command, Handler};

/// Handles message creation in a channel.
///
/// Routes the admin command, then submits every other guild message to the
/// moderation pipeline. Pipeline and delivery failures are logged and never
/// take down the event loop; one message's failure does not affect others.
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    // Never moderate or obey other bots, including this one
    if message.author.bot || message.author.id == ctx.cache.current_user().id {
        return;
    }

    if let Some(channel_arg) = command::parse(&message.content) {
        command::handle_set_reports_channel(handler, &ctx, &message, channel_arg).await;
        return;
    }

    // Direct messages are not moderated
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let report = match moderation::analyze_message(handler.classifier.as_ref(), &message).await {
        Ok(Some(report)) => report,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Moderation analysis failed for message {}: {e}", message.id);
            return;
        }
    };

    // Configured reports channel, or the message's own channel as fallback
    let destination = match handler.store.get(guild_id.get()).await {
        Some(channel_id) => ChannelId::new(channel_id),
        None => message.channel_id,
    };

    let delivery = CreateMessage::new()
        .embed(report.into_embed())
        .flags(MessageFlags::SUPPRESS_NOTIFICATIONS);

    if let Err(e) = destination.send_message(&ctx.http, delivery).await {
        tracing::error!("Failed to deliver report to channel {destination}: {e}");
    }
}
