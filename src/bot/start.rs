use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, classifier::Classifier, config::Config, error::AppError,
    store::ReportChannelStore,
};

/// Starts the Discord bot in a blocking manner
///
/// Builds the serenity client with the moderation event handler and runs it
/// until shutdown.
///
/// # Arguments
/// - `config` - Application configuration with the bot token
/// - `store` - Shared per-guild reports channel configuration
/// - `classifier` - Content moderation classifier used by the pipeline
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(
    config: &Config,
    store: Arc<ReportChannelStore>,
    classifier: Arc<dyn Classifier>,
) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(store, classifier);

    // Build the client
    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
