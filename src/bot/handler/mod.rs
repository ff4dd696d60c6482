use std::sync::Arc;

use serenity::all::{Context, EventHandler, Message, Ready};
use serenity::async_trait;

use crate::{classifier::Classifier, store::ReportChannelStore};

pub mod command;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub store: Arc<ReportChannelStore>,
    pub classifier: Arc<dyn Classifier>,
}

impl Handler {
    pub fn new(store: Arc<ReportChannelStore>, classifier: Arc<dyn Classifier>) -> Self {
        Self { store, classifier }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }
}
