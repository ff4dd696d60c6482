mod bot;
mod classifier;
mod config;
mod error;
mod moderation;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    classifier::openai::OpenAiClassifier, config::Config, error::AppError,
    store::ReportChannelStore,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let store = Arc::new(ReportChannelStore::load(store::DEFAULT_CONFIG_PATH)?);
    let classifier = Arc::new(OpenAiClassifier::new(&config.openai_api_key));

    bot::start::start_bot(&config, store, classifier).await
}
