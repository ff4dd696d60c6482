use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub discord_bot_token: String,
    pub openai_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?,
        })
    }
}
