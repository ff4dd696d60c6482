//! Error types for the moderation bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors declared
//! in the submodules. Event handlers recover from errors locally by logging;
//! only startup failures propagate out of `main`.

pub mod classification;
pub mod config;
pub mod storage;

use thiserror::Error;

use crate::error::{config::ConfigError, storage::StorageError};

/// Top-level application error type.
///
/// Aggregates the errors that cross the startup and command surfaces.
/// Classification errors stay inside the moderation pipeline and are logged
/// where they occur. Variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Fatal; the process does not start without its required credentials.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure persisting or loading the report-channel configuration.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
