//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Message, Attachment, User) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's
//! API would return.
//!
//! # Available Factories
//!
//! - `message::create_test_message` - Create Serenity Message objects
//! - `message::create_test_attachment` - Create Serenity Attachment objects
//! - `message::create_test_user` - Create Serenity User objects

pub mod message;

// Re-export commonly used functions for convenience
pub use message::{create_test_attachment, create_test_message, create_test_user};
