//! Modwatch Test Utils
//!
//! Provides shared testing utilities for the moderation bot. This crate
//! offers factory functions that build real Serenity structs (messages,
//! attachments, users) by deserializing JSON shaped like Discord's API
//! responses, so pipeline code can be exercised without a gateway
//! connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_attachment, create_test_message};
//!
//! let attachment = create_test_attachment(1, "pic.png", Some("image/png"),
//!     "https://cdn.example.com/pic.png");
//! let message = create_test_message(10, 20, Some(30), "hello", vec![attachment]);
//! ```

pub mod serenity;
