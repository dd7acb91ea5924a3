//! # Core Module
//!
//! Configuration and shared response types for the dispatch layer.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Add embeds module with shared embed builders
//! - 1.0.0: Configuration and message limits

pub mod config;
pub mod embeds;
pub mod response;

// Re-export commonly used items
pub use config::{Config, Environment};
pub use embeds::{Embed, EmbedField};
pub use response::{truncate_for_embed, truncate_for_message, EMBED_LIMIT, MESSAGE_LIMIT};
