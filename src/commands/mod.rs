//! # Command System
//!
//! Slash command (/) registration and dispatch.
//!
//! Schemas describe commands to the platform; the registry maps resolved
//! dispatch keys to handlers; the router walks an interaction's chosen
//! sub-command path and invokes the match; the responder delivers the
//! reply through the interaction's callback endpoint.
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Dispatch on dotted command paths resolved from sub-command data
//! - 1.1.0: Add modular handler infrastructure (handler trait, registry)
//! - 1.0.0: Initial slash command registration and replies

pub mod handler;
pub mod handlers;
pub mod interaction;
pub mod registry;
pub mod responder;
pub mod router;
pub mod schema;
pub mod slash;

// Re-export handler infrastructure
pub use handler::SlashCommandHandler;
pub use registry::HandlerRegistry;
pub use responder::{Reply, Responder};

// Re-export commonly used items from submodules
pub use handlers::{create_all_handlers, register_handlers};
pub use interaction::{get_string_option, get_user_option, Interaction};
pub use schema::{CommandOption, CommandOptionType, CommandSchema};
pub use slash::{
    create_slash_commands, import_commands, register_global_commands, register_guild_commands,
};
