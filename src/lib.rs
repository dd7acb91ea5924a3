// API layer - shared REST client
pub mod api;

// Core layer - configuration and shared response types
pub mod core;

// Command layer - schemas, registry, routing, replies
pub mod commands;

// Gateway layer - inbound event source
pub mod gateway;

// Re-export core config
pub use crate::core::Config;

// Re-export command system items
pub use crate::commands::{
    create_slash_commands, import_commands, register_handlers, HandlerRegistry, Interaction,
    Reply, Responder, SlashCommandHandler,
};
