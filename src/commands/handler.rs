//! Slash command handler trait
//!
//! Each command handler implements this trait for one command path.
//! Handlers are registered with a [`HandlerRegistry`](super::registry::HandlerRegistry)
//! and dispatched on the key resolved from the interaction's sub-command
//! path.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Replace flat command names with command path segments
//! - 1.0.0: Initial implementation for modular command handling

use anyhow::Result;
use async_trait::async_trait;

use super::interaction::Interaction;
use super::responder::Responder;

/// Trait for slash command handlers.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl SlashCommandHandler for PingHandler {
///     fn command_path(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     async fn handle(&self, responder: &Responder, interaction: &Interaction) -> Result<()> {
///         responder.reply(interaction, Reply::text("Pong!")).await;
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SlashCommandHandler: Send + Sync {
    /// Command path segments this handler serves, e.g. `["player", "get"]`.
    fn command_path(&self) -> &'static [&'static str];

    /// Handle the interaction.
    ///
    /// Errors are caught by the router and turned into a generic error
    /// reply; they never tear down the process.
    async fn handle(&self, responder: &Responder, interaction: &Interaction) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The trait must stay object-safe (registry stores dyn handlers)
    fn _assert_object_safe(_: &dyn SlashCommandHandler) {}
}
