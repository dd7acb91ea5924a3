//! Player command handlers
//!
//! Handles: player get, player remove
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Initial get/remove implementations

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::info;

use crate::commands::handler::SlashCommandHandler;
use crate::commands::interaction::{get_user_option, Interaction};
use crate::commands::responder::{Reply, Responder};
use crate::core::embeds::Embed;

/// Accent color for player embeds.
const PLAYER_EMBED_COLOR: u32 = 0x5865F2;

/// Handler for /player get
pub struct PlayerGetHandler;

#[async_trait]
impl SlashCommandHandler for PlayerGetHandler {
    fn command_path(&self) -> &'static [&'static str] {
        &["player", "get"]
    }

    async fn handle(&self, responder: &Responder, interaction: &Interaction) -> Result<()> {
        let options = interaction.data.leaf_options();
        let user_id = get_user_option(options, "user")
            .ok_or_else(|| anyhow!("missing required option 'user'"))?;

        let embed = Embed::new()
            .title("Player")
            .description(format!("Profile for <@{user_id}>"))
            .color(PLAYER_EMBED_COLOR)
            .field("id", user_id.as_str(), true);

        responder.reply(interaction, Reply::embed(embed)).await;
        Ok(())
    }
}

/// Handler for /player remove
pub struct PlayerRemoveHandler;

#[async_trait]
impl SlashCommandHandler for PlayerRemoveHandler {
    fn command_path(&self) -> &'static [&'static str] {
        &["player", "remove"]
    }

    async fn handle(&self, responder: &Responder, interaction: &Interaction) -> Result<()> {
        let options = interaction.data.leaf_options();
        let user_id = get_user_option(options, "user")
            .ok_or_else(|| anyhow!("missing required option 'user'"))?;

        info!("Removing player {user_id}");

        responder
            .reply(interaction, Reply::text(format!("Removed player <@{user_id}>.")))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_paths() {
        assert_eq!(PlayerGetHandler.command_path(), &["player", "get"]);
        assert_eq!(PlayerRemoveHandler.command_path(), &["player", "remove"]);
    }
}
