//! SOS command handler
//!
//! Handles: sos
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::commands::handler::SlashCommandHandler;
use crate::commands::interaction::Interaction;
use crate::commands::responder::{Reply, Responder};

/// Handler for /sos
pub struct SosHandler;

#[async_trait]
impl SlashCommandHandler for SosHandler {
    fn command_path(&self) -> &'static [&'static str] {
        &["sos"]
    }

    async fn handle(&self, responder: &Responder, interaction: &Interaction) -> Result<()> {
        info!(
            "SOS called in guild {}",
            interaction.guild_id.as_deref().unwrap_or("unknown")
        );

        responder
            .reply(interaction, Reply::text("@here SOS! Backup requested."))
            .await;
        Ok(())
    }
}
