//! # Slash Commands (/)
//!
//! Command definitions and platform registration.
//!
//! Each top-level command builds its schema in its own submodule;
//! registration uploads every schema independently so one rejected
//! command cannot block the others. Repeated registration is an
//! idempotent upsert on the platform side.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Register each schema independently instead of aborting on the first failure
//! - 1.1.0: Scope registration to the development guild via ENVIRONMENT
//! - 1.0.0: Initial registration over REST

mod player;
mod sos;

use log::{error, info};

use crate::api::DiscordClient;
use crate::core::config::{Config, Environment};

use super::schema::CommandSchema;

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CommandSchema> {
    vec![sos::create_command(), player::create_command()]
}

/// Build the command-registration endpoint URL, guild-scoped when a guild
/// id is given.
fn commands_url(base_url: &str, application_id: &str, guild_id: Option<&str>) -> String {
    match guild_id {
        Some(guild_id) => {
            format!("{base_url}/applications/{application_id}/guilds/{guild_id}/commands")
        }
        None => format!("{base_url}/applications/{application_id}/commands"),
    }
}

async fn register_commands(api: &DiscordClient, url: &str) {
    let commands = create_slash_commands();
    let total = commands.len();
    let mut registered = 0;

    for schema in &commands {
        match api.post_json(url, schema).await {
            Ok(()) => registered += 1,
            Err(err) => error!("Failed to register command '{}': {err:#}", schema.name),
        }
    }

    info!("Registered {registered}/{total} slash commands");
}

/// Registers all slash commands globally
pub async fn register_global_commands(api: &DiscordClient, application_id: &str) {
    let url = commands_url(api.base_url(), application_id, None);
    register_commands(api, &url).await;
}

/// Registers all slash commands for a specific guild (faster for testing)
pub async fn register_guild_commands(api: &DiscordClient, application_id: &str, guild_id: &str) {
    let url = commands_url(api.base_url(), application_id, Some(guild_id));
    register_commands(api, &url).await;
}

/// Register every command definition with the platform.
///
/// Scoped to the development guild when running in development, global
/// otherwise. Registration failures are logged and never fatal.
pub async fn import_commands(api: &DiscordClient, config: &Config) {
    match (config.environment, config.dev_guild_id.as_deref()) {
        (Environment::Development, Some(guild_id)) => {
            info!("Registering commands against development guild {guild_id}");
            register_guild_commands(api, &config.application_id, guild_id).await;
        }
        _ => register_global_commands(api, &config.application_id).await,
    }
}
