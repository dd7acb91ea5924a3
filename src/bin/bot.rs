use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use log::info;

use switchboard::api::DiscordClient;
use switchboard::commands::handlers::register_handlers;
use switchboard::commands::responder::Responder;
use switchboard::commands::slash::import_commands;
use switchboard::core::Config;
use switchboard::gateway;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting Switchboard...");

    let api = DiscordClient::new(config.discord_token.clone());

    // One-time schema upload; failures are logged and never fatal
    import_commands(&api, &config).await;

    let registry = Arc::new(register_handlers());
    info!("Loaded {} slash command handler(s)", registry.len());

    let responder = Responder::new(api);
    gateway::run(&config, registry, responder).await
}
