//! Environment configuration
//!
//! All runtime configuration is read once at startup from the process
//! environment (a `.env` file is loaded by the binary before this runs).

use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Default gateway URL when `GATEWAY_URL` is not set.
pub const DEFAULT_GATEWAY_URL: &str = "wss://gateway.discord.gg/?v=10&encoding=json";

/// Registration scope selector.
///
/// Development registers commands against a single guild (changes show up
/// immediately); production registers them globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => bail!("unrecognized ENVIRONMENT value '{other}'"),
        }
    }
}

/// Bot configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub application_id: String,
    pub environment: Environment,
    /// Guild used for command registration in development.
    pub dev_guild_id: Option<String>,
    pub gateway_url: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let discord_token =
            std::env::var("DISCORD_TOKEN").context("DISCORD_TOKEN is not set")?;
        let application_id =
            std::env::var("APPLICATION_ID").context("APPLICATION_ID is not set")?;

        let environment = match std::env::var("ENVIRONMENT") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Production,
        };

        let dev_guild_id = std::env::var("GUILD_ID_DEV").ok();
        if environment.is_development() && dev_guild_id.is_none() {
            bail!("GUILD_ID_DEV must be set when ENVIRONMENT is development");
        }

        let gateway_url =
            std::env::var("GATEWAY_URL").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_owned());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        Ok(Self {
            discord_token,
            application_id,
            environment,
            dev_guild_id,
            gateway_url,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parses_known_values() {
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!("dev".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!(
            "Production".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn test_environment_rejects_unknown_value() {
        let err = "staging".parse::<Environment>().unwrap_err();
        assert!(err.to_string().contains("staging"));
    }

    #[test]
    fn test_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
    }
}
