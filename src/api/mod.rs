//! Shared Discord REST client
//!
//! Wraps a [`reqwest::Client`] with bot-token authentication and the API
//! base URL. Command registration and interaction replies both go through
//! this client.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial client with bot-token auth and JSON POST helper

use anyhow::{anyhow, Result};
use serde::Serialize;

/// Base URL for the Discord REST API.
pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// HTTP client for the Discord REST API.
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl DiscordClient {
    /// Create a new client with the given bot token.
    pub fn new(token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DISCORD_API_BASE.to_owned(),
            token,
        }
    }

    /// Create a client pointing at a custom base URL (for testing).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Return the base URL used for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body to the given URL.
    ///
    /// Any non-2xx status is an error carrying the response body.
    pub async fn post_json<T>(&self, url: &str, body: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let resp = self
            .http
            .post(url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let err_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".into());
            return Err(anyhow!("Discord API returned {status}: {err_body}"));
        }

        Ok(())
    }
}
