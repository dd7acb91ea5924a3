//! Interaction replies
//!
//! Builds the per-interaction callback URL, wraps reply content into the
//! callback envelope, and performs exactly one outbound POST. Delivery
//! failures are logged and never surfaced to the caller.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Truncate text content to the message limit
//! - 1.0.0: Initial callback envelope and send

use log::error;
use serde::Serialize;

use crate::api::DiscordClient;
use crate::core::embeds::Embed;
use crate::core::response::truncate_for_message;

use super::interaction::Interaction;

/// Callback type for an immediate channel message response.
const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

/// Reply content: plain text or a single rich embed.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Reply::Text(content.into())
    }

    pub fn embed(embed: Embed) -> Self {
        Reply::Embed(embed)
    }
}

/// Envelope POSTed to the interaction callback endpoint.
#[derive(Debug, Serialize)]
pub struct InteractionCallback {
    #[serde(rename = "type")]
    kind: u8,
    data: CallbackData,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum CallbackData {
    Content { content: String },
    Embeds { embeds: Vec<Embed> },
}

impl From<Reply> for InteractionCallback {
    fn from(reply: Reply) -> Self {
        let data = match reply {
            Reply::Text(content) => CallbackData::Content {
                content: truncate_for_message(&content),
            },
            Reply::Embed(embed) => CallbackData::Embeds {
                embeds: vec![embed],
            },
        };

        InteractionCallback {
            kind: CHANNEL_MESSAGE_WITH_SOURCE,
            data,
        }
    }
}

/// Sends replies through the interaction callback endpoint.
#[derive(Clone)]
pub struct Responder {
    api: DiscordClient,
}

impl Responder {
    pub fn new(api: DiscordClient) -> Self {
        Self { api }
    }

    /// Send exactly one reply attempt for the interaction.
    ///
    /// The callback URL is single-use; there is no retry. Failures are
    /// logged so a reply error cannot cascade into a second error reply.
    pub async fn reply(&self, interaction: &Interaction, reply: Reply) {
        let url = format!(
            "{}/interactions/{}/{}/callback",
            self.api.base_url(),
            interaction.id,
            interaction.token,
        );

        let callback = InteractionCallback::from(reply);
        if let Err(err) = self.api.post_json(&url, &callback).await {
            error!("Error replying to interaction {}: {err:#}", interaction.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::MESSAGE_LIMIT;

    #[test]
    fn test_text_envelope_shape() {
        let callback = InteractionCallback::from(Reply::text("Pong!"));
        let value = serde_json::to_value(&callback).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "type": 4, "data": { "content": "Pong!" } })
        );
    }

    #[test]
    fn test_embed_envelope_shape() {
        let embed = Embed::new().title("Player").description("Profile");
        let callback = InteractionCallback::from(Reply::embed(embed));
        let value = serde_json::to_value(&callback).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": 4,
                "data": { "embeds": [{ "title": "Player", "description": "Profile" }] }
            })
        );
    }

    #[test]
    fn test_envelope_variants_are_exclusive() {
        let text = serde_json::to_value(InteractionCallback::from(Reply::text("hi"))).unwrap();
        assert!(text["data"].get("embeds").is_none());

        let embed =
            serde_json::to_value(InteractionCallback::from(Reply::embed(Embed::new()))).unwrap();
        assert!(embed["data"].get("content").is_none());
    }

    #[test]
    fn test_text_content_is_truncated() {
        let callback = InteractionCallback::from(Reply::text("x".repeat(5000)));
        let value = serde_json::to_value(&callback).unwrap();
        let content = value["data"]["content"].as_str().unwrap();
        assert!(content.len() <= MESSAGE_LIMIT);
        assert!(content.ends_with("..."));
    }
}
