//! Embed builders for rich replies
//!
//! Serializable embed construction for interaction callback payloads.
//! Descriptions are truncated to the platform limit at build time.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.4.0
//!
//! ## Changelog
//! - 1.0.0: Extracted from inline embed construction in the player handlers

use serde::Serialize;

use crate::core::response::truncate_for_embed;

/// A rich message embed.
///
/// Built with chained setters and serialized directly into the callback
/// payload's `embeds` array.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

/// A single name/value field within an embed.
#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description, truncated to the embed limit.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(truncate_for_embed(&text.into()));
        self
    }

    /// Set the accent color.
    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}
