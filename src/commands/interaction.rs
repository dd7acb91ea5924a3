//! Inbound interaction events
//!
//! Wire types for interaction payloads delivered over the gateway, plus
//! helpers for reading the option values chosen by the caller.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Add leaf_options and typed option getters
//! - 1.0.0: Initial wire types

use serde::Deserialize;
use serde_json::Value;

use super::schema::CommandOptionType;

/// Interaction type marker for slash command invocations.
pub const APPLICATION_COMMAND: u8 = 2;

/// A single inbound command invocation.
///
/// The id/token pair authorizes exactly one reply through the callback
/// endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub token: String,
    #[serde(rename = "type")]
    pub kind: u8,
    pub data: InteractionData,
    pub guild_id: Option<String>,
}

/// The command payload of an interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<InteractionDataOption>,
}

/// One node of the option path chosen by the caller.
///
/// Sub-command and group nodes carry nested options; leaf nodes carry a
/// value.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionDataOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    pub value: Option<Value>,
    #[serde(default)]
    pub options: Vec<InteractionDataOption>,
}

impl InteractionData {
    /// Options of the terminal sub-command.
    ///
    /// Descends through group and sub-command nodes; for a command without
    /// sub-commands this is the top-level option list itself.
    pub fn leaf_options(&self) -> &[InteractionDataOption] {
        let mut options = self.options.as_slice();
        while let Some(first) = options.first() {
            match first.kind {
                CommandOptionType::SubCommand | CommandOptionType::SubCommandGroup => {
                    options = first.options.as_slice();
                }
                _ => break,
            }
        }
        options
    }
}

/// Get a string option value by name.
pub fn get_string_option(options: &[InteractionDataOption], name: &str) -> Option<String> {
    options
        .iter()
        .find(|opt| opt.name == name)
        .and_then(|opt| opt.value.as_ref())
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

/// Get a user option value by name (a snowflake id string).
pub fn get_user_option(options: &[InteractionDataOption], name: &str) -> Option<String> {
    get_string_option(options, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_interaction() {
        let json = r#"{
            "id": "123456789",
            "token": "aW50ZXJhY3Rpb24",
            "type": 2,
            "guild_id": "444555666",
            "data": {
                "name": "player",
                "options": [{
                    "name": "get",
                    "type": 1,
                    "options": [{ "name": "user", "type": 6, "value": "111222333" }]
                }]
            }
        }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction.id, "123456789");
        assert_eq!(interaction.kind, APPLICATION_COMMAND);
        assert_eq!(interaction.data.name, "player");
        assert_eq!(interaction.data.options.len(), 1);
        assert_eq!(
            interaction.data.options[0].kind,
            CommandOptionType::SubCommand
        );
    }

    #[test]
    fn test_deserialize_interaction_without_options() {
        let json = r#"{
            "id": "1",
            "token": "tok",
            "type": 2,
            "data": { "name": "sos" }
        }"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert!(interaction.data.options.is_empty());
        assert!(interaction.guild_id.is_none());
    }

    #[test]
    fn test_leaf_options_descends_to_sub_command() {
        let data: InteractionData = serde_json::from_str(
            r#"{
                "name": "player",
                "options": [{
                    "name": "test",
                    "type": 2,
                    "options": [{
                        "name": "get",
                        "type": 1,
                        "options": [{ "name": "user", "type": 6, "value": "42" }]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let leaf = data.leaf_options();
        assert_eq!(leaf.len(), 1);
        assert_eq!(leaf[0].name, "user");
    }

    #[test]
    fn test_leaf_options_top_level_values() {
        let data: InteractionData = serde_json::from_str(
            r#"{
                "name": "echo",
                "options": [{ "name": "text", "type": 3, "value": "hi" }]
            }"#,
        )
        .unwrap();

        let leaf = data.leaf_options();
        assert_eq!(leaf.len(), 1);
        assert_eq!(leaf[0].name, "text");
    }

    #[test]
    fn test_get_string_option() {
        let options: Vec<InteractionDataOption> = serde_json::from_str(
            r#"[
                { "name": "text", "type": 3, "value": "hello" },
                { "name": "count", "type": 4, "value": 3 }
            ]"#,
        )
        .unwrap();

        assert_eq!(get_string_option(&options, "text").as_deref(), Some("hello"));
        // Non-string values are not coerced
        assert!(get_string_option(&options, "count").is_none());
        assert!(get_string_option(&options, "missing").is_none());
    }

    #[test]
    fn test_get_user_option() {
        let options: Vec<InteractionDataOption> = serde_json::from_str(
            r#"[{ "name": "user", "type": 6, "value": "111222333" }]"#,
        )
        .unwrap();

        assert_eq!(
            get_user_option(&options, "user").as_deref(),
            Some("111222333")
        );
    }
}
