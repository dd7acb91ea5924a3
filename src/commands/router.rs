//! Interaction routing
//!
//! Resolves a dispatch key from an interaction's chosen sub-command path
//! and invokes the matching registered handler. Nothing raised below this
//! boundary escapes it: handler and resolution failures become generic
//! error replies, lookup misses become "no implementation" replies.

use anyhow::{bail, Result};
use log::{debug, error, warn};
use uuid::Uuid;

use super::interaction::{Interaction, InteractionData, InteractionDataOption};
use super::registry::HandlerRegistry;
use super::responder::{Reply, Responder};
use super::schema::CommandOptionType;

/// Resolve the dispatch key for an interaction.
///
/// The key starts with the lower-cased top-level command name followed by
/// the chosen sub-command path, space-joined. Resolution is pure and never
/// suspends.
pub fn resolve_dispatch_key(data: &InteractionData) -> Result<String> {
    let mut segments = vec![data.name.to_lowercase()];
    segments.extend(sub_command_path(&data.options)?);
    Ok(segments.join(" "))
}

/// Walk the chosen option path.
///
/// A chosen path is a single walk down the option tree, so only the first
/// entry of each options list is inspected: a group contributes its name
/// and recurses, a sub-command contributes its name and terminates, and
/// anything else at this position is malformed interaction data.
fn sub_command_path(options: &[InteractionDataOption]) -> Result<Vec<String>> {
    let option = match options.first() {
        Some(option) => option,
        None => return Ok(Vec::new()),
    };

    match option.kind {
        CommandOptionType::SubCommandGroup => {
            let mut segments = vec![option.name.to_lowercase()];
            segments.extend(sub_command_path(&option.options)?);
            Ok(segments)
        }
        CommandOptionType::SubCommand => Ok(vec![option.name.to_lowercase()]),
        other => bail!(
            "unknown sub-command type {other:?} for option '{}'",
            option.name
        ),
    }
}

/// Route one interaction to its handler.
///
/// The registry is read-only here; each call is independent of every other
/// in-flight interaction.
pub async fn handle(
    interaction: &Interaction,
    registry: &HandlerRegistry,
    responder: &Responder,
) {
    let request_id = Uuid::new_v4();

    let key = match resolve_dispatch_key(&interaction.data) {
        Ok(key) => key,
        Err(err) => {
            let name = interaction.data.name.to_lowercase();
            error!("[{request_id}] Failed to resolve sub-command path for '{name}': {err:#}");
            responder
                .reply(
                    interaction,
                    Reply::text(format!("Error occurred while executing command '{name}'")),
                )
                .await;
            return;
        }
    };

    debug!(
        "[{request_id}] Interaction {} resolved to command '{key}'",
        interaction.id
    );

    match registry.get(&key) {
        Some(handler) => {
            if let Err(err) = handler.handle(responder, interaction).await {
                error!("[{request_id}] Command '{key}' failed: {err:#}");
                responder
                    .reply(
                        interaction,
                        Reply::text(format!(
                            "Error occurred while executing command '{key}'"
                        )),
                    )
                    .await;
            }
        }
        None => {
            warn!("[{request_id}] No handler registered for command '{key}'");
            responder
                .reply(
                    interaction,
                    Reply::text(format!("No implementation found for command '{key}'")),
                )
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(json: serde_json::Value) -> InteractionData {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_key_without_options_is_command_name() {
        let data = data(serde_json::json!({ "name": "SOS" }));
        assert_eq!(resolve_dispatch_key(&data).unwrap(), "sos");
    }

    #[test]
    fn test_key_with_sub_command() {
        let data = data(serde_json::json!({
            "name": "Player",
            "options": [{ "name": "Get", "type": 1 }],
        }));
        assert_eq!(resolve_dispatch_key(&data).unwrap(), "player get");
    }

    #[test]
    fn test_key_with_nested_groups_has_expected_depth() {
        // Two groups then a terminal sub-command: 2 + 2 segments
        let data = data(serde_json::json!({
            "name": "player",
            "options": [{
                "name": "test",
                "type": 2,
                "options": [{
                    "name": "inner",
                    "type": 2,
                    "options": [{ "name": "get", "type": 1 }],
                }],
            }],
        }));

        let key = resolve_dispatch_key(&data).unwrap();
        assert_eq!(key, "player test inner get");
        assert_eq!(key.split(' ').count(), 4);
    }

    #[test]
    fn test_group_without_chosen_child_terminates_path() {
        let data = data(serde_json::json!({
            "name": "player",
            "options": [{ "name": "test", "type": 2 }],
        }));
        assert_eq!(resolve_dispatch_key(&data).unwrap(), "player test");
    }

    #[test]
    fn test_sub_command_options_do_not_extend_key() {
        // Leaf values below the terminal sub-command are arguments, not
        // path segments
        let data = data(serde_json::json!({
            "name": "player",
            "options": [{
                "name": "get",
                "type": 1,
                "options": [{ "name": "user", "type": 6, "value": "42" }],
            }],
        }));
        assert_eq!(resolve_dispatch_key(&data).unwrap(), "player get");
    }

    #[test]
    fn test_leaf_type_at_path_position_is_an_error() {
        let data = data(serde_json::json!({
            "name": "player",
            "options": [{ "name": "user", "type": 6, "value": "42" }],
        }));

        let err = resolve_dispatch_key(&data).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown sub-command type"), "{message}");
        assert!(message.contains("User"), "{message}");
        assert!(message.contains("user"), "{message}");
    }

    #[test]
    fn test_error_surfaces_from_nested_position() {
        let data = data(serde_json::json!({
            "name": "player",
            "options": [{
                "name": "test",
                "type": 2,
                "options": [{ "name": "oops", "type": 3, "value": "x" }],
            }],
        }));

        let err = resolve_dispatch_key(&data).unwrap_err();
        assert!(err.to_string().contains("String"));
    }
}
