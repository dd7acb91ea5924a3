//! # Gateway Connection
//!
//! Maintains the websocket session that delivers interaction events.
//! Each `INTERACTION_CREATE` dispatch spawns an independent task through
//! the router, so a slow handler blocks only its own interaction. The
//! connection re-identifies after a fixed delay whenever it drops; there
//! is no session resume.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.3.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Answer server heartbeat requests and re-identify on invalid session
//! - 1.0.0: Initial Hello/Identify/heartbeat loop

pub mod events;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::commands::interaction::{Interaction, APPLICATION_COMMAND};
use crate::commands::registry::HandlerRegistry;
use crate::commands::responder::Responder;
use crate::commands::router;
use crate::core::config::Config;

use events::{
    ConnectionProperties, GatewayPayload, HelloData, IdentifyPayload, OP_DISPATCH, OP_HEARTBEAT,
    OP_HEARTBEAT_ACK, OP_HELLO, OP_IDENTIFY, OP_INVALID_SESSION, OP_RECONNECT,
};

/// Delay before reconnecting after a connection failure.
const RECONNECT_DELAY_SECS: u64 = 5;

/// Interaction events are not gated behind a gateway intent.
const GATEWAY_INTENTS: u32 = 0;

/// Fallback heartbeat interval if Hello cannot be read.
const DEFAULT_HEARTBEAT_MS: u64 = 41_250;

/// Run the gateway connection for the process lifetime.
///
/// The registry is built before this is called and only read afterwards;
/// it is shared into per-interaction tasks via `Arc`.
pub async fn run(
    config: &Config,
    registry: Arc<HandlerRegistry>,
    responder: Responder,
) -> Result<()> {
    loop {
        let ws_stream = match tokio_tungstenite::connect_async(config.gateway_url.as_str()).await
        {
            Ok((stream, _)) => stream,
            Err(err) => {
                error!("Failed to connect to gateway: {err}");
                tokio::time::sleep(Duration::from_secs(RECONNECT_DELAY_SECS)).await;
                continue;
            }
        };

        info!("Gateway connected");

        let (mut ws_write, mut ws_read) = ws_stream.split();

        // Hello (opcode 10) carries the heartbeat interval.
        let heartbeat_interval = loop {
            match ws_read.next().await {
                Some(Ok(WsMessage::Text(text))) => {
                    if let Ok(payload) = serde_json::from_str::<GatewayPayload>(&text) {
                        if payload.op == OP_HELLO {
                            if let Some(d) = payload.d {
                                if let Ok(hello) = serde_json::from_value::<HelloData>(d) {
                                    break hello.heartbeat_interval;
                                }
                            }
                        }
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    error!("WebSocket error waiting for Hello: {err}");
                    break DEFAULT_HEARTBEAT_MS;
                }
                None => break DEFAULT_HEARTBEAT_MS,
            }
        };

        debug!("Received Hello, heartbeat interval {heartbeat_interval}ms");

        let identify = GatewayPayload {
            op: OP_IDENTIFY,
            d: Some(
                serde_json::to_value(IdentifyPayload {
                    token: config.discord_token.clone(),
                    intents: GATEWAY_INTENTS,
                    properties: ConnectionProperties {
                        os: std::env::consts::OS.to_owned(),
                        browser: "switchboard".into(),
                        device: "switchboard".into(),
                    },
                })
                .unwrap_or_default(),
            ),
            s: None,
            t: None,
        };

        if let Ok(json) = serde_json::to_string(&identify) {
            if let Err(err) = ws_write.send(WsMessage::Text(json)).await {
                error!("Failed to send Identify: {err}");
                tokio::time::sleep(Duration::from_secs(RECONNECT_DELAY_SECS)).await;
                continue;
            }
        }

        let mut heartbeat_timer =
            tokio::time::interval(Duration::from_millis(heartbeat_interval));
        // The first tick fires immediately; skip it and wait for the first
        // real interval.
        heartbeat_timer.tick().await;

        let mut sequence: Option<u64> = None;

        loop {
            tokio::select! {
                _ = heartbeat_timer.tick() => {
                    let heartbeat = heartbeat_payload(sequence);
                    if let Ok(json) = serde_json::to_string(&heartbeat) {
                        if let Err(err) = ws_write.send(WsMessage::Text(json)).await {
                            warn!("Failed to send heartbeat: {err}");
                            break;
                        }
                        debug!("Sent heartbeat (seq {sequence:?})");
                    }
                }
                msg = ws_read.next() => {
                    match msg {
                        Some(Ok(WsMessage::Text(text))) => {
                            match serde_json::from_str::<GatewayPayload>(&text) {
                                Ok(payload) => {
                                    if let Some(s) = payload.s {
                                        sequence = Some(s);
                                    }

                                    match payload.op {
                                        OP_DISPATCH => {
                                            dispatch_event(payload, &registry, &responder);
                                        }
                                        OP_HEARTBEAT => {
                                            // Server requested an immediate heartbeat.
                                            let heartbeat = heartbeat_payload(sequence);
                                            if let Ok(json) = serde_json::to_string(&heartbeat) {
                                                let _ = ws_write.send(WsMessage::Text(json)).await;
                                            }
                                        }
                                        OP_HEARTBEAT_ACK => {
                                            debug!("Heartbeat acknowledged");
                                        }
                                        OP_RECONNECT => {
                                            info!("Server requested reconnect");
                                            break;
                                        }
                                        OP_INVALID_SESSION => {
                                            warn!("Session invalidated, re-identifying");
                                            break;
                                        }
                                        other => debug!("Unhandled opcode {other}"),
                                    }
                                }
                                Err(err) => warn!("Failed to parse gateway payload: {err}"),
                            }
                        }
                        Some(Ok(WsMessage::Close(_))) => {
                            info!("Gateway closed by server");
                            break;
                        }
                        Some(Ok(WsMessage::Ping(data))) => {
                            let _ = ws_write.send(WsMessage::Pong(data)).await;
                        }
                        Some(Err(err)) => {
                            error!("Gateway websocket error: {err}");
                            break;
                        }
                        None => {
                            info!("Gateway stream ended");
                            break;
                        }
                        _ => {} // Binary, Pong, Frame
                    }
                }
            }
        }

        warn!("Gateway disconnected, reconnecting in {RECONNECT_DELAY_SECS}s");
        tokio::time::sleep(Duration::from_secs(RECONNECT_DELAY_SECS)).await;
    }
}

fn heartbeat_payload(sequence: Option<u64>) -> GatewayPayload {
    GatewayPayload {
        op: OP_HEARTBEAT,
        d: sequence.map(|s| serde_json::json!(s)),
        s: None,
        t: None,
    }
}

/// Handle one Dispatch (opcode 0) payload.
///
/// Interactions are routed on their own task; everything else is noted
/// and dropped.
fn dispatch_event(
    payload: GatewayPayload,
    registry: &Arc<HandlerRegistry>,
    responder: &Responder,
) {
    let event = match payload.t.as_deref() {
        Some(event) => event.to_owned(),
        None => return,
    };

    match event.as_str() {
        "READY" => info!("Gateway session ready"),
        "INTERACTION_CREATE" => {
            let d = match payload.d {
                Some(d) => d,
                None => return,
            };

            match serde_json::from_value::<Interaction>(d) {
                Ok(interaction) => {
                    if interaction.kind != APPLICATION_COMMAND {
                        debug!("Ignoring non-command interaction {}", interaction.id);
                        return;
                    }

                    let registry = Arc::clone(registry);
                    let responder = responder.clone();
                    tokio::spawn(async move {
                        router::handle(&interaction, &registry, &responder).await;
                    });
                }
                Err(err) => warn!("Failed to parse INTERACTION_CREATE: {err}"),
            }
        }
        other => debug!("Unhandled dispatch event {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heartbeat_payload_carries_sequence() {
        let payload = heartbeat_payload(Some(7));
        assert_eq!(payload.op, OP_HEARTBEAT);
        assert_eq!(payload.d, Some(serde_json::json!(7)));
    }

    #[test]
    fn test_heartbeat_payload_without_sequence() {
        let payload = heartbeat_payload(None);
        assert_eq!(payload.op, OP_HEARTBEAT);
        assert!(payload.d.is_none());
    }
}
