//! Gateway wire types
//!
//! Payload envelope and opcode constants for the gateway websocket
//! protocol. Dispatch events carrying interactions deserialize into
//! [`Interaction`](crate::commands::interaction::Interaction).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Payload envelope, opcode constants, Identify types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opcode 0: Dispatch, an event was delivered.
pub const OP_DISPATCH: u8 = 0;

/// Opcode 1: Heartbeat, also sent by the server to request one immediately.
pub const OP_HEARTBEAT: u8 = 1;

/// Opcode 2: Identify, starts a new session.
pub const OP_IDENTIFY: u8 = 2;

/// Opcode 7: Reconnect, server is going away.
pub const OP_RECONNECT: u8 = 7;

/// Opcode 9: Invalid Session, the session has been invalidated.
pub const OP_INVALID_SESSION: u8 = 9;

/// Opcode 10: Hello, sent on connection with the heartbeat interval.
pub const OP_HELLO: u8 = 10;

/// Opcode 11: Heartbeat ACK.
pub const OP_HEARTBEAT_ACK: u8 = 11;

/// Envelope for all gateway communication, incoming and outgoing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayPayload {
    /// The opcode for this payload.
    pub op: u8,

    /// Event data (the `d` field). May be `null` for heartbeats.
    pub d: Option<Value>,

    /// Sequence number, echoed back in heartbeats. Dispatch only.
    pub s: Option<u64>,

    /// Event name (e.g. `"INTERACTION_CREATE"`). Dispatch only.
    pub t: Option<String>,
}

/// The `d` field of a Hello payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HelloData {
    /// Interval (in milliseconds) between heartbeats.
    pub heartbeat_interval: u64,
}

/// The `d` field of an Identify payload.
#[derive(Debug, Clone, Serialize)]
pub struct IdentifyPayload {
    /// Authentication token.
    pub token: String,

    /// Gateway intents bitmask.
    pub intents: u32,

    /// Connection properties (OS, browser, device).
    pub properties: ConnectionProperties,
}

/// Connection properties sent in the Identify payload.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionProperties {
    pub os: String,
    pub browser: String,
    pub device: String,
}
