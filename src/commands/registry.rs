//! Command handler registry
//!
//! Maps dispatch keys (lower-cased, space-joined command paths) to
//! handlers. Built once at startup and read-only during dispatch.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.1.0: Key handlers by the dispatch key derived from their path
//! - 1.0.0: Initial implementation for handler dispatch

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use super::handler::SlashCommandHandler;

/// Derive the dispatch key for a command path.
///
/// Segments are lower-cased and joined with single spaces, matching the
/// keys the router resolves from interaction data.
pub fn dispatch_key(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|segment| segment.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Registry mapping dispatch keys to handlers.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn SlashCommandHandler>>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under its declared command path.
    ///
    /// A duplicate key replaces the earlier registration; the replacement
    /// is logged so collisions are visible rather than incidental.
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        let key = dispatch_key(handler.command_path());
        if self.handlers.insert(key.clone(), handler).is_some() {
            warn!("Duplicate handler registration for '{key}', replacing earlier handler");
        } else {
            debug!("Registered slash command handler '{key}'");
        }
    }

    /// Get the handler for a dispatch key.
    pub fn get(&self, key: &str) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(key).cloned()
    }

    /// Check if a dispatch key is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.handlers.contains_key(key)
    }

    /// Number of registered dispatch keys.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// All registered dispatch keys.
    pub fn command_keys(&self) -> impl Iterator<Item = &String> {
        self.handlers.keys()
    }
}
