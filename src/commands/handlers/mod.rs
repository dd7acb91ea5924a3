//! Per-command handler implementations
//!
//! Handlers are listed in a fixed order, so dispatch keys are derived the
//! same way on every startup.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.2.0: Add PlayerRemoveHandler
//! - 1.1.0: Add PlayerGetHandler
//! - 1.0.0: SosHandler and the fixed-order registration table

pub mod player;
pub mod sos;

use std::sync::Arc;

use super::handler::SlashCommandHandler;
use super::registry::HandlerRegistry;

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with a
/// HandlerRegistry. Order is significant only for key collisions, where
/// the later entry wins.
pub fn create_all_handlers() -> Vec<Arc<dyn SlashCommandHandler>> {
    vec![
        Arc::new(sos::SosHandler),
        Arc::new(player::PlayerGetHandler),
        Arc::new(player::PlayerRemoveHandler),
    ]
}

/// Build the handler registry for the process lifetime.
pub fn register_handlers() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    for handler in create_all_handlers() {
        registry.register(handler);
    }
    registry
}
