//! Command implementations
//!
//! This module contains all built-in command implementations.

pub mod maps;

use crate::command::CommandRegistry;

/// Register all built-in commands with the registry
pub fn register_all(registry: &mut CommandRegistry) {
    maps::register(registry);
}
