//! Command trait, execution context, and registry
//!
//! Defines the interface for commands and the registry that maps names to
//! implementations.

use std::sync::Arc;

use ahash::AHashMap;

use vtt_zone::{DisplayRefresher, PrivilegeChecker, SessionBroadcaster, ZoneRegistry};

use crate::args::{CommandRequest, CommandValue};
use crate::error::CmdResult;

/// Command execution context
///
/// Carries the collaborators a command may touch: the shared zone
/// registry, the session broadcast channel, the local display, and the
/// privilege lookup for the invoking macro context. Hosts construct one
/// per invocation; nothing here is a process-wide singleton.
pub struct CommandContext<'a> {
    /// Zone registry shared with the rest of the application
    pub zones: &'a mut ZoneRegistry,
    /// Peer notification channel for the live session
    pub broadcast: &'a mut dyn SessionBroadcaster,
    /// Refresh hints for the local display
    pub display: &'a mut dyn DisplayRefresher,
    /// Privilege lookup for the invoking macro context
    pub privileges: &'a dyn PrivilegeChecker,
    /// Whether to suppress informational output
    pub quiet: bool,
}

impl<'a> CommandContext<'a> {
    /// Create a new command context
    pub fn new(
        zones: &'a mut ZoneRegistry,
        broadcast: &'a mut dyn SessionBroadcaster,
        display: &'a mut dyn DisplayRefresher,
        privileges: &'a dyn PrivilegeChecker,
    ) -> Self {
        Self {
            zones,
            broadcast,
            display,
            privileges,
            quiet: false,
        }
    }

    /// Set the quiet flag
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a message (unless quiet mode is enabled)
    pub fn print(&self, msg: &str) {
        if !self.quiet {
            log::info!("{}", msg);
        }
    }
}

/// Trait for command implementations
///
/// Commands receive a context with access to the zone registry and the
/// session collaborators, plus the invocation they were called with, and
/// return a result value or a typed error.
pub trait Command: Send + Sync {
    /// Get the command name
    fn name(&self) -> &str;

    /// Inclusive `[min, max]` argument count accepted by this command
    ///
    /// The executor enforces these bounds before `execute` runs.
    fn arity(&self) -> (usize, usize);

    /// Execute the command
    fn execute(&self, ctx: &mut CommandContext<'_>, req: &CommandRequest) -> CmdResult<CommandValue>;

    /// Get help text for this command
    fn help(&self) -> &str {
        "No help available."
    }

    /// Get list of command aliases
    fn aliases(&self) -> &[&str] {
        &[]
    }
}

/// Registry mapping command names to implementations
pub struct CommandRegistry {
    /// Commands indexed by name
    commands: AHashMap<String, Arc<dyn Command>>,
    /// Aliases mapping alias -> command name
    aliases: AHashMap<String, String>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: AHashMap::new(),
            aliases: AHashMap::new(),
        }
    }

    /// Create a registry with all built-in commands registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::commands::register_all(&mut registry);
        registry
    }

    /// Register a command
    ///
    /// Also registers any aliases defined by the command.
    pub fn register<C: Command + 'static>(&mut self, cmd: C) {
        let name = cmd.name().to_string();
        for alias in cmd.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }
        self.commands.insert(name, Arc::new(cmd));
    }

    /// Look up a command by name or alias
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        if let Some(cmd) = self.commands.get(name) {
            return Some(cmd.clone());
        }

        if let Some(real_name) = self.aliases.get(name) {
            return self.commands.get(real_name).cloned();
        }

        None
    }

    /// Check if a command exists
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Get all command names (not including aliases)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(|s| s.as_str())
    }

    /// Get the number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
