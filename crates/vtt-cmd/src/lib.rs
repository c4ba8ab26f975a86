//! VTT-RS Command System
//!
//! This crate provides the macro-function dispatch layer for VTT-RS: the
//! upstream expression engine evaluates a macro, encounters a function
//! call such as `setMapVisible(0, "Dungeon")`, and hands the name plus the
//! evaluated argument list to this crate for execution against the zone
//! registry.
//!
//! # Overview
//!
//! - Resolves a command name (alias aware) to one registered operation
//! - Validates argument arity against the operation's declared bounds
//! - Resolves zone arguments by display name (first match in load order)
//! - Mutates zone state, then notifies session peers, then refreshes the
//!   local display, in that order
//! - Returns a [`CommandValue`] (plain text or a structured name list) or
//!   a typed [`CmdError`]
//!
//! # Example
//!
//! ```
//! use vtt_cmd::{ArgValue, CommandContext, CommandExecutor};
//! use vtt_zone::{Standalone, ZoneRegistry};
//!
//! let mut zones = ZoneRegistry::new("Grasslands");
//! zones.add("Dungeon");
//!
//! let mut broadcast = Standalone;
//! let mut display = Standalone;
//! let privileges = Standalone;
//! let mut executor = CommandExecutor::new();
//!
//! let mut ctx = CommandContext::new(&mut zones, &mut broadcast, &mut display, &privileges);
//! let name = executor.execute(&mut ctx, "setCurrentMap", &[ArgValue::from("Dungeon")])?;
//! assert_eq!(name.to_string(), "Dungeon");
//! # Ok::<(), vtt_cmd::CmdError>(())
//! ```
//!
//! # Architecture
//!
//! - **Argument values**: [`ArgValue`] carries the opaque values handed
//!   over by the expression engine; coercion to text and boolean happens
//!   here, not in the caller
//! - **Command trait**: interface for implementing operations, with a
//!   declared `[min, max]` arity per command
//! - **CommandRegistry**: maps command names (and aliases) to
//!   implementations
//! - **CommandExecutor**: validates and dispatches invocations, feeding
//!   history and the replay log
//! - **CommandHistory** / **CommandLogger**: recall and replay support

mod args;
mod command;
pub mod commands;
mod error;
mod executor;
mod history;
mod logger;

// Re-export main types
pub use args::{ArgValue, CommandRequest, CommandValue};
pub use command::{Command, CommandContext, CommandRegistry};
pub use error::{CmdError, CmdResult};
pub use executor::CommandExecutor;
pub use history::CommandHistory;
pub use logger::CommandLogger;

// Collaborator traits live in the zone crate; re-export them so hosts can
// depend on this crate alone.
pub use vtt_zone::{DisplayRefresher, PrivilegeChecker, SessionBroadcaster};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::args::{ArgValue, CommandRequest, CommandValue};
    pub use crate::command::{Command, CommandContext, CommandRegistry};
    pub use crate::error::{CmdError, CmdResult};
    pub use crate::executor::CommandExecutor;
    pub use vtt_zone::{DisplayRefresher, PrivilegeChecker, SessionBroadcaster};
}
