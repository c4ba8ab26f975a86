//! Error types for command dispatch and execution
//!
//! Every failure aborts the invocation immediately; mutating commands
//! validate and resolve everything before the first mutation, so a failed
//! call never leaves a zone half-mutated and never broadcasts.
//!
//! The variants carry their parameters as structured fields. The derived
//! `Display` is the default rendering; a host with a localization layer
//! can match on the variant and format its own text instead.

use thiserror::Error;

use vtt_zone::ZoneError;

/// Result type for command operations
pub type CmdResult<T = ()> = Result<T, CmdError>;

/// Errors that can occur during command execution
#[derive(Debug, Error)]
pub enum CmdError {
    /// Command name not present in the registry
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Fewer arguments than the command's declared minimum
    #[error("{function}(): not enough parameters, expected at least {min}, got {got}")]
    TooFewArguments {
        function: String,
        min: usize,
        got: usize,
    },

    /// More arguments than the command's declared maximum
    #[error("{function}(): too many parameters, expected at most {max}, got {got}")]
    TooManyArguments {
        function: String,
        max: usize,
        got: usize,
    },

    /// Named zone resolution failed
    #[error("{function}(): unknown map \"{map_name}\"")]
    UnknownMap { function: String, map_name: String },

    /// Privileged command invoked without trusted status
    #[error("{function}(): you do not have permission to call this function")]
    NoPermission { function: String },

    /// Argument was not a recognized boolean token
    #[error("invalid boolean value: \"{value}\"")]
    InvalidBoolean { value: String },

    /// Registry-level failure surfaced through command execution
    #[error("zone error: {0}")]
    Zone(#[from] ZoneError),

    /// File I/O error (replay logging)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CmdError {
    /// Create a not-enough-parameters error
    pub fn too_few(function: impl Into<String>, min: usize, got: usize) -> Self {
        CmdError::TooFewArguments {
            function: function.into(),
            min,
            got,
        }
    }

    /// Create a too-many-parameters error
    pub fn too_many(function: impl Into<String>, max: usize, got: usize) -> Self {
        CmdError::TooManyArguments {
            function: function.into(),
            max,
            got,
        }
    }

    /// Create an unknown-map error
    pub fn unknown_map(function: impl Into<String>, map_name: impl Into<String>) -> Self {
        CmdError::UnknownMap {
            function: function.into(),
            map_name: map_name.into(),
        }
    }

    /// Create a no-permission error
    pub fn no_permission(function: impl Into<String>) -> Self {
        CmdError::NoPermission {
            function: function.into(),
        }
    }

    /// Create an invalid-boolean error from the offending text
    pub fn invalid_boolean(value: impl Into<String>) -> Self {
        CmdError::InvalidBoolean {
            value: value.into(),
        }
    }
}
