//! Command argument and result value types
//!
//! The expression engine hands every argument over as an opaque value;
//! coercion to text or boolean is this crate's job, not the caller's.

use std::fmt;

use serde::Serialize;

/// A command argument value
///
/// Arguments arrive from the expression engine as strings, numbers, or
/// booleans depending on how the macro author wrote the call.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// String value (a zone name, a delimiter, a boolean token, ...)
    String(String),
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(s) => write!(f, "{}", s),
            ArgValue::Int(i) => write!(f, "{}", i),
            ArgValue::Float(n) => write!(f, "{}", n),
            // Booleans stringify in the session's wire encoding.
            ArgValue::Bool(b) => write!(f, "{}", if *b { "1" } else { "0" }),
        }
    }
}

impl ArgValue {
    /// Try to get as a string without coercion
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to interpret as a boolean
    ///
    /// Accepts the fixed token sets `true`/`on`/`yes`/`1` and
    /// `false`/`off`/`no`/`0` (case-insensitive) and nothing else.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgValue::Bool(b) => Some(*b),
            ArgValue::Int(i) => Some(*i != 0),
            ArgValue::String(s) => match s.to_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Some(true),
                "false" | "off" | "no" | "0" => Some(false),
                _ => None,
            },
            ArgValue::Float(_) => None,
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::String(s)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Int(i)
    }
}

impl From<f64> for ArgValue {
    fn from(f: f64) -> Self {
        ArgValue::Float(f)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

/// One invocation: the command name plus its ordered argument list
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    /// The command name as invoked (may be an alias)
    pub name: String,
    /// Ordered argument values
    pub args: Vec<ArgValue>,
}

impl CommandRequest {
    /// Create a new request with no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a request from a name and an argument slice
    pub fn from_parts(name: &str, args: &[ArgValue]) -> Self {
        Self {
            name: name.to_string(),
            args: args.to_vec(),
        }
    }

    /// Add an argument
    pub fn with_arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Get the number of arguments
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Get an argument by index (0-based)
    pub fn get(&self, index: usize) -> Option<&ArgValue> {
        self.args.get(index)
    }

    /// Get an argument coerced to text
    pub fn text(&self, index: usize) -> Option<String> {
        self.get(index).map(|v| v.to_string())
    }
}

/// A command result value
///
/// Most commands return plain text. The enumeration commands return a
/// structured name list when invoked in `"json"` output mode; the host
/// encodes that list as a real JSON array at its boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommandValue {
    /// A single string value
    Text(String),
    /// An ordered list of strings
    List(Vec<String>),
}

impl CommandValue {
    /// Get the text value, if this is not a list
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CommandValue::Text(s) => Some(s),
            CommandValue::List(_) => None,
        }
    }

    /// Get the list value, if this is one
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            CommandValue::Text(_) => None,
            CommandValue::List(items) => Some(items),
        }
    }
}

impl fmt::Display for CommandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandValue::Text(s) => write!(f, "{}", s),
            CommandValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for CommandValue {
    fn from(s: &str) -> Self {
        CommandValue::Text(s.to_string())
    }
}

impl From<String> for CommandValue {
    fn from(s: String) -> Self {
        CommandValue::Text(s)
    }
}

impl From<Vec<String>> for CommandValue {
    fn from(items: Vec<String>) -> Self {
        CommandValue::List(items)
    }
}
