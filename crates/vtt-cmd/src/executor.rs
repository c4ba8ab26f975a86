//! Command executor
//!
//! Dispatches invocations from the expression engine against an injected
//! execution context.

use std::path::Path;

use crate::args::{ArgValue, CommandRequest, CommandValue};
use crate::command::{CommandContext, CommandRegistry};
use crate::error::{CmdError, CmdResult};
use crate::history::CommandHistory;
use crate::logger::CommandLogger;

/// Command executor
///
/// Owns the command registry, the invocation history, and the replay
/// logger. Execution is synchronous: lookup, arity check, dispatch, and
/// any broadcast/refresh side effects all happen on the caller's thread
/// before `execute` returns.
pub struct CommandExecutor {
    /// Command registry
    registry: CommandRegistry,
    /// Replay logger (optional)
    logger: CommandLogger,
    /// Invocation history
    history: CommandHistory,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    /// Create a new executor with built-in commands
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::with_builtins(),
            logger: CommandLogger::new(),
            history: CommandHistory::new(),
        }
    }

    /// Get a reference to the command registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Get a mutable reference to the command registry
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Get a reference to the invocation history
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Get a mutable reference to the invocation history
    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// Execute one invocation
    ///
    /// Resolves the name in the registry (alias aware), validates the
    /// argument count against the command's declared bounds, and
    /// dispatches. Arity failures are raised before the command runs, so
    /// they can never touch zone state. Accepted invocations are recorded
    /// in history and, when a log file is open, in the replay log.
    pub fn execute(
        &mut self,
        ctx: &mut CommandContext<'_>,
        name: &str,
        args: &[ArgValue],
    ) -> CmdResult<CommandValue> {
        let command = self
            .registry
            .get(name)
            .ok_or_else(|| CmdError::UnknownCommand(name.to_string()))?;

        let (min, max) = command.arity();
        if args.len() < min {
            return Err(CmdError::too_few(name, min, args.len()));
        }
        if args.len() > max {
            return Err(CmdError::too_many(name, max, args.len()));
        }

        let req = CommandRequest::from_parts(name, args);
        let result = command.execute(ctx, &req)?;

        let line = format_invocation(&req);
        self.history.push(line.clone());
        self.logger.log(&line);

        Ok(result)
    }

    /// Open a replay log file
    pub fn log_open(&mut self, path: &Path) -> CmdResult<()> {
        self.logger.log_open(path)
    }

    /// Close the replay log file
    pub fn log_close(&mut self) -> CmdResult<()> {
        self.logger.log_close()
    }
}

/// Format an invocation in macro call syntax (for history and replay)
fn format_invocation(req: &CommandRequest) -> String {
    let mut s = req.name.clone();
    s.push('(');

    for (i, value) in req.args.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        match value {
            ArgValue::String(text) => {
                s.push('"');
                s.push_str(text);
                s.push('"');
            }
            other => s.push_str(&other.to_string()),
        }
    }

    s.push(')');
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtt_zone::{Standalone, ZoneRegistry};

    fn exec(
        executor: &mut CommandExecutor,
        zones: &mut ZoneRegistry,
        name: &str,
        args: &[ArgValue],
    ) -> CmdResult<CommandValue> {
        let mut broadcast = Standalone;
        let mut display = Standalone;
        let privileges = Standalone;
        let mut ctx = CommandContext::new(zones, &mut broadcast, &mut display, &privileges)
            .with_quiet(true);
        executor.execute(&mut ctx, name, args)
    }

    #[test]
    fn test_unknown_command() {
        let mut executor = CommandExecutor::new();
        let mut zones = ZoneRegistry::new("a");

        let err = exec(&mut executor, &mut zones, "summonDragon", &[]).unwrap_err();
        assert!(matches!(err, CmdError::UnknownCommand(ref name) if name == "summonDragon"));
    }

    #[test]
    fn test_arity_bounds() {
        let mut executor = CommandExecutor::new();
        let mut zones = ZoneRegistry::new("a");

        let err = exec(&mut executor, &mut zones, "setCurrentMap", &[]).unwrap_err();
        assert!(matches!(
            err,
            CmdError::TooFewArguments { min: 1, got: 0, .. }
        ));

        let args = [ArgValue::from("a"), ArgValue::from("b")];
        let err = exec(&mut executor, &mut zones, "getCurrentMapName", &args[..1]).unwrap_err();
        assert!(matches!(
            err,
            CmdError::TooManyArguments { max: 0, got: 1, .. }
        ));

        let err = exec(&mut executor, &mut zones, "setMapVisible", &[]).unwrap_err();
        assert!(matches!(err, CmdError::TooFewArguments { min: 1, .. }));

        let args = [
            ArgValue::from("1"),
            ArgValue::from("a"),
            ArgValue::from("b"),
        ];
        let err = exec(&mut executor, &mut zones, "setMapVisible", &args).unwrap_err();
        assert!(matches!(err, CmdError::TooManyArguments { max: 2, .. }));
    }

    #[test]
    fn test_history_records_accepted_invocations() {
        let mut executor = CommandExecutor::new();
        let mut zones = ZoneRegistry::new("a");

        exec(&mut executor, &mut zones, "getCurrentMapName", &[]).unwrap();
        exec(
            &mut executor,
            &mut zones,
            "setMapVisible",
            &[ArgValue::Bool(false)],
        )
        .unwrap();

        let lines: Vec<_> = executor.history().iter().collect();
        assert_eq!(lines, vec!["getCurrentMapName()", "setMapVisible(0)"]);
    }

    #[test]
    fn test_history_skips_failed_invocations() {
        let mut executor = CommandExecutor::new();
        let mut zones = ZoneRegistry::new("a");

        let _ = exec(&mut executor, &mut zones, "setCurrentMap", &[]);
        assert!(executor.history().is_empty());
    }

    #[test]
    fn test_format_invocation_quotes_strings() {
        let req = CommandRequest::new("setMapName")
            .with_arg("Old")
            .with_arg("New");
        assert_eq!(format_invocation(&req), "setMapName(\"Old\", \"New\")");

        let req = CommandRequest::new("setMapVisible").with_arg(true);
        assert_eq!(format_invocation(&req), "setMapVisible(1)");
    }
}
