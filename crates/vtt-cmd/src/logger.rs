//! Replay logging for accepted invocations
//!
//! Records executed commands to a file in macro call syntax so a session
//! can be replayed by the host's macro engine.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CmdResult;

/// Replay logger for recording executed commands
#[derive(Debug)]
pub struct CommandLogger {
    /// Output file writer
    writer: Option<BufWriter<File>>,
}

impl Default for CommandLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLogger {
    /// Create a new inactive logger
    pub fn new() -> Self {
        Self { writer: None }
    }

    /// Open a log file for writing
    ///
    /// Closes any previously open log file first.
    pub fn log_open(&mut self, path: &Path) -> CmdResult<()> {
        self.log_close()?;

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "# vtt-rs command log")?;

        self.writer = Some(writer);
        log::info!("Logging commands to {:?}", path);
        Ok(())
    }

    /// Log one invocation
    ///
    /// Does nothing if logging is not active.
    pub fn log(&mut self, invocation: &str) {
        if let Some(ref mut writer) = self.writer {
            if let Err(e) = writeln!(writer, "{}", invocation) {
                log::warn!("Failed to write to command log: {}", e);
            }
        }
    }

    /// Close the log file
    pub fn log_close(&mut self) -> CmdResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Check if logging is active
    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }
}

impl Drop for CommandLogger {
    fn drop(&mut self) {
        let _ = self.log_close();
    }
}
