//! Invocation history tracking
//!
//! Stores accepted invocations for recall and navigation in an
//! interactive host.

use std::collections::VecDeque;

/// Maximum number of invocations to store in history
const DEFAULT_MAX_HISTORY: usize = 1000;

/// Invocation history for recall and navigation
#[derive(Debug)]
pub struct CommandHistory {
    /// Recorded invocations (most recent at back)
    entries: VecDeque<String>,
    /// Maximum number of entries to store
    max_size: usize,
    /// Current position for navigation (None = at end)
    position: Option<usize>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Create a new empty history
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a new history with specified capacity
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            position: None,
        }
    }

    /// Add an invocation to history
    ///
    /// Consecutive duplicates are suppressed; navigation position resets
    /// to the end.
    pub fn push(&mut self, entry: String) {
        if entry.is_empty() {
            return;
        }
        if self.entries.back().map(|s| s.as_str()) == Some(&entry) {
            self.position = None;
            return;
        }

        while self.entries.len() >= self.max_size {
            self.entries.pop_front();
        }

        self.entries.push_back(entry);
        self.position = None;
    }

    /// Get the number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// Step backwards in history (towards older entries)
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let next_pos = match self.position {
            None => self.entries.len() - 1,
            Some(0) => 0,
            Some(pos) => pos - 1,
        };
        self.position = Some(next_pos);
        self.entries.get(next_pos).map(|s| s.as_str())
    }

    /// Step forwards in history (towards newer entries)
    ///
    /// Returns `None` once navigation passes the newest entry.
    pub fn next(&mut self) -> Option<&str> {
        let pos = self.position?;
        if pos + 1 >= self.entries.len() {
            self.position = None;
            return None;
        }
        self.position = Some(pos + 1);
        self.entries.get(pos + 1).map(|s| s.as_str())
    }

    /// Clear the history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate() {
        let mut history = CommandHistory::new();
        history.push("getCurrentMapName()".to_string());
        history.push("setMapVisible(0)".to_string());

        let entries: Vec<_> = history.iter().collect();
        assert_eq!(entries, vec!["getCurrentMapName()", "setMapVisible(0)"]);
    }

    #[test]
    fn test_duplicate_suppression() {
        let mut history = CommandHistory::new();
        history.push("setMapVisible(1)".to_string());
        history.push("setMapVisible(1)".to_string());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_capacity_bound() {
        let mut history = CommandHistory::with_capacity(2);
        history.push("a()".to_string());
        history.push("b()".to_string());
        history.push("c()".to_string());

        let entries: Vec<_> = history.iter().collect();
        assert_eq!(entries, vec!["b()", "c()"]);
    }

    #[test]
    fn test_navigation() {
        let mut history = CommandHistory::new();
        history.push("a()".to_string());
        history.push("b()".to_string());

        assert_eq!(history.previous(), Some("b()"));
        assert_eq!(history.previous(), Some("a()"));
        assert_eq!(history.previous(), Some("a()"));
        assert_eq!(history.next(), Some("b()"));
        assert_eq!(history.next(), None);
    }
}
