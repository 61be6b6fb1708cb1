//! Per-run interpreter state: current directory, scrollback, input line,
//! command history, and the open-file slot. One session per running
//! terminal; nothing here survives teardown.

use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

use crate::path;
use crate::render::RenderedLine;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenFile {
    /// The name the user typed (or clicked), not the resolved path.
    pub name: String,
    pub content: String,
}

pub struct Session {
    pub cwd: String,
    pub scrollback: Vec<RenderedLine>,
    pub input: String,
    /// Byte offset of the caret into `input`, kept on char boundaries.
    pub caret: usize,
    /// Append-only within a session.
    pub history: Vec<String>,
    /// `None` = not navigating.
    pub history_cursor: Option<usize>,
    pub open_file: Option<OpenFile>,
    pub id: Uuid,
    pub started: DateTime<Local>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            cwd: path::ROOT.to_string(),
            scrollback: Vec::new(),
            input: String::new(),
            caret: 0,
            history: Vec::new(),
            history_cursor: None,
            open_file: None,
            id: Uuid::new_v4(),
            started: Local::now(),
        }
    }

    /// Record a submitted line. Always resets navigation, even mid-history.
    pub fn push_history(&mut self, line: &str) {
        self.history.push(line.to_string());
        self.history_cursor = None;
    }

    /// History-up: jump to the most recent entry, then walk backwards,
    /// clamping at the oldest.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let ptr = match self.history_cursor {
            None => self.history.len() - 1,
            Some(p) => p.saturating_sub(1),
        };
        self.history_cursor = Some(ptr);
        self.set_input(self.history[ptr].clone());
    }

    /// History-down: walk forwards; stepping past the most recent entry
    /// leaves navigation and restores an empty buffer.
    pub fn history_next(&mut self) {
        let Some(ptr) = self.history_cursor else { return };
        let next = ptr + 1;
        if next >= self.history.len() {
            self.history_cursor = None;
            self.set_input(String::new());
        } else {
            self.history_cursor = Some(next);
            self.set_input(self.history[next].clone());
        }
    }

    /// Replace the input buffer and put the caret at the end.
    pub fn set_input(&mut self, line: String) {
        self.caret = line.len();
        self.input = line;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
