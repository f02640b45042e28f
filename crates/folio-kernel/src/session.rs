//! Per-terminal session state.
//!
//! A [`Session`] is what a host UI holds on to: it owns the working
//! directory, the scrollback, the command history and the input buffer that
//! history recall writes into. Nothing in here is shared between sessions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths;
use crate::shell::Shell;

/// What a scrollback record represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// The echoed prompt and input line.
    Command,
    Output,
    Error,
}

/// One rendered line of the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbackLine {
    pub kind: LineKind,
    pub text: String,
}

impl ScrollbackLine {
    pub fn command(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Command,
            text: text.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
        }
    }

    /// The empty output line that follows every result block.
    pub fn blank() -> Self {
        Self::output("")
    }
}

/// Errors creating a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("start directory {path} does not exist or is not a directory")]
    InvalidStart { path: String },
}

/// What one submission appended.
#[derive(Debug, PartialEq, Eq)]
pub struct Submission<'a> {
    /// Records added by this submission (the echoed command first), or
    /// nothing when the command cleared the screen.
    pub lines: &'a [ScrollbackLine],
    /// The scrollback was wiped.
    pub cleared: bool,
}

/// A terminal session.
#[derive(Debug)]
pub struct Session {
    shell: Arc<Shell>,
    cwd: String,
    scrollback: Vec<ScrollbackLine>,
    history: Vec<String>,
    history_cursor: Option<usize>,
    input: String,
}

impl Session {
    /// Start a session at `start`, or `/` when not given.
    ///
    /// A relative start path is taken relative to `/`. It must name a
    /// directory.
    pub fn new(shell: Arc<Shell>, start: Option<&str>) -> Result<Self, SessionError> {
        let cwd = paths::normalize(paths::ROOT, start);
        if shell.vfs().resolve_dir(&cwd).is_none() {
            return Err(SessionError::InvalidStart { path: cwd });
        }
        tracing::info!(cwd = %cwd, "session opened");
        Ok(Self {
            shell,
            cwd,
            scrollback: Vec::new(),
            history: Vec::new(),
            history_cursor: None,
            input: String::new(),
        })
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Prompt shown before input, e.g. `/about$ `.
    pub fn prompt(&self) -> String {
        format!("{}$ ", self.cwd)
    }

    pub fn scrollback(&self) -> &[ScrollbackLine] {
        &self.scrollback
    }

    /// Submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Position of the recall cursor, if recall is active.
    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input buffer (the host calls this as the user types).
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Submit a line of input.
    ///
    /// Blank lines are ignored and return `None`. Otherwise the prompt and
    /// line are echoed, the line is added to history, the command runs and
    /// its output is appended (or the scrollback wiped, for `clear`). The
    /// recall cursor and input buffer are reset either way.
    pub fn submit(&mut self, line: &str) -> Option<Submission<'_>> {
        if line.trim().is_empty() {
            return None;
        }

        self.history_cursor = None;
        self.input.clear();

        let start = self.scrollback.len();
        let echo = format!("{}{}", self.prompt(), line);
        self.scrollback.push(ScrollbackLine::command(echo));
        self.history.push(line.to_string());

        let exec = self.shell.execute(&self.cwd, line);
        self.cwd = exec.cwd;

        if exec.cleared {
            self.scrollback.clear();
            return Some(Submission {
                lines: &[],
                cleared: true,
            });
        }

        self.scrollback.extend(exec.lines);
        Some(Submission {
            lines: &self.scrollback[start..],
            cleared: false,
        })
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Option<Submission<'_>> {
        let line = std::mem::take(&mut self.input);
        self.submit(&line)
    }

    /// Step back through history, loading the entry into the input buffer.
    ///
    /// The first call jumps to the most recent entry; later calls move one
    /// step older and stop at the oldest. Returns the buffer, or `None` when
    /// there's no history.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.history.len().checked_sub(1)?;
        let cursor = match self.history_cursor {
            None => last,
            Some(pos) => pos.saturating_sub(1),
        };
        self.history_cursor = Some(cursor);
        self.input = self.history[cursor].clone();
        Some(&self.input)
    }

    /// Step forward through history.
    ///
    /// Moving past the newest entry clears the input buffer and ends recall.
    /// Does nothing when recall isn't active.
    pub fn recall_next(&mut self) -> &str {
        if let Some(pos) = self.history_cursor {
            let next = pos + 1;
            if next >= self.history.len() {
                self.history_cursor = None;
                self.input.clear();
            } else {
                self.history_cursor = Some(next);
                self.input = self.history[next].clone();
            }
        }
        &self.input
    }
}
