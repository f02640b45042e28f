//! The shell: shared, read-only state plus the command-execution boundary.
//!
//! A [`Shell`] owns the VFS, the command registry and the clock. It is built
//! once, wrapped in an `Arc`, and shared by every [`Session`]. Executing a
//! line never mutates the shell; all per-terminal state lives in the session.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::commands::builtin::register_builtins;
use crate::commands::{Command, CommandArgs, CommandRegistry, ExecContext};
use crate::error::ShellError;
use crate::session::{ScrollbackLine, Session, SessionError};
use crate::vfs::Vfs;

/// Result of executing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Working directory after the command. Unchanged on failure.
    pub cwd: String,
    /// Output and error records, ending with a blank line.
    pub lines: Vec<ScrollbackLine>,
    /// The command asked for the scrollback to be wiped.
    pub cleared: bool,
}

impl Execution {
    fn unchanged(cwd: &str) -> Self {
        Self {
            cwd: cwd.to_string(),
            lines: Vec::new(),
            cleared: false,
        }
    }
}

/// Filesystem, commands and clock shared by all sessions.
pub struct Shell {
    vfs: Vfs,
    commands: CommandRegistry,
    clock: Box<dyn Clock>,
}

impl Shell {
    /// A shell over `vfs` with the builtin commands and the system clock.
    pub fn new(vfs: Vfs) -> Self {
        let mut commands = CommandRegistry::new();
        register_builtins(&mut commands);
        Self {
            vfs,
            commands,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock (tests pin it with a `FixedClock`).
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Add or replace a command.
    pub fn with_command(mut self, command: impl Command + 'static) -> Self {
        self.commands.register(command);
        self
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Open a session starting at `start` (or `/`).
    pub fn open_session(self: &Arc<Self>, start: Option<&str>) -> Result<Session, SessionError> {
        Session::new(Arc::clone(self), start)
    }

    /// Execute one line of input against `cwd`.
    ///
    /// The first whitespace-separated token is the verb, matched
    /// case-insensitively; the rest are arguments. Failures are turned into a
    /// single error line here and never escape.
    pub fn execute(&self, cwd: &str, line: &str) -> Execution {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Execution::unchanged(cwd);
        };
        let args = CommandArgs::new(tokens);

        let result = match self.commands.get(verb) {
            Some(command) => {
                let ctx = ExecContext {
                    vfs: &self.vfs,
                    cwd,
                    clock: self.clock.as_ref(),
                    commands: &self.commands,
                };
                command.execute(&args, &ctx)
            }
            None => Err(ShellError::UnknownCommand {
                verb: verb.to_string(),
            }),
        };

        match result {
            Ok(output) if output.clear => {
                tracing::debug!(verb, "clear");
                Execution {
                    cwd: cwd.to_string(),
                    lines: Vec::new(),
                    cleared: true,
                }
            }
            Ok(output) => {
                let next = output.cwd.unwrap_or_else(|| cwd.to_string());
                tracing::debug!(verb, args = args.len(), cwd = %next, lines = output.lines.len(), "executed");
                let mut lines: Vec<_> = output.lines.into_iter().map(ScrollbackLine::output).collect();
                lines.push(ScrollbackLine::blank());
                Execution {
                    cwd: next,
                    lines,
                    cleared: false,
                }
            }
            Err(err) => {
                tracing::debug!(verb, kind = ?err.kind(), "command failed: {err}");
                Execution {
                    cwd: cwd.to_string(),
                    lines: vec![ScrollbackLine::error(err.to_string()), ScrollbackLine::blank()],
                    cleared: false,
                }
            }
        }
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}
