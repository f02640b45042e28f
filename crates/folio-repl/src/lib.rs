//! folio REPL — a terminal host for the folio portfolio shell.
//!
//! The kernel owns all shell state; this crate only moves lines in and out:
//!
//! - Line editing via rustyline, with Up/Down bound to the session's own
//!   history recall
//! - Rendering scrollback records as text (errors in red) or JSON lines
//! - Config file and CLI flags
//! - Meta-commands: `/help`, `/quit`

pub mod config;

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{
    Cmd, ConditionalEventHandler, Editor, Event, EventContext, EventHandler, KeyCode, KeyEvent,
    Modifiers, Movement, RepeatCount,
};

use folio_kernel::{LineKind, ScrollbackLine, Session, Shell, Submission, Vfs};

pub use config::{Cli, Config, Settings};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// REPL state: a session plus rendering options.
pub struct Repl {
    session: Arc<Mutex<Session>>,
    color: bool,
    json: bool,
}

impl Repl {
    /// Build a REPL from effective settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        let vfs = match &settings.filesystem {
            Some(path) => load_tree(path)?,
            None => Vfs::portfolio().context("built-in portfolio tree is invalid")?,
        };
        let shell = Arc::new(Shell::new(vfs));
        let session = shell
            .open_session(settings.start_dir.as_deref())
            .context("cannot open session")?;
        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            color: settings.color,
            json: settings.json,
        })
    }

    /// The underlying session.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }

    /// Prompt for the next line.
    pub fn prompt(&self) -> String {
        self.session().prompt()
    }

    /// A key handler that walks this session's history.
    pub fn recall_key(&self, direction: Recall) -> RecallKey {
        RecallKey {
            session: Arc::clone(&self.session),
            direction,
        }
    }

    /// Process a single line of input, returning what to print.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();

        if let Some(output) = self.handle_meta_command(trimmed) {
            return Ok(Some(output));
        }

        let (color, json) = (self.color, self.json);
        let mut session = self.session();
        session.set_input(line);
        match session.submit_input() {
            None => Ok(None),
            Some(sub) => render(&sub, color, json).map(Some),
        }
    }

    /// Handle a REPL meta-command. Returns `None` for anything that should go
    /// to the shell instead.
    fn handle_meta_command(&self, cmd: &str) -> Option<String> {
        match cmd {
            "/help" | "/h" | "/?" => Some(HELP_TEXT.trim_end().to_string()),
            "/history" => Some(self.session().history().join("\n")),
            _ => None,
        }
    }
}

/// Which way a recall key moves through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall {
    Previous,
    Next,
}

/// Up/Down binding backed by [`Session::recall_previous`] and
/// [`Session::recall_next`].
///
/// Rustyline's own history is never filled, so this is the only recall the
/// terminal offers.
pub struct RecallKey {
    session: Arc<Mutex<Session>>,
    direction: Recall,
}

impl RecallKey {
    /// Move the session's recall cursor and return the new input buffer.
    ///
    /// `None` means the key does nothing: no history yet, or `Next` pressed
    /// while not recalling.
    pub fn recall(&self) -> Option<String> {
        let mut session = lock(&self.session);
        match self.direction {
            Recall::Previous => session.recall_previous().map(str::to_string),
            Recall::Next => {
                session.history_cursor()?;
                Some(session.recall_next().to_string())
            }
        }
    }
}

impl ConditionalEventHandler for RecallKey {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        _ctx: &EventContext,
    ) -> Option<Cmd> {
        Some(match self.recall() {
            Some(line) => Cmd::Replace(Movement::WholeLine, Some(line)),
            None => Cmd::Noop,
        })
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// True for input that should end the REPL.
pub fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "/quit" | "/q" | "/exit" | "exit" | "logout")
}

/// Load a JSON tree description from disk.
fn load_tree(path: &Path) -> Result<Vfs> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading filesystem tree {}", path.display()))?;
    Vfs::from_json(&text).with_context(|| format!("parsing filesystem tree {}", path.display()))
}

/// Render one submission for the terminal.
///
/// In text mode the echoed command is skipped (the line editor already shows
/// it). In JSON mode every record is printed, and a clear is reported as
/// `{"cleared":true}`.
fn render(sub: &Submission<'_>, color: bool, json: bool) -> Result<String> {
    if json {
        if sub.cleared {
            return Ok(serde_json::json!({ "cleared": true }).to_string());
        }
        let lines = sub
            .lines
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .context("serializing scrollback")?;
        return Ok(lines.join("\n"));
    }

    if sub.cleared {
        return Ok(CLEAR_SCREEN.to_string());
    }

    let lines: Vec<String> = sub
        .lines
        .iter()
        .filter(|l| l.kind != LineKind::Command)
        .map(|l| render_line(l, color))
        .collect();
    Ok(lines.join("\n"))
}

fn render_line(line: &ScrollbackLine, color: bool) -> String {
    match line.kind {
        LineKind::Error if color => line.text.red().to_string(),
        _ => line.text.clone(),
    }
}

const HELP_TEXT: &str = r#"folio — a portfolio in a terminal

Type 'help' for shell commands. REPL commands:
  /help, /h, /?     Show this help
  /history          Show submitted commands
  /quit, /q, exit   Leave

Up/Down recall previous commands.
"#;

/// Run the REPL.
pub fn run(settings: Settings) -> Result<()> {
    let mut repl = Repl::new(&settings)?;

    if !settings.json {
        println!("folio v{} — type 'help' to get started, /quit to leave.\n", env!("CARGO_PKG_VERSION"));
    }

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;
    for (key, direction) in [(KeyCode::Up, Recall::Previous), (KeyCode::Down, Recall::Next)] {
        rl.bind_sequence(
            KeyEvent(key, Modifiers::NONE),
            EventHandler::Conditional(Box::new(repl.recall_key(direction))),
        );
    }

    loop {
        let prompt = repl.prompt();
        let prompt = if settings.color {
            prompt.green().bold().to_string()
        } else {
            prompt
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                if is_quit(&line) {
                    break;
                }

                match repl.process_line(&line) {
                    Ok(Some(output)) if output == CLEAR_SCREEN => {
                        print!("{output}");
                        let _ = io::stdout().flush();
                    }
                    Ok(Some(output)) => println!("{output}"),
                    Ok(None) => {}
                    Err(e) => eprintln!("Error: {e:#}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    Ok(())
}
