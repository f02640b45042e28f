//! The `Command` trait and its supporting types.

use crate::error::ShellError;

use super::{CommandArgs, ExecContext};

/// Description of a single command parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSchema {
    pub name: String,
    pub required: bool,
    pub description: String,
}

impl ParamSchema {
    /// A parameter the command can't run without.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: description.into(),
        }
    }

    /// A parameter with a default.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            description: description.into(),
        }
    }
}

/// Self-description of a command, used by `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSchema {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSchema>,
    /// Hidden commands work but are left out of `help`.
    pub hidden: bool,
}

impl CommandSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            hidden: false,
        }
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// Leave this command out of `help`.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Usage string, e.g. `cat <file>` or `cd [path]`.
    pub fn usage(&self) -> String {
        let mut usage = self.name.clone();
        for p in &self.params {
            if p.required {
                usage.push_str(&format!(" <{}>", p.name));
            } else {
                usage.push_str(&format!(" [{}]", p.name));
            }
        }
        usage
    }
}

/// What a successful command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Output lines, in order.
    pub lines: Vec<String>,
    /// New working directory, if the command changed it.
    pub cwd: Option<String>,
    /// The scrollback should be wiped.
    pub clear: bool,
}

impl CommandOutput {
    /// No output.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single output line.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            ..Self::default()
        }
    }

    /// Several output lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Move to a new working directory.
    pub fn change_dir(path: impl Into<String>) -> Self {
        Self {
            cwd: Some(path.into()),
            ..Self::default()
        }
    }

    /// Wipe the scrollback.
    pub fn clear_screen() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }
}

/// A shell command.
///
/// Commands are pure: they read the context and return output, never touching
/// session state directly.
pub trait Command: Send + Sync {
    /// Verb the command is invoked by, lowercase.
    fn name(&self) -> &str;

    /// Description for `help`.
    fn schema(&self) -> CommandSchema;

    /// Run the command.
    fn execute(&self, args: &CommandArgs, ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError>;
}
