//! Execution context for commands.

use crate::clock::Clock;
use crate::paths;
use crate::vfs::{Node, Vfs, VfsError};

use super::CommandRegistry;

/// Positional arguments after the verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    pub positional: Vec<String>,
}

impl CommandArgs {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The argument at `index`, if supplied.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}

/// Everything a command may read while it runs.
pub struct ExecContext<'a> {
    /// The filesystem.
    pub vfs: &'a Vfs,
    /// Current working directory, absolute.
    pub cwd: &'a str,
    /// Time source for `date`.
    pub clock: &'a dyn Clock,
    /// The registry this command was dispatched from.
    pub commands: &'a CommandRegistry,
}

impl<'a> ExecContext<'a> {
    /// Resolve a path argument relative to cwd.
    pub fn resolve_path(&self, target: Option<&str>) -> String {
        paths::normalize(self.cwd, target)
    }

    /// The node for the current working directory.
    pub fn cwd_node(&self) -> Result<&'a Node, VfsError> {
        self.vfs.resolve(self.cwd)
    }
}
