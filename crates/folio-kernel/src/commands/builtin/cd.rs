//! cd — Change working directory.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext, ParamSchema};
use crate::error::ShellError;

/// Cd command: change current working directory.
pub struct Cd;

impl Command for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("cd", "Change directory (defaults to /)")
            .param(ParamSchema::optional("path", "Directory to change to"))
    }

    fn execute(&self, args: &CommandArgs, ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        let target = args.get(0);
        let resolved = ctx.resolve_path(target);
        let shown = target.unwrap_or("/").to_string();

        match ctx.vfs.resolve(&resolved) {
            Ok(node) if node.is_dir() => Ok(CommandOutput::change_dir(resolved)),
            Ok(_) => Err(ShellError::NotADirectory {
                command: "cd",
                target: shown,
            }),
            Err(_) => Err(ShellError::NoSuchFile {
                command: "cd",
                target: shown,
            }),
        }
    }
}
