//! cat — Print a file from the working directory.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext, ParamSchema};
use crate::error::ShellError;

/// Cat command: print a file that is a direct child of cwd.
pub struct Cat;

impl Command for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("cat", "Print the contents of a file")
            .param(ParamSchema::required("file", "File in the current directory"))
    }

    fn execute(&self, args: &CommandArgs, ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        let Some(name) = args.get(0) else {
            return Err(ShellError::MissingOperand {
                command: "cat",
                operand: "file",
            });
        };

        let no_such_file = || ShellError::NoSuchFile {
            command: "cat",
            target: name.to_string(),
        };

        // Only direct children of cwd are visible to cat.
        let node = ctx
            .cwd_node()
            .ok()
            .and_then(|dir| dir.child(name))
            .ok_or_else(no_such_file)?;

        match node.lines() {
            Some(lines) => Ok(CommandOutput::lines(lines)),
            None => Err(ShellError::IsADirectory {
                command: "cat",
                target: name.to_string(),
            }),
        }
    }
}
