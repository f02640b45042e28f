//! clear — Wipe the scrollback.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext};
use crate::error::ShellError;

pub struct Clear;

impl Command for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("clear", "Clear the terminal")
    }

    fn execute(&self, _args: &CommandArgs, _ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::clear_screen())
    }
}
