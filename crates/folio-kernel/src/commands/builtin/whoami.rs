//! whoami — Print the current user.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext};
use crate::error::ShellError;

/// Everyone is a visitor here.
pub const USER: &str = "visitor";

pub struct Whoami;

impl Command for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("whoami", "Print the current user")
    }

    fn execute(&self, _args: &CommandArgs, _ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::line(USER))
    }
}
