//! date — Print the current date and time.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext};
use crate::error::ShellError;

/// Date command: read the clock and print local time.
pub struct Date;

impl Command for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("date", "Print the current date and time")
    }

    fn execute(&self, _args: &CommandArgs, ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::line(ctx.clock.display_now()))
    }
}
