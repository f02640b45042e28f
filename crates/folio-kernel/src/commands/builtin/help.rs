//! help — List the available commands.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext};
use crate::error::ShellError;

/// Help command: list visible commands with their usage.
pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("help", "Show this list of commands")
    }

    fn execute(&self, _args: &CommandArgs, ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(
            ctx.commands
                .schemas()
                .into_iter()
                .filter(|s| !s.hidden)
                .map(|s| format!("  {:<12} {}", s.usage(), s.description)),
        );
        Ok(CommandOutput::lines(lines))
    }
}
