//! pwd — Print working directory.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext};
use crate::error::ShellError;

/// Pwd command: print the current working directory.
pub struct Pwd;

impl Command for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("pwd", "Print the working directory")
    }

    fn execute(&self, _args: &CommandArgs, ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::line(ctx.cwd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;

    #[test]
    fn pwd_prints_cwd() {
        let fx = Fixture::new();
        let out = Pwd.execute(&CommandArgs::default(), &fx.ctx("/about")).unwrap();
        assert_eq!(out.lines, vec!["/about"]);
    }
}
