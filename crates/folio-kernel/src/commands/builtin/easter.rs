//! Easter eggs. Not listed by `help`.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext};
use crate::error::ShellError;

const HACK: &[&str] = &[
    "Initializing hack sequence...",
    "Bypassing mainframe firewall... [##########] 100%",
    "Downloading more RAM... done",
    "Access granted.",
    "",
    "Just kidding. Nice try though ;)",
];

const SUDO: &[&str] = &[
    "[sudo] password for visitor:",
    "visitor is not in the sudoers file. This incident will be reported.",
];

pub struct Hack;

impl Command for Hack {
    fn name(&self) -> &str {
        "hack"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("hack", "Hack the mainframe").hidden()
    }

    fn execute(&self, _args: &CommandArgs, _ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::lines(HACK.iter().copied()))
    }
}

pub struct Sudo;

impl Command for Sudo {
    fn name(&self) -> &str {
        "sudo"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("sudo", "Become root").hidden()
    }

    fn execute(&self, _args: &CommandArgs, _ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        Ok(CommandOutput::lines(SUDO.iter().copied()))
    }
}
