//! open — Launch a desktop application.
//!
//! The terminal can't actually open anything; it acknowledges the apps it
//! knows about and lets the host decide what to do.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext, ParamSchema};
use crate::error::ShellError;

/// Open command: only `email` is recognized.
pub struct Open;

impl Command for Open {
    fn name(&self) -> &str {
        "open"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("open", "Open an application (try: email)")
            .param(ParamSchema::required("app", "Application to open"))
    }

    fn execute(&self, args: &CommandArgs, _ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        match args.get(0) {
            None => Err(ShellError::MissingOperand {
                command: "open",
                operand: "application",
            }),
            Some(app) if app.eq_ignore_ascii_case("email") => {
                Ok(CommandOutput::line("Opening email client..."))
            }
            Some(app) => Err(ShellError::AppNotFound { app: app.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("email")]
    #[case("EMAIL")]
    fn open_email(#[case] app: &str) {
        let fx = Fixture::new();
        let out = Open.execute(&CommandArgs::new([app]), &fx.ctx("/")).unwrap();
        assert_eq!(out.lines, vec!["Opening email client..."]);
    }

    #[test]
    fn open_unknown_app() {
        let fx = Fixture::new();
        let err = Open.execute(&CommandArgs::new(["doom"]), &fx.ctx("/")).unwrap_err();
        assert_eq!(err.to_string(), "open: doom: Application not found");
    }

    #[test]
    fn open_without_app() {
        let fx = Fixture::new();
        let err = Open.execute(&CommandArgs::default(), &fx.ctx("/")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingOperand);
        assert_eq!(err.to_string(), "open: missing application operand");
    }
}
