//! ls — List the contents of the working directory.

use crate::commands::{Command, CommandArgs, CommandOutput, CommandSchema, ExecContext};
use crate::error::{ErrorKind, ShellError};
use crate::vfs::Node;

/// Size shown for every directory.
const DIR_SIZE: usize = 4096;

/// Ls command: one long-format line per entry of cwd.
pub struct Ls;

impl Command for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> CommandSchema {
        CommandSchema::new("ls", "List files in the current directory")
    }

    fn execute(&self, _args: &CommandArgs, ctx: &ExecContext<'_>) -> Result<CommandOutput, ShellError> {
        let node = ctx.cwd_node().map_err(|_| ShellError::CannotAccessDirectory {
            command: "ls",
            kind: ErrorKind::NotFound,
        })?;
        let children = node.children().ok_or(ShellError::CannotAccessDirectory {
            command: "ls",
            kind: ErrorKind::WrongType,
        })?;

        Ok(CommandOutput::lines(
            children.iter().map(|(name, child)| format_entry(name, child)),
        ))
    }
}

/// Long-format line with fixed owner, group and timestamp.
fn format_entry(name: &str, node: &Node) -> String {
    match node {
        Node::Directory { .. } => {
            format!("drwxr-xr-x  visitor  staff  {DIR_SIZE:>5}  Jan  1 00:00  {name}/")
        }
        Node::File { .. } => format!(
            "-rw-r--r--  visitor  staff  {:>5}  Jan  1 00:00  {name}",
            node.size()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin::fixture::Fixture;

    #[test]
    fn ls_root() {
        let fx = Fixture::new();
        let out = Ls.execute(&CommandArgs::default(), &fx.ctx("/")).unwrap();
        assert_eq!(
            out.lines,
            vec![
                "drwxr-xr-x  visitor  staff   4096  Jan  1 00:00  about/",
                "drwxr-xr-x  visitor  staff   4096  Jan  1 00:00  projects/",
                "-rw-r--r--  visitor  staff      6  Jan  1 00:00  resume.txt",
            ]
        );
    }

    #[test]
    fn ls_empty_directory() {
        let fx = Fixture::new();
        let out = Ls.execute(&CommandArgs::default(), &fx.ctx("/projects/empty")).unwrap();
        assert!(out.lines.is_empty());
    }

    #[test]
    fn ls_is_idempotent() {
        let fx = Fixture::new();
        let first = Ls.execute(&CommandArgs::default(), &fx.ctx("/about")).unwrap();
        let second = Ls.execute(&CommandArgs::default(), &fx.ctx("/about")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ls_missing_cwd() {
        let fx = Fixture::new();
        let err = Ls.execute(&CommandArgs::default(), &fx.ctx("/gone")).unwrap_err();
        assert_eq!(err.to_string(), "ls: cannot access directory");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn ls_cwd_is_a_file() {
        let fx = Fixture::new();
        let err = Ls.execute(&CommandArgs::default(), &fx.ctx("/resume.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongType);
    }
}
