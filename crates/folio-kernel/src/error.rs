//! Command errors.
//!
//! Every failure a command can produce is a [`ShellError`]. Its `Display` is
//! the exact line shown to the user; [`ShellError::kind`] groups errors into
//! the four categories hosts may want to style differently.

use thiserror::Error;

/// Broad category of a command failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The verb isn't registered.
    UnknownCommand,
    /// A required argument was not supplied.
    MissingOperand,
    /// A referenced path, file or application does not exist.
    NotFound,
    /// Found a file where a directory was required, or vice versa.
    WrongType,
}

/// A recoverable, session-local command failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("{verb}: command not found")]
    UnknownCommand { verb: String },

    #[error("{command}: missing {operand} operand")]
    MissingOperand {
        command: &'static str,
        operand: &'static str,
    },

    #[error("{command}: {target}: No such file or directory")]
    NoSuchFile {
        command: &'static str,
        target: String,
    },

    /// `cd` into a file. Reported with the same wording as a missing path.
    #[error("{command}: {target}: No such file or directory")]
    NotADirectory {
        command: &'static str,
        target: String,
    },

    #[error("{command}: {target}: Is a directory")]
    IsADirectory {
        command: &'static str,
        target: String,
    },

    /// The working directory could not be listed.
    #[error("{command}: cannot access directory")]
    CannotAccessDirectory { command: &'static str, kind: ErrorKind },

    #[error("open: {app}: Application not found")]
    AppNotFound { app: String },
}

impl ShellError {
    /// Which category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::UnknownCommand { .. } => ErrorKind::UnknownCommand,
            ShellError::MissingOperand { .. } => ErrorKind::MissingOperand,
            ShellError::NoSuchFile { .. } | ShellError::AppNotFound { .. } => ErrorKind::NotFound,
            ShellError::NotADirectory { .. } | ShellError::IsADirectory { .. } => {
                ErrorKind::WrongType
            }
            ShellError::CannotAccessDirectory { kind, .. } => *kind,
        }
    }
}
