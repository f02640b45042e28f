//! folio-kernel: the core of the folio portfolio terminal.
//!
//! This crate provides:
//!
//! - **VFS**: an immutable tree of directories and files, built once from a
//!   declarative description
//! - **Paths**: the string-level resolver that turns `cwd` + argument into an
//!   absolute path
//! - **Commands**: the builtin command set and the registry that dispatches
//!   a verb to its handler
//! - **Shell / Session**: the shared, read-only shell and the per-terminal
//!   session state (cwd, scrollback, history, recall cursor)
//!
//! Everything here is synchronous. A host UI owns rendering and input; it
//! talks to a [`Session`] and nothing else.

pub mod clock;
pub mod commands;
pub mod error;
pub mod paths;
pub mod session;
pub mod shell;
pub mod vfs;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorKind, ShellError};
pub use session::{LineKind, ScrollbackLine, Session, SessionError, Submission};
pub use shell::{Execution, Shell};
pub use vfs::{Node, Vfs, VfsError};
