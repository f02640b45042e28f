//! Commands: the trait every builtin implements, the context it runs in, and
//! the registry that maps verbs to handlers.

pub mod builtin;
mod context;
mod registry;
mod traits;

pub use context::{CommandArgs, ExecContext};
pub use registry::CommandRegistry;
pub use traits::{Command, CommandOutput, CommandSchema, ParamSchema};
