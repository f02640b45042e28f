//! Built-in commands for folio.
//!
//! These are always available. `hack` and `sudo` are easter eggs and are
//! hidden from `help`.

mod cat;
mod cd;
mod clear;
mod date;
mod easter;
mod help;
mod ls;
mod open;
mod pwd;
mod whoami;

pub use cat::Cat;
pub use cd::Cd;
pub use clear::Clear;
pub use date::Date;
pub use easter::{Hack, Sudo};
pub use help::Help;
pub use ls::Ls;
pub use open::Open;
pub use pwd::Pwd;
pub use whoami::Whoami;

use super::CommandRegistry;

/// Register all built-in commands with the registry.
///
/// Registration order is the order `help` lists them in.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Help);
    registry.register(Ls);
    registry.register(Cd);
    registry.register(Cat);
    registry.register(Pwd);
    registry.register(Clear);
    registry.register(Whoami);
    registry.register(Date);
    registry.register(Open);
    registry.register(Hack);
    registry.register(Sudo);
}
