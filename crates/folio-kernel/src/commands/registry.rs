//! Command registry for looking up commands by verb.

use std::collections::HashMap;
use std::sync::Arc;

use super::traits::{Command, CommandSchema};

/// Registry of available commands, in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. A command with the same name is replaced in place.
    pub fn register(&mut self, command: impl Command + 'static) {
        self.register_arc(Arc::new(command));
    }

    /// Register a command that's already in an Arc.
    pub fn register_arc(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_ascii_lowercase();
        match self.index.get(&name) {
            Some(&slot) => self.commands[slot] = command,
            None => {
                self.index.insert(name, self.commands.len());
                self.commands.push(command);
            }
        }
    }

    /// Look up a command by verb. Matching is case-insensitive.
    pub fn get(&self, verb: &str) -> Option<Arc<dyn Command>> {
        self.index
            .get(&verb.to_ascii_lowercase())
            .map(|&slot| Arc::clone(&self.commands[slot]))
    }

    /// Check if a command exists.
    pub fn contains(&self, verb: &str) -> bool {
        self.index.contains_key(&verb.to_ascii_lowercase())
    }

    /// Command names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Schemas in registration order.
    pub fn schemas(&self) -> Vec<CommandSchema> {
        self.commands.iter().map(|c| c.schema()).collect()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
