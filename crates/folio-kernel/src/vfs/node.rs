//! Tree nodes.

use std::collections::BTreeMap;

/// A directory or a file in the VFS.
///
/// A node's name is the key its parent stores it under; nodes don't know
/// their own names. Children are kept sorted so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory { children: BTreeMap<String, Node> },
    File { content: String },
}

impl Node {
    /// True for directories.
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// True for files.
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// A direct child by name. Always `None` for files.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|c| c.get(name))
    }

    /// Contents of a file, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }

    /// File contents split into display lines.
    pub fn lines(&self) -> Option<Vec<&str>> {
        self.content().map(|c| c.lines().collect())
    }

    /// Content length in bytes (0 for directories).
    pub fn size(&self) -> usize {
        self.content().map_or(0, str::len)
    }
}
