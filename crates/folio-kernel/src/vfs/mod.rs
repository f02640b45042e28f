//! Virtual Filesystem (VFS) for folio.
//!
//! The VFS is a single rooted tree owned by [`Vfs`]:
//!
//! ```text
//! /
//! ├── about/
//! │   ├── bio.txt
//! │   └── contact.txt
//! ├── projects/
//! └── resume.txt
//! ```
//!
//! # Design
//!
//! Nodes are a tagged enum, so "is this a directory?" is answered by a match
//! instead of probing for a `children` field. The tree is built once from a
//! [`TreeSpec`] and exposes read access only; sessions share it behind an
//! `Arc` without any locking.

mod node;
mod tree;

pub use node::Node;
pub use tree::{TreeSpec, PORTFOLIO_JSON};

use thiserror::Error;

/// Errors from building or walking the VFS.
#[derive(Debug, Error)]
pub enum VfsError {
    /// A path segment is missing, or a non-terminal segment names a file.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// The declarative description contained an unusable entry name.
    #[error("invalid entry name {name:?} under {parent}")]
    InvalidName { parent: String, name: String },

    /// The tree description did not parse.
    #[error("invalid tree description: {0}")]
    Parse(#[from] serde_json::Error),

    /// The tree description has a file at the root.
    #[error("tree root must be a directory")]
    RootNotDirectory,
}

/// The read-only filesystem a shell operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vfs {
    root: Node,
}

impl Vfs {
    /// Build a VFS from a declarative description.
    pub fn from_spec(spec: TreeSpec) -> Result<Self, VfsError> {
        let root = tree::build(spec, "/")?;
        if !root.is_dir() {
            return Err(VfsError::RootNotDirectory);
        }
        Ok(Self { root })
    }

    /// Build a VFS from a JSON tree description.
    ///
    /// Strings (or arrays of lines) are files, objects are directories.
    pub fn from_json(json: &str) -> Result<Self, VfsError> {
        let spec: TreeSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    /// The compiled-in portfolio tree.
    pub fn portfolio() -> Result<Self, VfsError> {
        Self::from_json(PORTFOLIO_JSON)
    }

    /// The root directory node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Look up an absolute path.
    ///
    /// Walks segment by segment from the root. Empty segments are skipped,
    /// so `/`, `//` and `/about/` are all accepted.
    pub fn resolve(&self, path: &str) -> Result<&Node, VfsError> {
        let mut node = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.child(segment).ok_or_else(|| VfsError::NotFound {
                path: path.to_string(),
            })?;
        }
        tracing::trace!(path, dir = node.is_dir(), "vfs resolve");
        Ok(node)
    }

    /// Look up an absolute path that must name a directory.
    pub fn resolve_dir(&self, path: &str) -> Option<&Node> {
        self.resolve(path).ok().filter(|n| n.is_dir())
    }

    /// Absolute paths of every directory in the tree, root first.
    pub fn directories(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_dirs(&self.root, "/".to_string(), &mut out);
        out
    }
}

fn collect_dirs(node: &Node, path: String, out: &mut Vec<String>) {
    let Some(children) = node.children() else {
        return;
    };
    out.push(path.clone());
    for (name, child) in children {
        let child_path = if path == "/" {
            format!("/{name}")
        } else {
            format!("{path}/{name}")
        };
        collect_dirs(child, child_path, out);
    }
}
