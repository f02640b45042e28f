//! Declarative tree description and the loader that turns it into nodes.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{Node, VfsError};

/// The compiled-in portfolio filesystem.
pub const PORTFOLIO_JSON: &str = include_str!("../../assets/portfolio.json");

/// Declarative shape of a tree, as written in JSON.
///
/// - a string is a file
/// - an array of strings is a file, one element per line
/// - an object is a directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TreeSpec {
    File(String),
    Lines(Vec<String>),
    Directory(BTreeMap<String, TreeSpec>),
}

/// Build a node from its description. `path` is only used in error messages.
pub(super) fn build(spec: TreeSpec, path: &str) -> Result<Node, VfsError> {
    match spec {
        TreeSpec::File(content) => Ok(Node::File { content }),
        TreeSpec::Lines(lines) => Ok(Node::File {
            content: lines.join("\n"),
        }),
        TreeSpec::Directory(entries) => {
            let mut children = BTreeMap::new();
            for (name, child) in entries {
                if name.is_empty() || name.contains('/') || name == "." || name == ".." {
                    return Err(VfsError::InvalidName {
                        parent: path.to_string(),
                        name,
                    });
                }
                let child_path = if path == "/" {
                    format!("/{name}")
                } else {
                    format!("{path}/{name}")
                };
                let node = build(child, &child_path)?;
                children.insert(name, node);
            }
            Ok(Node::Directory { children })
        }
    }
}
