//! File System Types
//!
//! Core types for the virtual file system tree.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, '{path}'")]
    NotFound { path: String },

    #[error("ENOTDIR: not a directory, '{path}'")]
    NotDirectory { path: String },

    #[error("EISDIR: illegal operation on a directory, '{path}'")]
    IsDirectory { path: String },

    #[error("EEXIST: file already exists, '{path}'")]
    AlreadyExists { path: String },
}

/// Children of a directory, kept in insertion order.
pub type Children = IndexMap<String, Node>;

/// A directory node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    pub children: Children,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Insert or replace an entry. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        self.children.insert(name.into(), node)
    }

    /// Remove an entry, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        self.children.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Entries with type information, in insertion order.
    pub fn entries(&self) -> Vec<DirentEntry> {
        self.children
            .iter()
            .map(|(name, node)| DirentEntry {
                name: name.clone(),
                kind: node.kind(),
            })
            .collect()
    }
}

/// A regular file node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    pub content: String,
}

impl File {
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

/// A node in the tree. Directories own their children, files own their content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn empty_dir() -> Self {
        Node::Directory(Directory::new())
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File(File::new(content))
    }

    /// Check if node is a directory
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Check if node is a file
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory(_) => NodeKind::Directory,
            Node::File(_) => NodeKind::File,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}

/// Node discriminant, used for tagged listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirentEntry {
    pub name: String,
    pub kind: NodeKind,
}

impl DirentEntry {
    /// Display form: directories carry a trailing slash.
    pub fn display_name(&self) -> String {
        match self.kind {
            NodeKind::Directory => format!("{}/", self.name),
            NodeKind::File => self.name.clone(),
        }
    }
}
