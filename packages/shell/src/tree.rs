//! The directory tree the shell navigates.
//!
//! A tree is a nested map of named nodes. Every node is either a directory
//! holding more nodes or a file holding text. The root is always a directory.

use std::collections::BTreeMap;

/// Name of the root entry the fetched posts are grafted under.
pub const BLOG: &str = "blog";

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(BTreeMap<String, Node>),
    File(String),
}

impl Node {
    /// An empty directory.
    pub fn directory() -> Self {
        Node::Directory(BTreeMap::new())
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File(content.into())
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// The entries of a directory, or `None` for a file.
    pub fn entries(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Directory(entries) => Some(entries),
            Node::File(_) => None,
        }
    }

    fn entries_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Node::Directory(entries) => Some(entries),
            Node::File(_) => None,
        }
    }
}

/// The whole navigable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// A tree with an empty root directory.
    pub fn new() -> Self {
        Self {
            root: Node::directory(),
        }
    }

    /// Build a tree from `(path, content)` pairs.
    ///
    /// Paths are `/`-separated and relative to the root; intermediate
    /// directories are created as needed.
    pub fn from_table(table: &[(&str, &str)]) -> Self {
        let mut tree = Self::new();
        for (path, content) in table {
            tree.insert_file(path, *content);
        }
        tree
    }

    /// Insert a file, creating parent directories on the way.
    ///
    /// A file standing where a parent directory is needed is replaced by
    /// that directory.
    pub fn insert_file(&mut self, path: &str, content: impl Into<String>) {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let Some(name) = segments.pop() else {
            return;
        };

        let mut node = &mut self.root;
        for segment in segments {
            let Some(entries) = node.entries_mut() else {
                return;
            };
            let child = entries
                .entry(segment.to_string())
                .or_insert_with(Node::directory);
            if child.is_file() {
                *child = Node::directory();
            }
            node = child;
        }

        if let Some(entries) = node.entries_mut() {
            entries.insert(name.to_string(), Node::file(content));
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk `path` from the root.
    ///
    /// Returns `None` when a segment is missing or the walk would descend
    /// through a file.
    pub fn resolve(&self, path: &[String]) -> Option<&Node> {
        path.iter()
            .try_fold(&self.root, |node, segment| node.entries()?.get(segment))
    }

    /// Swap in a new `blog` directory in one step.
    pub fn replace_blog(&mut self, posts: BTreeMap<String, Node>) {
        if let Some(entries) = self.root.entries_mut() {
            entries.insert(BLOG.to_string(), Node::Directory(posts));
        }
    }

    pub fn blog(&self) -> Option<&Node> {
        self.root.entries()?.get(BLOG)
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
