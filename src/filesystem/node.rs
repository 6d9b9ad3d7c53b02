use std::collections::BTreeMap;

use derive_more::IsVariant;
use tracing::debug;

/// A single entry of the tree. Parents own their children, so the tree has no
/// cycles and no shared subtrees.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Node {
    File(File),
    Directory(Directory),
}

impl Node {
    /// Pairs the node with the name its parent stores it under.
    pub fn named<'a>(&'a self, name: &'a str) -> Resolved<'a> {
        match self {
            Node::File(file) => Resolved::File { name, file },
            Node::Directory(directory) => Resolved::Directory { name, directory },
        }
    }
}

/// Append-only text content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    content: String,
}

impl File {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn append(&mut self, content: &str) {
        self.content.push_str(content);
    }
}

/// Children keyed by name, iterated in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Directory {
    children: BTreeMap<String, Node>,
}

impl Directory {
    pub fn names(&self) -> Vec<String> {
        self.children.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Looks up a child and returns it named by the stored key.
    pub fn entry(&self, name: &str) -> Option<Resolved<'_>> {
        self.children
            .get_key_value(name)
            .map(|(name, node)| node.named(name))
    }

    /// Returns the child directory `name`, creating it when missing. `None` if a file holds it.
    pub fn ensure_dir(&mut self, name: &str) -> Option<&mut Directory> {
        let child = self.children.entry(name.to_string()).or_insert_with(|| {
            debug!("Creating directory '{}'", name);
            Node::Directory(Directory::default())
        });
        match child {
            Node::Directory(directory) => Some(directory),
            Node::File(_) => None,
        }
    }

    /// Returns the child file `name`, creating it when missing. `None` if a directory holds it.
    pub fn ensure_file(&mut self, name: &str) -> Option<&mut File> {
        let child = self.children.entry(name.to_string()).or_insert_with(|| {
            debug!("Creating file '{}'", name);
            Node::File(File::default())
        });
        match child {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}

/// A node reached by read-only resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Resolved<'a> {
    File { name: &'a str, file: &'a File },
    Directory { name: &'a str, directory: &'a Directory },
}

impl<'a> Resolved<'a> {
    /// Name under which the parent stores this node. Empty for the root.
    pub fn name(&self) -> &'a str {
        match self {
            Resolved::File { name, .. } | Resolved::Directory { name, .. } => *name,
        }
    }

    /// A directory lists its children, a file lists only itself.
    pub fn ls(&self) -> Vec<String> {
        match self {
            Resolved::File { name, .. } => vec![name.to_string()],
            Resolved::Directory { directory, .. } => directory.names(),
        }
    }
}
