//! The immutable virtual file system: a flat map from absolute `~`-rooted
//! path to node, built once from a static content tree and read-only after
//! that. The interpreter only ever looks nodes up; there is no mutation API.

use std::collections::HashMap;

use thiserror::Error;

use crate::path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    /// Children are stored by name in insertion order. Display order is a
    /// separate policy applied by `children_sorted`.
    Directory { children: Vec<String> },
    File { content: String },
}

impl VfsNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }
}

/// A directory entry prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("no such node: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    /// A directory names a child that the map does not contain. Cannot
    /// happen for a tree built by `VfsBuilder`, but must never pass silently
    /// if it does.
    #[error("dangling entry {child} under {dir}")]
    Dangling { dir: String, child: String },
}

#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    nodes: HashMap<String, VfsNode>,
}

impl VirtualFileSystem {
    pub fn lookup(&self, p: &str) -> Option<&VfsNode> {
        self.nodes.get(p)
    }

    pub fn is_dir(&self, p: &str) -> bool {
        self.lookup(p).map(VfsNode::is_dir).unwrap_or(false)
    }

    /// Number of nodes in the tree, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Directory listing in display order: directories first, then files,
    /// case-sensitive lexicographic within each group. The underlying
    /// insertion order is left untouched.
    pub fn children_sorted(&self, p: &str) -> Result<Vec<DirEntry>, VfsError> {
        let children = match self.lookup(p) {
            None => return Err(VfsError::NotFound(p.to_string())),
            Some(VfsNode::File { .. }) => return Err(VfsError::NotADirectory(p.to_string())),
            Some(VfsNode::Directory { children }) => children,
        };

        let mut entries = Vec::with_capacity(children.len());
        for name in children {
            let full = path::join(p, name);
            match self.lookup(&full) {
                Some(node) => entries.push(DirEntry {
                    name: name.clone(),
                    is_dir: node.is_dir(),
                }),
                None => {
                    return Err(VfsError::Dangling {
                        dir: p.to_string(),
                        child: name.clone(),
                    })
                }
            }
        }
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }

    /// Build a tree from `(relative_path, content)` pairs, e.g.
    /// `("projects/demo.md", "# Demo")`. Intermediate directories are
    /// created on first use and linked to their parent in insertion order.
    pub fn from_files<P, C>(files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut builder = VfsBuilder::new();
        for (p, content) in files {
            builder.add_file(p.as_ref(), content.into());
        }
        builder.build()
    }
}

pub struct VfsBuilder {
    nodes: HashMap<String, VfsNode>,
}

impl VfsBuilder {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(path::ROOT.to_string(), VfsNode::Directory { children: Vec::new() });
        Self { nodes }
    }

    pub fn add_file(&mut self, relative: &str, content: String) {
        let mut parts: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let Some(file_name) = parts.pop() else { return };

        let mut cursor = path::ROOT.to_string();
        for dir_name in parts {
            let next = path::join(&cursor, dir_name);
            if !self.nodes.contains_key(&next) {
                self.nodes
                    .insert(next.clone(), VfsNode::Directory { children: Vec::new() });
            }
            self.link(&cursor, dir_name);
            cursor = next;
        }

        let full = path::join(&cursor, file_name);
        self.nodes.insert(full, VfsNode::File { content });
        self.link(&cursor, file_name);
    }

    fn link(&mut self, parent: &str, name: &str) {
        if let Some(VfsNode::Directory { children }) = self.nodes.get_mut(parent) {
            if !children.iter().any(|c| c == name) {
                children.push(name.to_string());
            }
        }
    }

    pub fn build(self) -> VirtualFileSystem {
        VirtualFileSystem { nodes: self.nodes }
    }
}

impl Default for VfsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) fn sample() -> VirtualFileSystem {
    VirtualFileSystem::from_files([
        ("about.md", "# About\n\nHello."),
        ("contact.md", "# Contact"),
        ("skills.txt", "rust, wasm"),
        ("projects/terminal.md", "# Terminal"),
        ("projects/demos/pong.md", "# Pong"),
        ("notes/todo.txt", "ship it"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_intermediate_dirs() {
        let vfs = sample();
        assert!(vfs.is_dir("~"));
        assert!(vfs.is_dir("~/projects"));
        assert!(vfs.is_dir("~/projects/demos"));
        assert!(matches!(
            vfs.lookup("~/projects/demos/pong.md"),
            Some(VfsNode::File { .. })
        ));
        assert_eq!(vfs.lookup("~/nope"), None);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let vfs = sample();
        let Some(VfsNode::Directory { children }) = vfs.lookup("~") else {
            panic!("root missing");
        };
        // raw order follows the input pairs, not the display sort
        assert_eq!(
            children,
            &["about.md", "contact.md", "skills.txt", "projects", "notes"]
        );
    }

    #[test]
    fn test_children_sorted_dirs_first_then_lexicographic() {
        let vfs = sample();
        let names: Vec<String> = vfs
            .children_sorted("~")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(
            names,
            ["notes", "projects", "about.md", "contact.md", "skills.txt"]
        );
    }

    #[test]
    fn test_children_sorted_is_stable_across_calls() {
        let vfs = sample();
        assert_eq!(vfs.children_sorted("~"), vfs.children_sorted("~"));
    }

    #[test]
    fn test_children_sorted_on_file_and_missing() {
        let vfs = sample();
        assert_eq!(
            vfs.children_sorted("~/about.md"),
            Err(VfsError::NotADirectory("~/about.md".to_string()))
        );
        assert_eq!(
            vfs.children_sorted("~/ghost"),
            Err(VfsError::NotFound("~/ghost".to_string()))
        );
    }

    #[test]
    fn test_dangling_child_is_an_error_not_a_panic() {
        let mut builder = VfsBuilder::new();
        builder.add_file("a/x.txt", "x".to_string());
        let mut vfs = builder.build();
        // sever the child by hand to simulate a broken construction
        vfs.nodes.remove("~/a/x.txt");
        assert_eq!(
            vfs.children_sorted("~/a"),
            Err(VfsError::Dangling {
                dir: "~/a".to_string(),
                child: "x.txt".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_add_links_once() {
        let mut builder = VfsBuilder::new();
        builder.add_file("a/x.txt", "one".to_string());
        builder.add_file("a/x.txt", "two".to_string());
        let vfs = builder.build();
        let Some(VfsNode::Directory { children }) = vfs.lookup("~/a") else {
            panic!("dir missing");
        };
        assert_eq!(children, &["x.txt"]);
        assert_eq!(
            vfs.lookup("~/a/x.txt"),
            Some(&VfsNode::File { content: "two".to_string() })
        );
    }
}
