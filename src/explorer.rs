//! The directory-tree side panel: which nodes are expanded, and how clicks
//! re-enter the interpreter. Expansion is not free toggling — an accordion
//! keeps exactly one branch's ancestor chain open.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::command;
use crate::path;
use crate::session::Session;
use crate::vfs::VirtualFileSystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Dir,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    open: BTreeSet<String>,
}

impl ExplorerState {
    /// Starts with just the root expanded.
    pub fn new() -> Self {
        let mut open = BTreeSet::new();
        open.insert(path::ROOT.to_string());
        Self { open }
    }

    pub fn is_open(&self, p: &str) -> bool {
        self.open.contains(p)
    }

    pub fn open_paths(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }

    /// Accordion open: the set becomes exactly the ancestor chain of `p`
    /// plus `p` itself. Any other branch collapses.
    pub fn reveal(&mut self, p: &str) {
        self.open = path::ancestors(p).into_iter().collect();
    }

    /// Accordion close: drop `p` and everything under it; siblings and
    /// ancestors stay as they are.
    pub fn collapse(&mut self, p: &str) {
        self.open.retain(|member| !path::is_within(member, p));
    }

    pub fn toggle(&mut self, p: &str) {
        if self.is_open(p) {
            self.collapse(p);
        } else {
            self.reveal(p);
        }
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

/// A tree click. Runs the equivalent command through the one interpreter
/// entry point and, for directories, toggles expansion — both halves of one
/// atomic gesture.
pub fn navigate(
    p: &str,
    kind: NodeKind,
    session: &mut Session,
    vfs: &VirtualFileSystem,
    explorer: &mut ExplorerState,
) {
    match kind {
        NodeKind::Dir => {
            command::submit(&format!("cd {}", p), session, vfs);
            explorer.toggle(p);
        }
        NodeKind::File => {
            command::submit(&format!("cat {}", p), session, vfs);
        }
    }
}

/// The renderable tree: children are present only on expanded directories,
/// already in display order.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub open: bool,
    pub children: Vec<TreeNode>,
}

pub fn tree(vfs: &VirtualFileSystem, explorer: &ExplorerState) -> TreeNode {
    subtree(vfs, explorer, path::ROOT.to_string(), path::ROOT.to_string(), true)
}

fn subtree(
    vfs: &VirtualFileSystem,
    explorer: &ExplorerState,
    name: String,
    p: String,
    is_dir: bool,
) -> TreeNode {
    let open = is_dir && explorer.is_open(&p);
    let children = if open {
        vfs.children_sorted(&p)
            .map(|entries| {
                entries
                    .into_iter()
                    .map(|e| {
                        let child_path = path::join(&p, &e.name);
                        subtree(vfs, explorer, e.name, child_path, e.is_dir)
                    })
                    .collect()
            })
            .unwrap_or_default()
    } else {
        Vec::new()
    };
    TreeNode { name, path: p, is_dir, open, children }
}
