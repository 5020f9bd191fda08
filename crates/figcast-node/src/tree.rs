//! Tree index over a fetched node tree.
//!
//! Detectors scan a flattened, depth-first pre-order copy of the tree
//! because layout patterns (a label above an input) are not
//! necessarily parent/child in the original structure. Generators
//! still need the real structure for some decisions, so the index
//! keeps both: the flat ordered list and id → parent links.

use crate::model::DesignNode;
use std::collections::HashMap;

/// Flatten a subtree into `out` in depth-first pre-order.
pub fn flatten<'a>(node: &'a DesignNode, out: &mut Vec<&'a DesignNode>) {
    out.push(node);
    for child in &node.children {
        flatten(child, out);
    }
}

/// Index over one or more root nodes: the derived flat list plus
/// parent/child links by id. Built once per generation pass.
pub struct NodeIndex<'a> {
    flat: Vec<&'a DesignNode>,
    by_id: HashMap<&'a str, &'a DesignNode>,
    parents: HashMap<&'a str, &'a str>,
}

impl<'a> NodeIndex<'a> {
    pub fn build(roots: &'a [DesignNode]) -> Self {
        let mut flat = Vec::new();
        for root in roots {
            flatten(root, &mut flat);
        }

        let mut by_id = HashMap::new();
        let mut parents = HashMap::new();
        for node in &flat {
            by_id.insert(node.id.as_str(), *node);
            for child in &node.children {
                parents.insert(child.id.as_str(), node.id.as_str());
            }
        }

        Self {
            flat,
            by_id,
            parents,
        }
    }

    /// The depth-first pre-order flattened node list.
    pub fn flat(&self) -> &[&'a DesignNode] {
        &self.flat
    }

    pub fn get(&self, id: &str) -> Option<&'a DesignNode> {
        self.by_id.get(id).copied()
    }

    pub fn parent_of(&self, id: &str) -> Option<&'a DesignNode> {
        self.parents.get(id).and_then(|pid| self.get(pid))
    }
}
