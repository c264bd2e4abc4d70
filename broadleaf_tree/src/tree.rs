// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: insertion, removal, queries.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use broadleaf_aabb::Aabb;

use crate::error::TreeError;
use crate::types::{Kind, Node, NodeIdx};

/// Dynamic AABB tree over caller-keyed 2D bounding boxes.
///
/// Nodes live in an arena of slots addressed by stable indices; freed slots
/// are recycled through a free list. A key-to-leaf map keeps removal and
/// duplicate detection at a single lookup and is maintained in exact sync
/// with the reachable leaf set.
pub struct Tree<K> {
    nodes: Vec<Option<Node<K>>>,
    free_list: Vec<NodeIdx>,
    root: Option<NodeIdx>,
    leaves: HashMap<K, NodeIdx>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Debug for Tree<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .field("leaves", &self.leaves.len())
            .field("has_root", &self.root.is_some())
            .finish_non_exhaustive()
    }
}

impl<K> Tree<K> {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            root: None,
            leaves: HashMap::new(),
        }
    }

    /// Whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of entries (leaves) in the tree.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.root = None;
        self.leaves.clear();
    }

    /// Iterate the keys currently stored, in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.leaves.keys()
    }

    /// Length of the longest root-to-leaf path.
    ///
    /// 0 for an empty tree, 1 for a single-leaf tree.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut max_depth = 0;
        let mut stack = vec![(root, 1)];
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Kind::Internal { left, right } = &self.node(idx).kind {
                stack.push((*left, depth + 1));
                stack.push((*right, depth + 1));
            }
        }
        max_depth
    }

    fn node(&self, idx: NodeIdx) -> &Node<K> {
        self.nodes[idx.get()]
            .as_ref()
            .expect("dangling node index, tree is corrupted")
    }

    fn node_mut(&mut self, idx: NodeIdx) -> &mut Node<K> {
        self.nodes[idx.get()]
            .as_mut()
            .expect("dangling node index, tree is corrupted")
    }

    fn alloc(&mut self, node: Node<K>) -> NodeIdx {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx.get()] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            NodeIdx::new(self.nodes.len() - 1)
        }
    }

    fn free(&mut self, idx: NodeIdx) {
        self.nodes[idx.get()] = None;
        self.free_list.push(idx);
    }
}

impl<K: Copy + Eq + Hash + Debug> Tree<K> {
    /// Whether `key` is currently stored.
    pub fn contains(&self, key: &K) -> bool {
        self.leaves.contains_key(key)
    }

    /// The stored box for `key`, if present.
    pub fn get(&self, key: &K) -> Option<Aabb> {
        self.leaves.get(key).map(|&leaf| self.node(leaf).aabb)
    }

    /// Insert `key` with its bounding box.
    ///
    /// Fails with [`TreeError::AlreadyInTree`] if `key` is already stored,
    /// leaving the tree unchanged. Keys are identity: two distinct keys with
    /// identical boxes are separate entries.
    pub fn insert(&mut self, key: K, aabb: Aabb) -> Result<(), TreeError> {
        if self.leaves.contains_key(&key) {
            return Err(TreeError::AlreadyInTree);
        }
        let leaf = self.alloc(Node::leaf(key, aabb));
        self.insert_leaf(leaf);
        self.leaves.insert(key, leaf);
        Ok(())
    }

    /// Remove `key`, returning its stored box.
    ///
    /// Fails with [`TreeError::NotInTree`] if `key` is absent, leaving the
    /// tree unchanged.
    pub fn remove(&mut self, key: &K) -> Result<Aabb, TreeError> {
        let leaf = self.leaves.remove(key).ok_or(TreeError::NotInTree)?;
        let aabb = self.node(leaf).aabb;
        self.remove_leaf(leaf);
        self.free(leaf);
        Ok(aabb)
    }

    /// All stored keys whose box overlaps `aabb`.
    ///
    /// Overlap is strict: entries that merely share an edge with `aabb` are
    /// not reported. Result order is unspecified.
    pub fn query(&self, aabb: &Aabb) -> Vec<K> {
        self.query_excluding(aabb, None)
    }

    /// All stored keys whose box overlaps the stored box of `key`, excluding
    /// `key` itself.
    ///
    /// Returns an empty vector when the tree is empty or `key` is absent.
    /// Result order is unspecified.
    pub fn query_overlaps(&self, key: &K) -> Vec<K> {
        match self.leaves.get(key) {
            Some(&leaf) => {
                let aabb = self.node(leaf).aabb;
                self.query_excluding(&aabb, Some(key))
            }
            None => Vec::new(),
        }
    }

    fn query_excluding(&self, aabb: &Aabb, exclude: Option<&K>) -> Vec<K> {
        let mut out = Vec::new();
        let Some(root) = self.root else {
            return out;
        };
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let node = self.node(idx);
            if !node.aabb.overlaps(aabb) {
                continue;
            }
            match node.kind {
                Kind::Leaf(key) => {
                    if exclude != Some(&key) {
                        out.push(key);
                    }
                }
                Kind::Internal { left, right } => {
                    stack.push(left);
                    stack.push(right);
                }
            }
        }
        out
    }

    fn insert_leaf(&mut self, leaf: NodeIdx) {
        let Some(root) = self.root else {
            self.root = Some(leaf);
            return;
        };
        let leaf_aabb = self.node(leaf).aabb;

        // Walk down from the root, weighing the cost of pairing the new leaf
        // with the current node against descending into the cheaper child.
        let mut cursor = root;
        while let Kind::Internal { left, right } = self.node(cursor).kind {
            let current = self.node(cursor).aabb;
            let combined = current.merge(&leaf_aabb);

            let new_parent_cost = 2.0 * combined.surface_area();
            let push_down_cost = 2.0 * (combined.surface_area() - current.surface_area());

            let cost_left = self.descent_cost(left, &leaf_aabb) + push_down_cost;
            let cost_right = self.descent_cost(right, &leaf_aabb) + push_down_cost;

            if new_parent_cost < cost_left && new_parent_cost < cost_right {
                break;
            }
            // Ties descend left.
            cursor = if cost_left <= cost_right { left } else { right };
        }

        // Pair the new leaf with the chosen sibling under a fresh internal
        // node spliced into the sibling's old position.
        let sibling = cursor;
        let old_parent = self.node(sibling).parent;
        let merged = self.node(sibling).aabb.merge(&leaf_aabb);
        let new_parent = self.alloc(Node {
            aabb: merged,
            parent: old_parent,
            kind: Kind::Internal {
                left: sibling,
                right: leaf,
            },
        });
        self.node_mut(sibling).parent = Some(new_parent);
        self.node_mut(leaf).parent = Some(new_parent);

        match old_parent {
            None => self.root = Some(new_parent),
            Some(parent) => self.replace_child(parent, sibling, new_parent),
        }

        self.fix_upwards(Some(new_parent));
    }

    /// Cost of descending into `child` while carrying `leaf_aabb`: the full
    /// merged area for a leaf child, the area growth for an internal one.
    fn descent_cost(&self, child: NodeIdx, leaf_aabb: &Aabb) -> f64 {
        let node = self.node(child);
        let merged = node.aabb.merge(leaf_aabb);
        match node.kind {
            Kind::Leaf(_) => merged.surface_area(),
            Kind::Internal { .. } => merged.surface_area() - node.aabb.surface_area(),
        }
    }

    fn remove_leaf(&mut self, leaf: NodeIdx) {
        if self.root == Some(leaf) {
            self.root = None;
            return;
        }
        let parent = self
            .node(leaf)
            .parent
            .expect("non-root leaf has no parent, tree is corrupted");
        let grandparent = self.node(parent).parent;
        let sibling = self.sibling_of(leaf, parent);

        match grandparent {
            Some(grandparent) => {
                // Splice the sibling into the parent's old slot and discard
                // the parent.
                self.replace_child(grandparent, parent, sibling);
                self.node_mut(sibling).parent = Some(grandparent);
                self.free(parent);
                self.fix_upwards(Some(grandparent));
            }
            None => {
                // The parent was the root; the sibling takes its place.
                self.root = Some(sibling);
                self.node_mut(sibling).parent = None;
                self.free(parent);
            }
        }
    }

    /// The other child of `parent`. A node with a parent always has exactly
    /// one sibling; anything else is corruption.
    fn sibling_of(&self, node: NodeIdx, parent: NodeIdx) -> NodeIdx {
        match self.node(parent).kind {
            Kind::Internal { left, right } if left == node => right,
            Kind::Internal { left, right } if right == node => left,
            _ => panic!("parent does not contain the child, tree is corrupted"),
        }
    }

    fn replace_child(&mut self, parent: NodeIdx, old: NodeIdx, new: NodeIdx) {
        match &mut self.node_mut(parent).kind {
            Kind::Internal { left, .. } if *left == old => *left = new,
            Kind::Internal { right, .. } if *right == old => *right = new,
            _ => panic!("parent does not contain the child, tree is corrupted"),
        }
    }

    /// Re-derive every ancestor's box as the merge of its children, walking
    /// from `at` to the root. The only place ancestor boxes change.
    fn fix_upwards(&mut self, mut at: Option<NodeIdx>) {
        while let Some(idx) = at {
            if let Kind::Internal { left, right } = self.node(idx).kind {
                let merged = self.node(left).aabb.merge(&self.node(right).aabb);
                self.node_mut(idx).aabb = merged;
            }
            at = self.node(idx).parent;
        }
    }

    #[cfg(test)]
    fn assert_invariants(&self) {
        use std::collections::HashSet;

        let mut seen_leaves: HashSet<K> = HashSet::new();
        let mut reachable = 0_usize;
        if let Some(root) = self.root {
            assert_eq!(self.node(root).parent, None, "root must have no parent");
            let mut stack = vec![root];
            while let Some(idx) = stack.pop() {
                reachable += 1;
                let node = self.node(idx);
                match node.kind {
                    Kind::Leaf(key) => {
                        assert_eq!(
                            self.leaves.get(&key),
                            Some(&idx),
                            "index entry must point at the reachable leaf"
                        );
                        assert!(
                            seen_leaves.insert(key),
                            "each key must occupy exactly one leaf"
                        );
                    }
                    Kind::Internal { left, right } => {
                        assert_eq!(
                            self.node(left).parent,
                            Some(idx),
                            "left child must point back at its parent"
                        );
                        assert_eq!(
                            self.node(right).parent,
                            Some(idx),
                            "right child must point back at its parent"
                        );
                        let merged = self.node(left).aabb.merge(&self.node(right).aabb);
                        assert_eq!(
                            node.aabb, merged,
                            "internal box must equal the merge of its children"
                        );
                        stack.push(left);
                        stack.push(right);
                    }
                }
            }
        }
        assert_eq!(
            seen_leaves.len(),
            self.leaves.len(),
            "identity index must match the reachable leaf set exactly"
        );
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        assert_eq!(
            alive, reachable,
            "every live arena slot must be reachable from the root"
        );
        assert_eq!(
            self.nodes.len(),
            alive + self.free_list.len(),
            "every dead slot must be on the free list"
        );
    }
}
