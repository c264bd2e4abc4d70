// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena node representation.

use broadleaf_aabb::Aabb;

/// Index of a node slot in the tree's arena.
///
/// Purely internal; callers identify entries by their key, never by slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NodeIdx(u32);

impl NodeIdx {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Node indices are intentionally 32-bit."
    )]
    pub(crate) const fn new(i: usize) -> Self {
        Self(i as u32)
    }

    pub(crate) const fn get(self) -> usize {
        self.0 as usize
    }
}

/// A node is either a leaf wrapping one key or an internal pair of children.
///
/// Exactly-zero-or-two children is guaranteed by construction: there is no
/// way to represent a node with a single child.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Kind<K> {
    Leaf(K),
    Internal { left: NodeIdx, right: NodeIdx },
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Node<K> {
    /// For a leaf, the wrapped key's box; for an internal node, the merge of
    /// its children's boxes, maintained by the upward fix-up walks.
    pub(crate) aabb: Aabb,
    /// Navigational back-reference; `None` for the root.
    pub(crate) parent: Option<NodeIdx>,
    pub(crate) kind: Kind<K>,
}

impl<K> Node<K> {
    pub(crate) const fn leaf(key: K, aabb: Aabb) -> Self {
        Self {
            aabb,
            parent: None,
            kind: Kind::Leaf(key),
        }
    }
}
