// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadleaf Tree: a dynamic AABB tree for 2D broad-phase collision queries.
//!
//! The tree organizes axis-aligned bounding boxes into a balanced binary
//! hierarchy of bounding volumes so that "which stored boxes might overlap
//! this one" is answered in roughly logarithmic time instead of testing
//! every pair.
//!
//! - Leaves wrap one caller-supplied key each; internal nodes carry the
//!   merge of their children's boxes and no payload.
//! - Insertion walks down from the root using a surface-area cost heuristic
//!   to pick an attachment point, then re-derives ancestor boxes upward.
//! - Removal re-links the removed leaf's sibling into its grandparent and
//!   discards exactly one internal node.
//! - Queries prune whole subtrees whose bounding volume does not overlap
//!   the test box, with no false negatives.
//!
//! Entries are identified by a caller-assigned key (`K: Copy + Eq + Hash`),
//! not by coordinates: two keys with identical boxes are distinct entries,
//! and inserting the same key twice fails with
//! [`TreeError::AlreadyInTree`].
//!
//! This is a broad phase only. The tree never inspects geometry beyond the
//! bounding boxes handed to it; exact shape tests belong to the caller.
//! There is no incremental move operation: when an object moves, remove it
//! and insert its translated box.
//!
//! # Example
//!
//! ```rust
//! use broadleaf_aabb::Aabb;
//! use broadleaf_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert("player", Aabb::new(0.0, 0.0, 1.0, 1.0)).unwrap();
//! tree.insert("crate", Aabb::new(0.5, 0.5, 1.5, 1.5)).unwrap();
//! tree.insert("wall", Aabb::new(10.0, 0.0, 11.0, 8.0)).unwrap();
//!
//! // Candidates overlapping the player, excluding the player itself.
//! let hits = tree.query_overlaps(&"player");
//! assert_eq!(hits, vec!["crate"]);
//!
//! // Move the player: remove, translate, reinsert.
//! let at = tree.remove(&"player").unwrap();
//! tree.insert("player", at.translate(10.0, 3.0)).unwrap();
//! assert_eq!(tree.query_overlaps(&"player"), vec!["wall"]);
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded and synchronous. The tree is not safe for concurrent
//! mutation; callers needing shared access must serialize all calls
//! externally.

mod error;
mod tree;
mod types;

pub use broadleaf_aabb::Aabb;
pub use error::TreeError;
pub use tree::Tree;
