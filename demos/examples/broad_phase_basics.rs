// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase basics.
//!
//! Build a small tree, run overlap queries, and remove an entry.
//!
//! Run:
//! - `cargo run -p broadleaf_demos --example broad_phase_basics`

use broadleaf_aabb::Aabb;
use broadleaf_tree::Tree;

fn main() {
    let mut tree = Tree::new();
    tree.insert("player", Aabb::new(0.0, 0.0, 1.0, 2.0))
        .expect("fresh key");
    tree.insert("crate", Aabb::new(0.5, 1.0, 1.5, 2.0))
        .expect("fresh key");
    tree.insert("wall", Aabb::new(0.9, 0.0, 2.0, 4.0))
        .expect("fresh key");
    // The fence shares the player's right edge at x = 1.0; edge contact
    // alone never counts as overlap.
    tree.insert("fence", Aabb::new(1.0, 0.0, 1.2, 2.0))
        .expect("fresh key");
    tree.insert("far-rock", Aabb::new(40.0, 40.0, 42.0, 42.0))
        .expect("fresh key");

    println!("{tree:?}");
    println!("depth: {}", tree.depth());

    // Broad-phase candidates for the player; narrow-phase testing of these
    // pairs is the caller's business.
    let mut hits = tree.query_overlaps(&"player");
    hits.sort_unstable();
    println!("player may collide with: {hits:?}");
    assert_eq!(hits, vec!["crate", "wall"]);

    tree.remove(&"crate").expect("crate is present");
    assert_eq!(tree.query_overlaps(&"player"), vec!["wall"]);
    println!(
        "after removing the crate: {:?}",
        tree.query_overlaps(&"player")
    );
}
