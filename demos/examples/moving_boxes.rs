// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving objects through the broad phase.
//!
//! The tree has no incremental move operation: reposition an entry by
//! removing it, translating its box, and inserting it again. This demo
//! slides one box across a field of obstacles and prints the candidate
//! set at each step.
//!
//! Run:
//! - `cargo run -p broadleaf_demos --example moving_boxes`

use broadleaf_aabb::Aabb;
use broadleaf_tree::Tree;

fn main() {
    let mut tree = Tree::new();

    // A row of static obstacles every 4 units.
    for i in 0..8_u32 {
        let x = f64::from(i) * 4.0;
        tree.insert(i, Aabb::from_xywh(x, 0.0, 2.0, 2.0))
            .expect("fresh key");
    }

    // The mover starts left of the row and slides right in 1-unit steps.
    const MOVER: u32 = 1_000;
    tree.insert(MOVER, Aabb::from_xywh(-3.0, 0.5, 1.0, 1.0))
        .expect("fresh key");

    for step in 0..32 {
        let at = tree.remove(&MOVER).expect("mover is present");
        tree.insert(MOVER, at.translate(1.0, 0.0))
            .expect("mover was just removed");

        let mut hits = tree.query_overlaps(&MOVER);
        hits.sort_unstable();
        if !hits.is_empty() {
            println!("step {step:2}: overlapping obstacles {hits:?}");
        }
    }

    // Everything still accounted for after the churn.
    assert_eq!(tree.len(), 9, "no entries lost while moving");
}
