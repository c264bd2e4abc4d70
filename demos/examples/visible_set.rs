// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-set culling with a kurbo viewport.
//!
//! Demonstrates the `kurbo` feature of `broadleaf_aabb`: scene geometry is
//! authored as `kurbo::Rect`s, converted into `Aabb`s for indexing, and a
//! viewport rectangle selects the visible subset.
//!
//! Run:
//! - `cargo run -p broadleaf_demos --example visible_set`

use broadleaf_aabb::Aabb;
use broadleaf_tree::Tree;
use kurbo::Rect;

fn main() {
    let mut tree = Tree::new();

    // Rows of content, 40 units tall with a 10-unit gap.
    for i in 0..20_u32 {
        let y = f64::from(i) * 50.0;
        let row = Rect::new(0.0, y, 200.0, y + 40.0);
        tree.insert(i, Aabb::from(row)).expect("fresh key");
    }

    let viewport = Rect::new(0.0, 120.0, 200.0, 320.0);
    let mut visible = tree.query(&Aabb::from(viewport));
    visible.sort_unstable();
    println!("viewport {viewport:?} sees rows {visible:?}");
    assert_eq!(visible, vec![2, 3, 4, 5, 6]);

    // Round-trip the other way for rendering.
    let first = tree.get(&visible[0]).expect("row is stored");
    let rect: Rect = first.into();
    println!("first visible row as kurbo::Rect: {rect:?}");
}
