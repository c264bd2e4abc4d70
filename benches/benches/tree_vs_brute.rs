// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use broadleaf_aabb::Aabb;
use broadleaf_tree::Tree;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_scattered_boxes(count: usize, world: f64, w: f64, h: f64) -> Vec<Aabb> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (world - w);
        let y0 = rng.next_f64() * (world - h);
        out.push(Aabb::from_xywh(x0, y0, w, h));
    }
    out
}

fn gen_query_boxes(count: usize, world: f64, size: f64) -> Vec<Aabb> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    for _ in 0..count {
        let x0 = rng.next_f64() * (world - size);
        let y0 = rng.next_f64() * (world - size);
        out.push(Aabb::from_xywh(x0, y0, size, size));
    }
    out
}

fn build_tree(boxes: &[Aabb]) -> Tree<u32> {
    let mut tree = Tree::new();
    for (i, b) in boxes.iter().enumerate() {
        tree.insert(i as u32, *b).expect("keys are unique");
    }
    tree
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for count in [1_000_usize, 10_000] {
        let boxes = gen_scattered_boxes(count, 2_000.0, 8.0, 8.0);
        group.bench_function(format!("insert_{count}"), |b| {
            b.iter(|| black_box(build_tree(&boxes)));
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for count in [1_000_usize, 10_000] {
        let boxes = gen_scattered_boxes(count, 2_000.0, 8.0, 8.0);
        let queries = gen_query_boxes(256, 2_000.0, 64.0);
        let tree = build_tree(&boxes);

        group.bench_function(format!("tree_{count}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for q in &queries {
                    total += tree.query(q).len();
                }
                black_box(total);
            });
        });

        group.bench_function(format!("brute_{count}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for q in &queries {
                    total += boxes.iter().filter(|bb| bb.overlaps(q)).count();
                }
                black_box(total);
            });
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    let boxes = gen_scattered_boxes(4_096, 2_000.0, 8.0, 8.0);
    group.bench_function("remove_reinsert_256", |b| {
        b.iter_batched(
            || build_tree(&boxes),
            |mut tree| {
                // Move every 16th entry: remove, translate, reinsert.
                for k in (0..4_096_u32).step_by(16) {
                    let at = tree.remove(&k).expect("key is present");
                    tree.insert(k, at.translate(16.0, -16.0))
                        .expect("key was just removed");
                }
                black_box(tree);
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_churn);
criterion_main!(benches);
