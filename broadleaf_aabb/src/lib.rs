// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broadleaf AABB: the 2D axis-aligned bounding box primitive.
//!
//! This crate provides [`Aabb`], an immutable rectangle value used as the
//! common currency of the broad-phase layer:
//!
//! - [`Aabb::merge`]: componentwise union of two boxes.
//! - [`Aabb::overlaps`]: strict-inequality overlap test (edge-touching boxes
//!   do not overlap).
//! - [`Aabb::surface_area`]: relative cost metric for tree placement.
//! - [`Aabb::translate`]: shift a box by a displacement.
//!
//! All operations return new values; nothing mutates in place. The crate is
//! `no_std` and has no geometry dependencies. Higher layers (such as
//! `broadleaf_tree`) build spatial structures out of these values.
//!
//! # Example
//!
//! ```rust
//! use broadleaf_aabb::Aabb;
//!
//! let a = Aabb::new(-1.0, -1.0, 1.0, 1.0);
//! let b = Aabb::new(0.0, 0.0, 2.0, 2.0);
//!
//! assert!(a.overlaps(&b));
//! assert_eq!(a.merge(&b), Aabb::new(-1.0, -1.0, 2.0, 2.0));
//! assert_eq!(a.surface_area(), 4.0);
//!
//! // Boxes that merely share an edge do not overlap.
//! let c = Aabb::new(1.0, -1.0, 3.0, 1.0);
//! assert!(!a.overlaps(&c));
//! ```
//!
//! ## Validation
//!
//! [`Aabb::new`] does not validate its corners; a box with `min > max` on
//! either axis is representable and flows through `merge`/`surface_area`
//! without special-casing. Callers that want to fail fast can use
//! [`Aabb::try_new`], which rejects malformed corners with [`InvalidAabb`]:
//!
//! ```rust
//! use broadleaf_aabb::Aabb;
//!
//! assert!(Aabb::try_new(0.0, 0.0, 4.0, 4.0).is_ok());
//! assert!(Aabb::try_new(4.0, 0.0, 0.0, 4.0).is_err());
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are `f64` and assumed finite (no NaNs).

#![no_std]

mod aabb;

pub use aabb::{Aabb, InvalidAabb};
