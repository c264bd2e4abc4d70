// Copyright 2025 the Broadleaf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Aabb`] value type and its operations.

use thiserror::Error;

/// Axis-aligned bounding box in 2D, with `f64` coordinates.
///
/// An `Aabb` is a plain value: operations such as [`merge`](Self::merge) and
/// [`translate`](Self::translate) return new boxes rather than mutating.
/// `min_x <= max_x` and `min_y <= max_y` are expected but not enforced by
/// [`new`](Self::new); see [`try_new`](Self::try_new) for opt-in validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum x (left).
    pub min_x: f64,
    /// Minimum y (top).
    pub min_y: f64,
    /// Maximum x (right).
    pub max_x: f64,
    /// Maximum y (bottom).
    pub max_y: f64,
}

/// Error returned by [`Aabb::try_new`] when a min corner exceeds its max.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid aabb: min corner must not exceed max corner")]
pub struct InvalidAabb;

impl Aabb {
    /// Create a new AABB from min/max corners, without validation.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a new AABB, rejecting corners with `min > max` on either axis.
    pub fn try_new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, InvalidAabb> {
        let aabb = Self::new(min_x, min_y, max_x, max_y);
        if aabb.is_valid() { Ok(aabb) } else { Err(InvalidAabb) }
    }

    /// Create an AABB from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// Whether the corners are ordered (`min <= max` on both axes).
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// The union of two boxes: componentwise min of minima, max of maxima.
    ///
    /// Associative and commutative; `a.merge(&a) == a`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Whether two boxes overlap with positive area.
    ///
    /// The inequalities are strict: boxes that merely touch along an edge or
    /// at a corner are not reported as overlapping. Broad-phase consumers
    /// rely on this tie-break.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.max_x > other.min_x
            && self.min_x < other.max_x
            && self.max_y > other.min_y
            && self.min_y < other.max_y
    }

    /// The area of the box, used as a relative cost metric.
    ///
    /// Not clamped: a degenerate box yields zero and a malformed one a
    /// negative value, and both flow through cost comparisons unchanged.
    pub fn surface_area(&self) -> f64 {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    /// A copy of the box shifted by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Aabb {
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Aabb> for kurbo::Rect {
    fn from(a: Aabb) -> Self {
        Self::new(a.min_x, a.min_y, a.max_x, a.max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlapping() {
        let a = Aabb::new(0.0, 0.0, 3.0, 3.0);
        let b = Aabb::new(2.0, 0.0, 5.0, 2.0);
        assert_eq!(a.merge(&b), Aabb::new(0.0, 0.0, 5.0, 3.0));
    }

    #[test]
    fn merge_disjoint() {
        let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::new(2.0, 0.0, 3.0, 1.0);
        assert_eq!(a.merge(&b), Aabb::new(0.0, 0.0, 3.0, 1.0));
    }

    #[test]
    fn merge_contained() {
        let outer = Aabb::new(-2.0, -2.0, 2.0, 2.0);
        let inner = Aabb::new(-1.0, -1.0, 1.0, 1.0);
        assert_eq!(outer.merge(&inner), outer);
        assert_eq!(inner.merge(&outer), outer);
    }

    #[test]
    fn merge_self_is_identity() {
        let a = Aabb::new(-1.5, 0.25, 4.0, 8.0);
        assert_eq!(a.merge(&a), a);
    }

    #[test]
    fn overlaps_is_strict_on_shared_edges() {
        // A and B share the edge x = -1 with zero-width overlap.
        let a = Aabb::new(-1.0, -1.0, 1.0, 1.0);
        let b = Aabb::new(-2.0, 0.0, -1.0, 1.0);
        assert!(!a.overlaps(&b), "edge-touching boxes must not overlap");
        assert!(!b.overlaps(&a), "overlap test must be symmetric");

        let c = Aabb::new(-1.5, 0.0, -0.5, 1.0);
        assert!(a.overlaps(&c), "positive-area intersection must overlap");
        assert!(c.overlaps(&a), "overlap test must be symmetric");
    }

    #[test]
    fn overlaps_corner_touch_is_false() {
        let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::new(1.0, 1.0, 2.0, 2.0);
        assert!(!a.overlaps(&b), "corner-touching boxes must not overlap");
    }

    #[test]
    fn surface_area_unclamped() {
        assert_eq!(Aabb::new(0.0, 0.0, 3.0, 2.0).surface_area(), 6.0);
        assert_eq!(Aabb::new(1.0, 1.0, 1.0, 5.0).surface_area(), 0.0);
        // Malformed boxes produce a negative area and are not special-cased.
        assert_eq!(Aabb::new(2.0, 0.0, 0.0, 2.0).surface_area(), -4.0);
    }

    #[test]
    fn translate_shifts_both_corners() {
        let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(a.translate(2.5, -1.0), Aabb::new(2.5, -1.0, 3.5, 0.0));
        // The original is untouched.
        assert_eq!(a, Aabb::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn try_new_rejects_swapped_corners() {
        assert!(Aabb::try_new(0.0, 0.0, 4.0, 4.0).is_ok());
        assert_eq!(Aabb::try_new(4.0, 0.0, 0.0, 4.0), Err(InvalidAabb));
        assert_eq!(Aabb::try_new(0.0, 4.0, 4.0, 0.0), Err(InvalidAabb));
        // Degenerate (zero-size) boxes are valid.
        assert!(Aabb::try_new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn from_xywh_matches_corners() {
        assert_eq!(
            Aabb::from_xywh(1.0, 2.0, 3.0, 4.0),
            Aabb::new(1.0, 2.0, 4.0, 6.0)
        );
    }
}
