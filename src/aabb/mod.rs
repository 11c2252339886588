//! Axis Aligned Bounding Boxes.

mod aabb_impl;
mod intersection;
mod transform;

pub use aabb_impl::*;
pub use intersection::*;

use crate::scalar::AabbValue;

/// A trait implemented by things that may or may not intersect an AABB.
pub trait IntersectsAabb<T: AabbValue, const D: usize> {
    /// Returns whether this object intersects an [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::{Aabb, IntersectsAabb};
    /// use nalgebra::Point3;
    ///
    /// struct XyPlane;
    ///
    /// impl IntersectsAabb<f32, 3> for XyPlane {
    ///     fn intersects_aabb(&self, aabb: &Aabb<f32, 3>) -> bool {
    ///         aabb.min[2] <= 0.0 && aabb.max[2] >= 0.0
    ///     }
    /// }
    ///
    /// let xy_plane = XyPlane;
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    /// assert!(xy_plane.intersects_aabb(&aabb));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    fn intersects_aabb(&self, aabb: &Aabb<T, D>) -> bool;
}
