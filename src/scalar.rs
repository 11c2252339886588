//! This module defines the [`AabbValue`] trait, the scalar type every box, plane and segment
//! in this crate is generic over.

use nalgebra::{ClosedAddAssign, ClosedDivAssign, ClosedMulAssign, ClosedSubAssign, Scalar, SimdPartialOrd};
use num_traits::{Float, FromPrimitive};
use std::fmt::Display;

/// Floating point types that can be used as coordinates.
///
/// Besides the arithmetic bounds, each implementation fixes the constants used by the
/// sentinel conventions of this crate.
pub trait AabbValue:
    Scalar
    + Copy
    + Float
    + FromPrimitive
    + ClosedAddAssign
    + ClosedSubAssign
    + ClosedMulAssign
    + ClosedDivAssign
    + SimdPartialOrd
    + Display
{
    /// Returned by the dynamic tests ([`RaySegment::intersect_aabb`], [`Aabb::intersect_plane`],
    /// [`Aabb::intersect_moving`]) when there is no usable hit. Always greater than `1`.
    ///
    /// [`RaySegment::intersect_aabb`]: crate::ray::RaySegment::intersect_aabb
    /// [`Aabb::intersect_plane`]: crate::aabb::Aabb::intersect_plane
    /// [`Aabb::intersect_moving`]: crate::aabb::Aabb::intersect_moving
    const NO_INTERSECTION: Self;

    /// Magnitude of the bounds of an empty [`Aabb`]. Larger than any coordinate in use, small
    /// enough that sums of two of them stay finite.
    ///
    /// [`Aabb`]: crate::aabb::Aabb
    const EMPTY_EXTENT: Self;

    /// Allowed deviation of `v·v` from `1` for vectors that must be unit length.
    const UNIT_TOLERANCE: Self;
}

impl AabbValue for f32 {
    const NO_INTERSECTION: f32 = 1e30;
    const EMPTY_EXTENT: f32 = 1e37;
    const UNIT_TOLERANCE: f32 = 0.01;
}

impl AabbValue for f64 {
    const NO_INTERSECTION: f64 = 1e30;
    const EMPTY_EXTENT: f64 = 1e300;
    const UNIT_TOLERANCE: f64 = 0.01;
}

/// Returns `true` if `t` is a parametric hit inside the unit step, i.e. neither the
/// [`AabbValue::NO_INTERSECTION`] sentinel nor a hit beyond the end of the movement.
///
/// # Examples
/// ```
/// use aabbkit::scalar::{is_within_step, AabbValue};
///
/// assert!(is_within_step(0.5f32));
/// assert!(!is_within_step(1.5f32));
/// assert!(!is_within_step(f32::NO_INTERSECTION));
/// ```
#[inline]
pub fn is_within_step<T: AabbValue>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}
