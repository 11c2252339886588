//! Common utilities shared by unit tests.
#![cfg(test)]

use nalgebra::{Point, SVector};
use proptest::prelude::*;

use crate::aabb::Aabb;
use crate::ray::RaySegment;

/// A vector represented as a tuple
pub type TupleVec = (f32, f32, f32);

pub type TAabb3 = Aabb<f32, 3>;
pub type TPoint3 = Point<f32, 3>;
pub type TVector3 = SVector<f32, 3>;
pub type TSegment3 = RaySegment<f32, 3>;

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] from -1000 to 1000
/// Keeps the accumulated error of parametric tests well below unit scale
pub fn tuplevec_medium_strategy() -> impl Strategy<Value = TupleVec> {
    (-1000_f32..1000_f32, -1000_f32..1000_f32, -1000_f32..1000_f32)
}

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] from -10e10 to 10e10
/// A small enough range to prevent most fp32 errors from breaking certain tests
pub fn tuplevec_small_strategy() -> impl Strategy<Value = TupleVec> {
    (
        -10e10_f32..10e10_f32,
        -10e10_f32..10e10_f32,
        -10e10_f32..10e10_f32,
    )
}

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] from -10e30 to 10e30
/// A small enough range to prevent `f32::MAX` ranges from breaking certain tests
pub fn tuplevec_large_strategy() -> impl Strategy<Value = TupleVec> {
    (
        -10e30_f32..10e30_f32,
        -10e30_f32..10e30_f32,
        -10e30_f32..10e30_f32,
    )
}

/// Convert a `TupleVec` to a [`TPoint3`].
pub fn tuple_to_point(tpl: &TupleVec) -> TPoint3 {
    TPoint3::new(tpl.0, tpl.1, tpl.2)
}

/// Convert a `TupleVec` to a [`TVector3`].
pub fn tuple_to_vector(tpl: &TupleVec) -> TVector3 {
    TVector3::new(tpl.0, tpl.1, tpl.2)
}
