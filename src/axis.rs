//! Axis enum for indexing three-dimensional structures.

use nalgebra::{Point, SVector, Scalar};
use std::fmt::{Display, Formatter, Result};
use std::ops::{Index, IndexMut};

/// An `Axis` in a three-dimensional coordinate system.
/// Used to access [`Point`]/[`SVector`] structs via index.
///
/// # Examples
/// ```
/// use aabbkit::axis::Axis;
///
/// let mut position = [1.0, 0.5, 42.0];
/// position[Axis::Y] *= 4.0;
///
/// assert_eq!(position[Axis::Y], 2.0);
/// ```
///
/// [`Point`] and [`SVector`] are also indexable using `Axis`.
///
/// ```
/// use aabbkit::axis::Axis;
/// use nalgebra::Point3;
///
/// let mut position = Point3::new(1.0, 2.0, 3.0);
/// position[Axis::X] = 1000.0;
///
/// assert_eq!(position[Axis::X], 1000.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Index of the X axis.
    X = 0,

    /// Index of the Y axis.
    Y = 1,

    /// Index of the Z axis.
    Z = 2,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the `Axis` with the given index, or `None` for indices above `2`.
    pub fn from_index(index: usize) -> Option<Axis> {
        Axis::ALL.get(index).copied()
    }

    /// Returns the index of this `Axis`.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Display implementation for `Axis`.
impl Display for Axis {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}

/// Make slices indexable by `Axis`.
impl<T> Index<Axis> for [T] {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self[axis as usize]
    }
}

/// Make slices mutably accessible by `Axis`.
impl<T> IndexMut<Axis> for [T] {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self[axis as usize]
    }
}

/// Make [`Point`] indexable by `Axis`.
impl<T: Scalar, const D: usize> Index<Axis> for Point<T, D> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.coords[axis as usize]
    }
}

/// Make [`Point`] mutably accessible by `Axis`.
impl<T: Scalar, const D: usize> IndexMut<Axis> for Point<T, D> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.coords[axis as usize]
    }
}

/// Make [`SVector`] indexable by `Axis`.
impl<T: Scalar, const D: usize> Index<Axis> for SVector<T, D> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self[axis as usize]
    }
}

/// Make [`SVector`] mutably accessible by `Axis`.
impl<T: Scalar, const D: usize> IndexMut<Axis> for SVector<T, D> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self[axis as usize]
    }
}

#[cfg(test)]
mod test {
    use crate::axis::Axis;
    use crate::testbase::{TPoint3, TVector3};
    use proptest::prelude::*;

    #[test]
    fn test_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Z.to_string(), "z");
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Axis::from_index(1), Some(Axis::Y));
        assert_eq!(Axis::from_index(3), None);
        assert_eq!(Axis::Z.index(), 2);
    }

    proptest! {
        // Test whether accessing arrays by index is the same as accessing them by `Axis`.
        #[test]
        fn test_index_by_axis(tpl: (f32, f32, f32)) {
            let a: [f32; 3] = [tpl.0, tpl.1, tpl.2];

            assert!((a[0] - a[Axis::X]).abs() < f32::EPSILON && (a[1] - a[Axis::Y]).abs() < f32::EPSILON && (a[2] - a[Axis::Z]).abs() < f32::EPSILON);
        }

        // Test whether arrays can be mutably set, by indexing via `Axis`.
        #[test]
        fn test_set_by_axis(tpl: (f32, f32, f32)) {
            let mut a = [0.0f32; 3];

            a[Axis::X] = tpl.0;
            a[Axis::Y] = tpl.1;
            a[Axis::Z] = tpl.2;

            assert!((a[0] - tpl.0).abs() < f32::EPSILON && (a[1] - tpl.1).abs() < f32::EPSILON && (a[2] - tpl.2).abs() < f32::EPSILON);
        }

        // Test whether slices index the same elements by `Axis` as the arrays they borrow.
        #[test]
        fn test_slice_by_axis(tpl: (f32, f32, f32)) {
            let mut a = [tpl.0, tpl.1, tpl.2];
            let s: &mut [f32] = &mut a;
            s[Axis::Y] = 7.0;

            assert_eq!(s[Axis::Y], 7.0);
            assert!(s[Axis::Z] == tpl.2 || tpl.2.is_nan());
            assert_eq!(a[Axis::Y], 7.0);
        }

        // Test whether points and vectors index the same coordinates as arrays do.
        #[test]
        fn test_point_and_vector_by_axis(tpl: (f32, f32, f32)) {
            let p = TPoint3::new(tpl.0, tpl.1, tpl.2);
            let v = TVector3::new(tpl.0, tpl.1, tpl.2);
            for axis in Axis::ALL {
                assert!(p[axis] == p[axis.index()] || p[axis].is_nan());
                assert!(v[axis] == v[axis.index()] || v[axis].is_nan());
            }
        }
    }
}
