//! Re-bounding of transformed boxes.

use log::trace;
use nalgebra::{Affine3, Isometry3, Point, RealField, SMatrix, SVector};

use crate::aabb::Aabb;
use crate::scalar::AabbValue;

impl<T: AabbValue, const D: usize> Aabb<T, D> {
    /// Returns the tightest [`Aabb`] containing this box after applying the affine map
    /// `p -> linear * p + translation`.
    ///
    /// Instead of transforming all `2^D` corners, every output axis starts at the translation
    /// and accumulates `linear[(i, j)]` times either `min[j]` or `max[j]`. A positive entry maps
    /// `min` to the output minimum, a negative one maps `max` to it.
    ///
    /// An empty box stays empty, whatever the transform.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::{Matrix3, Point3, Vector3};
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,2.0,3.0));
    ///
    /// // Mirror x, double z, then move up by 10.
    /// let linear = Matrix3::new(-1.0, 0.0, 0.0,
    ///                            0.0, 1.0, 0.0,
    ///                            0.0, 0.0, 2.0);
    /// let moved = aabb.transformed(&linear, &Vector3::new(0.0, 10.0, 0.0));
    ///
    /// assert_eq!(moved.min, Point3::new(-1.0, 10.0, 0.0));
    /// assert_eq!(moved.max, Point3::new(0.0, 12.0, 6.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn transformed(
        &self,
        linear: &SMatrix<T, D, D>,
        translation: &SVector<T, D>,
    ) -> Aabb<T, D> {
        if self.is_empty() {
            trace!("transforming an empty box, result stays empty");
            return Aabb::empty();
        }

        let mut min = *translation;
        let mut max = *translation;
        for i in 0..D {
            for j in 0..D {
                let m = linear[(i, j)];
                if m > T::zero() {
                    min[i] += m * self.min[j];
                    max[i] += m * self.max[j];
                } else {
                    min[i] += m * self.max[j];
                    max[i] += m * self.min[j];
                }
            }
        }

        Aabb {
            min: Point::from(min),
            max: Point::from(max),
        }
    }

    /// Replaces this [`Aabb`] with the bounds of `source` after the affine map
    /// `p -> linear * p + translation`. See [`Aabb::transformed`].
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Aabb::transformed`]: struct.Aabb.html#method.transformed
    ///
    pub fn set_to_transformed(
        &mut self,
        source: &Aabb<T, D>,
        linear: &SMatrix<T, D, D>,
        translation: &SVector<T, D>,
    ) {
        *self = source.transformed(linear, translation);
    }
}

impl<T: AabbValue + RealField> Aabb<T, 3> {
    /// Returns the tightest [`Aabb`] containing this box transformed by `transform`.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::{Affine3, Point3};
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0,-1.0,-1.0), Point3::new(1.0,1.0,1.0));
    /// assert_eq!(aabb.transformed_affine(&Affine3::identity()), aabb);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn transformed_affine(&self, transform: &Affine3<T>) -> Aabb<T, 3> {
        let matrix = transform.matrix();
        let linear = matrix.fixed_view::<3, 3>(0, 0).into_owned();
        let translation = matrix.fixed_view::<3, 1>(0, 3).into_owned();
        self.transformed(&linear, &translation)
    }

    /// Returns the tightest [`Aabb`] containing this box moved by the rigid motion `isometry`.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn transformed_isometry(&self, isometry: &Isometry3<T>) -> Aabb<T, 3> {
        let linear = isometry.rotation.to_rotation_matrix().into_inner();
        self.transformed(&linear, &isometry.translation.vector)
    }
}
