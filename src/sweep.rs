//! Swept box-box collision: a box moving along a straight displacement against a stationary one.

use nalgebra::SVector;

use crate::aabb::Aabb;
use crate::scalar::AabbValue;

impl<T: AabbValue, const D: usize> Aabb<T, D> {
    /// Returns the fraction of `displacement` at which `moving` first touches this stationary
    /// box, or [`AabbValue::NO_INTERSECTION`] if it does not touch it during the step.
    ///
    /// The time window `[0, 1]` is narrowed by every axis in turn to the interval during which
    /// the projections of both boxes overlap on that axis. An axis without motion either keeps
    /// the window unchanged or rules out contact for the whole step. Boxes already overlapping
    /// at the start yield `0`.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use aabbkit::scalar::AabbValue;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let wall = Aabb::with_bounds(Point3::new(2.0,0.0,0.0), Point3::new(3.0,1.0,1.0));
    /// let crate_box = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
    ///
    /// assert_eq!(wall.intersect_moving(&crate_box, &Vector3::new(2.0,0.0,0.0)), 0.5);
    /// assert_eq!(wall.intersect_moving(&crate_box, &Vector3::new(0.5,0.0,0.0)), f64::NO_INTERSECTION);
    /// ```
    ///
    /// [`AabbValue::NO_INTERSECTION`]: crate::scalar::AabbValue::NO_INTERSECTION
    ///
    pub fn intersect_moving(&self, moving: &Aabb<T, D>, displacement: &SVector<T, D>) -> T {
        let mut t_enter = T::zero();
        let mut t_leave = T::one();

        for i in 0..D {
            let d = displacement[i];
            if d == T::zero() {
                if self.min[i] > moving.max[i] || self.max[i] < moving.min[i] {
                    return T::NO_INTERSECTION;
                }
                continue;
            }

            let inv_d = T::one() / d;
            let mut enter = (self.min[i] - moving.max[i]) * inv_d;
            let mut leave = (self.max[i] - moving.min[i]) * inv_d;
            if enter > leave {
                std::mem::swap(&mut enter, &mut leave);
            }

            if enter > t_enter {
                t_enter = enter;
            }
            if leave < t_leave {
                t_leave = leave;
            }
            if t_enter > t_leave {
                return T::NO_INTERSECTION;
            }
        }

        t_enter
    }
}

/// Returns the fraction of `d` at which `moving` first touches `stationary`, or
/// [`AabbValue::NO_INTERSECTION`].
///
/// Shorthand for [`Aabb::intersect_moving`].
///
/// [`AabbValue::NO_INTERSECTION`]: crate::scalar::AabbValue::NO_INTERSECTION
/// [`Aabb::intersect_moving`]: crate::aabb::Aabb::intersect_moving
pub fn intersect_moving_aabb<T: AabbValue, const D: usize>(
    stationary: &Aabb<T, D>,
    moving: &Aabb<T, D>,
    d: &SVector<T, D>,
) -> T {
    stationary.intersect_moving(moving, d)
}
