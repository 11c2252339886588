//! This module defines a [`Plane`] and the static and dynamic tests of an [`Aabb`] against it.
//!
//! [`Aabb`]: crate::aabb::Aabb

use log::debug;
use nalgebra::{Point, SVector};

use crate::aabb::Aabb;
use crate::error::{AabbError, Result};
use crate::scalar::AabbValue;
use crate::utils::is_unit;

/// A plane given by a unit normal `n` and an offset `d`. A point `p` lies on the plane if
/// `p·n = d`, in front of it if `p·n > d` and behind it if `p·n < d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<T: AabbValue, const D: usize> {
    normal: SVector<T, D>,
    d: T,
}

impl<T: AabbValue, const D: usize> Plane<T, D> {
    /// Creates a [`Plane`] from its unit `normal` and offset `d`.
    ///
    /// Returns [`AabbError::NonUnitNormal`] if `normal` is not unit length.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::plane::Plane;
    /// use aabbkit::AabbError;
    /// use nalgebra::Vector3;
    ///
    /// let plane = Plane::new(Vector3::new(0.0, 0.0, 1.0), 2.0).unwrap();
    /// assert_eq!(plane.d(), 2.0);
    ///
    /// let error = Plane::new(Vector3::new(0.0, 0.0, 2.0), 2.0).unwrap_err();
    /// assert_eq!(error, AabbError::NonUnitNormal { length_squared: 4.0 });
    /// ```
    ///
    /// [`Plane`]: struct.Plane.html
    /// [`AabbError::NonUnitNormal`]: crate::AabbError::NonUnitNormal
    pub fn new(normal: SVector<T, D>, d: T) -> Result<Plane<T, D>> {
        if !is_unit(&normal) {
            let length_squared = normal.dot(&normal).to_f64().unwrap_or(f64::NAN);
            debug!("rejecting plane normal {} with n·n = {}", normal.transpose(), length_squared);
            return Err(AabbError::NonUnitNormal { length_squared });
        }
        Ok(Plane { normal, d })
    }

    /// Creates the [`Plane`] with unit `normal` passing through `point`.
    ///
    /// [`Plane`]: struct.Plane.html
    pub fn from_point_normal(point: &Point<T, D>, normal: SVector<T, D>) -> Result<Plane<T, D>> {
        let d = normal.dot(&point.coords);
        Plane::new(normal, d)
    }

    /// The unit normal of this plane.
    pub fn normal(&self) -> &SVector<T, D> {
        &self.normal
    }

    /// The offset of this plane along its normal.
    pub fn d(&self) -> T {
        self.d
    }

    /// Signed distance from `point` to this plane, positive in front of it.
    pub fn signed_distance(&self, point: &Point<T, D>) -> T {
        self.normal.dot(&point.coords) - self.d
    }
}

/// Where an [`Aabb`] lies relative to a [`Plane`].
///
/// [`Aabb`]: crate::aabb::Aabb
/// [`Plane`]: struct.Plane.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum PlaneSide {
    /// The box is completely behind the plane. It may touch it.
    Behind = -1,
    /// The box has points strictly on both sides of the plane.
    Straddling = 0,
    /// The box is completely in front of the plane. It may touch it.
    Front = 1,
}

impl PlaneSide {
    /// Returns `-1`, `0` or `+1` for [`PlaneSide::Behind`], [`PlaneSide::Straddling`] and
    /// [`PlaneSide::Front`].
    pub fn signum(self) -> i8 {
        self as i8
    }
}

impl<T: AabbValue, const D: usize> Aabb<T, D> {
    /// Returns the smallest and largest value of `p·normal` over all points `p` of this box.
    ///
    /// Per axis, the sign of the normal component decides whether `min` or `max` belongs to
    /// the extreme vertex, so no vertex has to be enumerated.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,2.0,3.0));
    /// assert_eq!(aabb.support_distances(&Vector3::new(1.0, -1.0, 0.0)), (-2.0, 1.0));
    /// ```
    pub fn support_distances(&self, normal: &SVector<T, D>) -> (T, T) {
        let mut min_d = T::zero();
        let mut max_d = T::zero();
        for i in 0..D {
            if normal[i] > T::zero() {
                min_d += normal[i] * self.min[i];
                max_d += normal[i] * self.max[i];
            } else {
                min_d += normal[i] * self.max[i];
                max_d += normal[i] * self.min[i];
            }
        }
        (min_d, max_d)
    }

    /// Classifies this box against a stationary `plane`.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use aabbkit::plane::{Plane, PlaneSide};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
    /// let up = Vector3::new(0.0, 0.0, 1.0);
    ///
    /// assert_eq!(aabb.classify_plane(&Plane::new(up, 2.0).unwrap()), PlaneSide::Behind);
    /// assert_eq!(aabb.classify_plane(&Plane::new(up, 0.5).unwrap()), PlaneSide::Straddling);
    /// assert_eq!(aabb.classify_plane(&Plane::new(up, -1.0).unwrap()).signum(), 1);
    /// ```
    pub fn classify_plane(&self, plane: &Plane<T, D>) -> PlaneSide {
        let (min_d, max_d) = self.support_distances(&plane.normal);
        if min_d >= plane.d {
            PlaneSide::Front
        } else if max_d <= plane.d {
            PlaneSide::Behind
        } else {
            PlaneSide::Straddling
        }
    }

    /// Sweeps this box along the unit direction `dir` against the front face of a stationary
    /// `plane` and returns the distance travelled until it first touches the plane.
    ///
    /// Returns `Ok(NO_INTERSECTION)` if the box moves away from or parallel to the front face,
    /// or if it is already completely behind the plane. Returns `Ok(0)` if it already
    /// straddles the plane. The result is not clamped to a unit step, callers compare it
    /// against the length of their movement.
    ///
    /// Returns [`AabbError::NonUnitDirection`] if `dir` is not unit length.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use aabbkit::plane::Plane;
    /// use aabbkit::scalar::AabbValue;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
    /// let floor = Plane::new(Vector3::new(0.0, 0.0, 1.0), -2.0).unwrap();
    ///
    /// assert_eq!(aabb.intersect_plane(&floor, &Vector3::new(0.0, 0.0, -1.0)), Ok(2.0));
    /// assert_eq!(aabb.intersect_plane(&floor, &Vector3::new(0.0, 0.0, 1.0)), Ok(f64::NO_INTERSECTION));
    /// ```
    ///
    /// [`AabbError::NonUnitDirection`]: crate::AabbError::NonUnitDirection
    pub fn intersect_plane(&self, plane: &Plane<T, D>, dir: &SVector<T, D>) -> Result<T> {
        if !is_unit(dir) {
            let length_squared = dir.dot(dir).to_f64().unwrap_or(f64::NAN);
            debug!("rejecting sweep direction {} with dir·dir = {}", dir.transpose(), length_squared);
            return Err(AabbError::NonUnitDirection { length_squared });
        }

        // Only movement against the front face can hit it.
        let approach = plane.normal.dot(dir);
        if approach >= T::zero() {
            return Ok(T::NO_INTERSECTION);
        }

        let (min_d, max_d) = self.support_distances(&plane.normal);
        if max_d <= plane.d {
            return Ok(T::NO_INTERSECTION);
        }

        // min_d belongs to the vertex leading the movement.
        let t = (plane.d - min_d) / approach;
        if t < T::zero() {
            return Ok(T::zero());
        }
        Ok(t)
    }
}

#[cfg(test)]
mod tests {
    use super::{Plane, PlaneSide};
    use crate::error::AabbError;
    use crate::scalar::AabbValue;
    use crate::testbase::{
        tuple_to_point, tuple_to_vector, tuplevec_small_strategy, TAabb3, TPoint3, TVector3,
    };

    use float_eq::assert_float_eq;
    use proptest::prelude::*;

    fn unit_box() -> TAabb3 {
        TAabb3::with_bounds(TPoint3::new(0.0, 0.0, 0.0), TPoint3::new(1.0, 1.0, 1.0))
    }

    fn up_plane(d: f32) -> Plane<f32, 3> {
        Plane::new(TVector3::new(0.0, 0.0, 1.0), d).unwrap()
    }

    #[test]
    fn test_classify_unit_box() {
        let aabb = unit_box();
        assert_eq!(aabb.classify_plane(&up_plane(2.0)), PlaneSide::Behind);
        assert_eq!(aabb.classify_plane(&up_plane(2.0)).signum(), -1);
        assert_eq!(aabb.classify_plane(&up_plane(0.5)), PlaneSide::Straddling);
        assert_eq!(aabb.classify_plane(&up_plane(0.5)).signum(), 0);
        assert_eq!(aabb.classify_plane(&up_plane(-1.0)), PlaneSide::Front);
    }

    #[test]
    fn test_classify_touching_planes() {
        let aabb = unit_box();
        // Touching the bottom face from below counts as in front.
        assert_eq!(aabb.classify_plane(&up_plane(0.0)), PlaneSide::Front);
        // Touching the top face from above counts as behind.
        assert_eq!(aabb.classify_plane(&up_plane(1.0)), PlaneSide::Behind);
    }

    #[test]
    fn test_classify_negative_normal() {
        let aabb = unit_box();
        let down = Plane::new(TVector3::new(0.0, 0.0, -1.0), -0.5).unwrap();
        assert_eq!(aabb.classify_plane(&down), PlaneSide::Straddling);
        let down = Plane::new(TVector3::new(0.0, 0.0, -1.0), -2.0).unwrap();
        assert_eq!(aabb.classify_plane(&down), PlaneSide::Front);
    }

    #[test]
    fn test_non_unit_normal_is_rejected() {
        let error = Plane::new(TVector3::new(1.0, 1.0, 0.0), 0.0).unwrap_err();
        assert_eq!(error, AabbError::NonUnitNormal { length_squared: 2.0 });
        assert!(Plane::<f32, 3>::new(TVector3::zeros(), 0.0).is_err());
    }

    #[test]
    fn test_from_point_normal() {
        let plane =
            Plane::from_point_normal(&TPoint3::new(5.0, 3.0, 7.0), TVector3::new(0.0, 1.0, 0.0))
                .unwrap();
        assert_eq!(plane.d(), 3.0);
        assert_eq!(plane.normal(), &TVector3::new(0.0, 1.0, 0.0));
        assert_eq!(plane.signed_distance(&TPoint3::new(0.0, 5.0, 0.0)), 2.0);
    }

    #[test]
    fn test_sweep_reaches_plane() {
        let aabb = unit_box();
        let floor = up_plane(-2.0);
        let t = aabb.intersect_plane(&floor, &TVector3::new(0.0, 0.0, -1.0)).unwrap();
        assert_eq!(t, 2.0);
    }

    #[test]
    fn test_sweep_diagonal_direction() {
        let aabb = unit_box();
        let floor = up_plane(-1.0);
        let dir = TVector3::new(1.0, 0.0, -1.0).normalize();
        let t = aabb.intersect_plane(&floor, &dir).unwrap();
        // The bottom face travels sqrt(2) along the diagonal to drop by one.
        assert_float_eq!(t, 2.0f32.sqrt(), abs <= 1e-5);
    }

    #[test]
    fn test_sweep_moving_away_or_parallel() {
        let aabb = unit_box();
        let floor = up_plane(-2.0);
        assert_eq!(
            aabb.intersect_plane(&floor, &TVector3::new(0.0, 0.0, 1.0)),
            Ok(f32::NO_INTERSECTION)
        );
        assert_eq!(
            aabb.intersect_plane(&floor, &TVector3::new(1.0, 0.0, 0.0)),
            Ok(f32::NO_INTERSECTION)
        );
    }

    #[test]
    fn test_sweep_already_straddling() {
        let aabb = unit_box();
        let t = aabb.intersect_plane(&up_plane(0.5), &TVector3::new(0.0, 0.0, -1.0));
        assert_eq!(t, Ok(0.0));
    }

    #[test]
    fn test_sweep_already_behind() {
        let aabb = unit_box();
        let t = aabb.intersect_plane(&up_plane(2.0), &TVector3::new(0.0, 0.0, -1.0));
        assert_eq!(t, Ok(f32::NO_INTERSECTION));
    }

    #[test]
    fn test_sweep_non_unit_direction_is_rejected() {
        let aabb = unit_box();
        let result = aabb.intersect_plane(&up_plane(-2.0), &TVector3::new(0.0, 0.0, -3.0));
        assert_eq!(result, Err(AabbError::NonUnitDirection { length_squared: 9.0 }));
    }

    proptest! {
        // Test whether the classification agrees with the signed distances of all corners.
        #[test]
        fn test_classify_matches_corners(a in tuplevec_small_strategy(),
                                         b in tuplevec_small_strategy(),
                                         n in (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0),
                                         d in -1e10f32..1e10) {
            let normal = tuple_to_vector(&n);
            prop_assume!(normal.norm() > 0.1);
            let plane = Plane::new(normal.normalize(), d).unwrap();
            let aabb = TAabb3::empty().grow(&tuple_to_point(&a)).grow(&tuple_to_point(&b));

            let (min_d, max_d) = aabb.support_distances(plane.normal());
            let dots: Vec<f32> = aabb.corners().map(|c| plane.normal().dot(&c.coords)).collect();
            assert!(dots.iter().all(|dot| *dot >= min_d && *dot <= max_d));
            assert!(dots.contains(&min_d) && dots.contains(&max_d));

            match aabb.classify_plane(&plane) {
                PlaneSide::Front => assert!(dots.iter().all(|dot| *dot >= d)),
                PlaneSide::Behind => assert!(dots.iter().all(|dot| *dot <= d)),
                PlaneSide::Straddling => {
                    assert!(dots.iter().any(|dot| *dot < d));
                    assert!(dots.iter().any(|dot| *dot > d));
                }
            }
        }

        // Test whether a box swept towards a plane in front of it stops on the plane.
        #[test]
        fn test_sweep_lands_on_plane(a in (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0),
                                     gap in 0.0f32..10.0) {
            let corner = tuple_to_point(&a);
            let aabb = TAabb3::with_bounds(corner, corner + TVector3::new(1.0, 1.0, 1.0));
            let floor = up_plane(aabb.min.z - gap);

            let t = aabb.intersect_plane(&floor, &TVector3::new(0.0, 0.0, -1.0)).unwrap();
            assert_float_eq!(t, gap, abs <= 1e-4);

            let landed = aabb.min.z - t;
            assert_float_eq!(landed, floor.d(), abs <= 1e-4);
        }
    }
}
