//! Contains the `PointDistance` trait used for querying the distance from a point to a shape.
use crate::aabb::Aabb;
use crate::scalar::AabbValue;
use nalgebra::Point;

/// A trait implemented by shapes that can be queried for their distance to a point.
pub trait PointDistance<T: AabbValue, const D: usize> {
    /// Returns the squared distance from this point to the Shape.
    fn distance_squared(&self, query_point: Point<T, D>) -> T;
}

/// The distance from a point to an [`Aabb`] is measured to its closest point, so it is `0`
/// for every point inside the box.
///
/// # Examples
/// ```
/// use aabbkit::aabb::Aabb;
/// use aabbkit::point_query::PointDistance;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
///
/// assert_eq!(aabb.distance_squared(Point3::new(3.0, 0.5, 0.5)), 4.0);
/// assert_eq!(aabb.distance_squared(Point3::new(0.5, 0.5, 0.5)), 0.0);
/// ```
///
/// [`Aabb`]: crate::aabb::Aabb
impl<T: AabbValue, const D: usize> PointDistance<T, D> for Aabb<T, D> {
    fn distance_squared(&self, query_point: Point<T, D>) -> T {
        let offset = self.closest_point(&query_point) - query_point;
        offset.dot(&offset)
    }
}
