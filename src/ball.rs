//! Balls, including circles and spheres.

use crate::{
    aabb::{Aabb, Bounded, IntersectsAabb},
    scalar::AabbValue,
};
use nalgebra::{Point, SVector};

/// In 2D, a circle. In 3D, a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ball<T: AabbValue, const D: usize> {
    /// The center of the ball.
    pub center: Point<T, D>,
    /// The radius of the ball.
    pub radius: T,
}

impl<T: AabbValue, const D: usize> Ball<T, D> {
    /// Creates a [`Ball`] with the given `center` and `radius`.
    ///
    /// # Panics
    /// Panics, in debug mode, if the radius is negative.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::ball::Ball;
    /// use nalgebra::Point3;
    ///
    /// let ball = Ball::new(Point3::new(1.0, 1.0, 1.0), 1.0);
    /// assert_eq!(ball.center, Point3::new(1.0, 1.0, 1.0));
    /// assert_eq!(ball.radius, 1.0)
    /// ```
    ///
    /// [`Ball`]: struct.Ball.html
    pub fn new(center: Point<T, D>, radius: T) -> Self {
        debug_assert!(radius >= T::zero(), "ball radius must not be negative: {}", radius);
        Self { center, radius }
    }

    /// Returns true if this [`Ball`] contains the [`Point`]. Points on the surface are
    /// contained.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::ball::Ball;
    /// use nalgebra::Point3;
    ///
    /// let ball = Ball::new(Point3::new(1.0, 1.0, 1.0), 1.0);
    /// let point = Point3::new(1.25, 1.25, 1.25);
    ///
    /// assert!(ball.contains(&point));
    /// ```
    ///
    /// [`Ball`]: struct.Ball.html
    /// [`Point`]: nalgebra::Point
    pub fn contains(&self, point: &Point<T, D>) -> bool {
        let offset = point - self.center;
        // Squaring the RHS is faster than computing the square root of the LHS.
        offset.dot(&offset) <= self.radius * self.radius
    }

    /// Returns true if this [`Ball`] intersects the [`Aabb`]. A ball that only touches the
    /// surface of the box does not intersect it.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::{aabb::Aabb, ball::Ball};
    /// use nalgebra::Point3;
    ///
    /// let ball = Ball::new(Point3::new(1.0, 1.0, 1.0), 1.0);
    /// let aabb = Aabb::with_bounds(Point3::new(1.25, 1.25, 1.25), Point3::new(3.0, 3.0, 3.0));
    ///
    /// assert!(ball.intersects_aabb(&aabb));
    /// ```
    ///
    /// [`Aabb`]: crate::aabb::Aabb
    /// [`Ball`]: struct.Ball.html
    pub fn intersects_aabb(&self, aabb: &Aabb<T, D>) -> bool {
        aabb.intersects_sphere(&self.center, self.radius)
    }
}

impl<T: AabbValue, const D: usize> IntersectsAabb<T, D> for Ball<T, D> {
    fn intersects_aabb(&self, aabb: &Aabb<T, D>) -> bool {
        self.intersects_aabb(aabb)
    }
}

impl<T: AabbValue, const D: usize> Bounded<T, D> for Ball<T, D> {
    fn aabb(&self) -> Aabb<T, D> {
        Aabb::from_half_extents(self.center, SVector::repeat(self.radius))
    }
}
