use nalgebra::Point;

use crate::aabb::{Aabb, IntersectsAabb};
use crate::scalar::AabbValue;

impl<T: AabbValue, const D: usize> Aabb<T, D> {
    /// Returns true if this [`Aabb`] and `other` overlap. Boxes that only touch on a face,
    /// edge or corner overlap.
    ///
    /// The boxes are separated as soon as their projections onto one axis are disjoint.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let a = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
    /// let b = Aabb::with_bounds(Point3::new(1.0,0.5,0.5), Point3::new(2.0,2.0,2.0));
    /// let c = Aabb::with_bounds(Point3::new(0.0,1.5,0.0), Point3::new(1.0,2.0,1.0));
    ///
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn overlaps(&self, other: &Aabb<T, D>) -> bool {
        for i in 0..D {
            if self.min[i] > other.max[i] || self.max[i] < other.min[i] {
                return false;
            }
        }
        true
    }

    /// Returns the overlapping region of this [`Aabb`] and `other`, or `None` if they do not
    /// overlap. Touching boxes yield a box of zero extent along the touching axis.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let a = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(2.0,2.0,2.0));
    /// let b = Aabb::with_bounds(Point3::new(1.0,-1.0,1.0), Point3::new(3.0,1.0,3.0));
    ///
    /// let overlap = a.intersection(&b).unwrap();
    /// assert_eq!(overlap.min, Point3::new(1.0, 0.0, 1.0));
    /// assert_eq!(overlap.max, Point3::new(2.0, 1.0, 2.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn intersection(&self, other: &Aabb<T, D>) -> Option<Aabb<T, D>> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Aabb {
            min: self.min.sup(&other.min),
            max: self.max.inf(&other.max),
        })
    }
}

/// Tests whether `box1` and `box2` overlap and returns their common region if they do.
///
/// Shorthand for [`Aabb::intersection`].
///
/// [`Aabb::intersection`]: struct.Aabb.html#method.intersection
pub fn intersect_aabbs<T: AabbValue, const D: usize>(
    box1: &Aabb<T, D>,
    box2: &Aabb<T, D>,
) -> Option<Aabb<T, D>> {
    box1.intersection(box2)
}

impl<T: AabbValue, const D: usize> IntersectsAabb<T, D> for Aabb<T, D> {
    fn intersects_aabb(&self, aabb: &Aabb<T, D>) -> bool {
        self.overlaps(aabb)
    }
}

impl<T: AabbValue, const D: usize> IntersectsAabb<T, D> for Point<T, D> {
    fn intersects_aabb(&self, aabb: &Aabb<T, D>) -> bool {
        aabb.contains(self)
    }
}
