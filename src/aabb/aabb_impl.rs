//! Axis Aligned Bounding Boxes.

use crate::point_query::PointDistance;
use crate::scalar::AabbValue;
use crate::utils::{fast_clamp, fast_max};
use nalgebra::{Point, SVector};
use std::ops::Index;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// [`Aabb`] struct.
///
/// A box is either non-empty, with `min[i] <= max[i]` on every axis, or empty. The empty box
/// produced by [`Aabb::empty`] has its bounds at [`AabbValue::EMPTY_EXTENT`] inverted, so that
/// growing or joining it never picks one of its bounds over a real coordinate.
///
/// [`Aabb`]: struct.Aabb.html
/// [`Aabb::empty`]: struct.Aabb.html#method.empty
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb<T: AabbValue, const D: usize> {
    /// Minimum coordinates
    pub min: Point<T, D>,

    /// Maximum coordinates
    pub max: Point<T, D>,
}

/// A trait implemented by things which can be bounded by an [`Aabb`].
///
/// [`Aabb`]: struct.Aabb.html
///
pub trait Bounded<T: AabbValue, const D: usize> {
    /// Returns the geometric bounds of this object in the form of an [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::{Aabb, Bounded};
    /// use nalgebra::Point3;
    ///
    /// struct Something;
    ///
    /// impl Bounded<f32, 3> for Something {
    ///     fn aabb(&self) -> Aabb<f32, 3> {
    ///         let point1 = Point3::new(0.0, 0.0, 0.0);
    ///         let point2 = Point3::new(1.0, 1.0, 1.0);
    ///         Aabb::with_bounds(point1, point2)
    ///     }
    /// }
    ///
    /// let something = Something;
    /// let aabb = something.aabb();
    ///
    /// assert!(aabb.contains(&Point3::new(0.0, 0.0, 0.0)));
    /// assert!(aabb.contains(&Point3::new(1.0, 1.0, 1.0)));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    fn aabb(&self) -> Aabb<T, D>;
}

impl<T: AabbValue, const D: usize> Aabb<T, D> {
    /// Creates a new [`Aabb`] with the given bounds.
    ///
    /// # Panics
    /// Panics, in debug mode, if `min` exceeds `max` on any axis. Use [`Aabb::empty`] to
    /// start from an empty box.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0,-1.0,-1.0), Point3::new(1.0,1.0,1.0));
    /// assert_eq!(aabb.min.x, -1.0);
    /// assert_eq!(aabb.max.z, 1.0);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Aabb::empty`]: struct.Aabb.html#method.empty
    ///
    pub fn with_bounds(min: Point<T, D>, max: Point<T, D>) -> Aabb<T, D> {
        debug_assert!(
            (0..D).all(|i| min[i] <= max[i]),
            "Aabb bounds are inverted: min = {}, max = {}",
            min,
            max
        );
        Aabb { min, max }
    }

    /// Creates a new [`Aabb`] from a `center` and the distances from the center to each face.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn from_half_extents(center: Point<T, D>, half_extents: SVector<T, D>) -> Aabb<T, D> {
        Aabb::with_bounds(center - half_extents, center + half_extents)
    }

    /// Creates a new empty [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    ///
    /// let aabb = Aabb::<f32, 3>::empty();
    /// assert!(aabb.is_empty());
    /// assert!(aabb.min.x > aabb.max.x);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn empty() -> Aabb<T, D> {
        Aabb {
            min: Point::from(SVector::repeat(T::EMPTY_EXTENT)),
            max: Point::from(SVector::repeat(-T::EMPTY_EXTENT)),
        }
    }

    /// Creates a new [`Aabb`] which spans every representable coordinate in use.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::<f32, 3>::infinite();
    /// assert!(aabb.contains(&Point3::new(1e30, -1e30, 0.0)));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn infinite() -> Aabb<T, D> {
        Aabb {
            min: Point::from(SVector::repeat(-T::EMPTY_EXTENT)),
            max: Point::from(SVector::repeat(T::EMPTY_EXTENT)),
        }
    }

    /// Creates the smallest [`Aabb`] containing all `points`. Returns an empty box for an
    /// empty iterator.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let points = [Point3::new(1.0, 5.0, -2.0), Point3::new(-1.0, 0.0, 3.0)];
    /// let aabb = Aabb::from_points(&points);
    ///
    /// assert_eq!(aabb.min, Point3::new(-1.0, 0.0, -2.0));
    /// assert_eq!(aabb.max, Point3::new(1.0, 5.0, 3.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn from_points<'a, I>(points: I) -> Aabb<T, D>
    where
        I: IntoIterator<Item = &'a Point<T, D>>,
    {
        points
            .into_iter()
            .fold(Aabb::empty(), |aabb, point| aabb.grow(point))
    }

    /// Parallel version of [`Aabb::from_points`], for large point clouds.
    ///
    /// [`Aabb::from_points`]: struct.Aabb.html#method.from_points
    #[cfg(feature = "rayon")]
    pub fn par_from_points(points: &[Point<T, D>]) -> Aabb<T, D>
    where
        T: Send + Sync,
    {
        points
            .par_iter()
            .fold(Aabb::empty, |aabb, point| aabb.grow(point))
            .reduce(Aabb::empty, |a, b| a.join(&b))
    }

    /// Returns the union of all `aabbs`, computed in parallel.
    #[cfg(feature = "rayon")]
    pub fn par_join_all(aabbs: &[Aabb<T, D>]) -> Aabb<T, D>
    where
        T: Send + Sync,
    {
        aabbs
            .par_iter()
            .fold(Aabb::empty, |acc, aabb| acc.join(aabb))
            .reduce(Aabb::empty, |a, b| a.join(&b))
    }

    /// Resets this [`Aabb`] to the empty state.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn clear(&mut self) {
        *self = Aabb::empty();
    }

    /// Returns true if the [`Aabb`] is empty, i.e. if its minimum exceeds its maximum on
    /// at least one axis.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let mut aabb = Aabb::<f32, 3>::empty();
    /// assert!(aabb.is_empty());
    ///
    /// aabb.grow_mut(&Point3::new(1.0, 2.0, 3.0));
    /// assert!(!aabb.is_empty());
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn is_empty(&self) -> bool {
        (0..D).any(|i| self.min[i] > self.max[i])
    }

    /// Returns true if the [`Point`] is inside the [`Aabb`]. Bounds are inclusive.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    ///
    /// assert!(aabb.contains(&Point3::new(0.0, 0.0, 0.0)));
    /// assert!(aabb.contains(&Point3::new(1.0, -1.0, 1.0)));
    /// assert!(!aabb.contains(&Point3::new(1.5, 0.0, 0.0)));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Point`]: nalgebra::Point
    ///
    pub fn contains(&self, p: &Point<T, D>) -> bool {
        (0..D).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Returns true if the [`Point`] is approximately inside the [`Aabb`]
    /// with respect to some `epsilon`.
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Point`]: nalgebra::Point
    ///
    pub fn approx_contains_eps(&self, p: &Point<T, D>, epsilon: T) -> bool {
        (0..D).all(|i| (p[i] - self.min[i]) > -epsilon && (p[i] - self.max[i]) < epsilon)
    }

    /// Returns true if `other` lies completely inside this [`Aabb`]. An empty box is
    /// contained in every box.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn contains_aabb(&self, other: &Aabb<T, D>) -> bool {
        other.is_empty() || (self.contains(&other.min) && self.contains(&other.max))
    }

    /// Returns a new minimal [`Aabb`] which contains both this [`Aabb`] and `other`.
    /// Joining with an empty box returns this box unchanged.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb1 = Aabb::with_bounds(Point3::new(-101.0, 0.0, 0.0), Point3::new(-100.0, 1.0, 1.0));
    /// let aabb2 = Aabb::with_bounds(Point3::new(100.0, 0.0, 0.0), Point3::new(101.0, 1.0, 1.0));
    /// let joint = aabb1.join(&aabb2);
    ///
    /// assert!(joint.contains(&Point3::new(0.0, 0.5, 0.5)));
    /// assert_eq!(aabb1.join(&Aabb::empty()), aabb1);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn join(&self, other: &Aabb<T, D>) -> Aabb<T, D> {
        Aabb {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Mutable version of [`Aabb::join`].
    ///
    /// [`Aabb::join`]: struct.Aabb.html#method.join
    ///
    pub fn join_mut(&mut self, other: &Aabb<T, D>) {
        *self = self.join(other);
    }

    /// Returns a new minimal [`Aabb`] which contains both this [`Aabb`] and the bounds of
    /// `other`.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn join_bounded<B: Bounded<T, D>>(&self, other: &B) -> Aabb<T, D> {
        self.join(&other.aabb())
    }

    /// Returns a new minimal [`Aabb`] which contains both this [`Aabb`] and the [`Point`]
    /// `other`.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let point1 = Point3::new(0.0, 0.0, 0.0);
    /// let point2 = Point3::new(1.0, 1.0, 1.0);
    /// let point3 = Point3::new(2.0, 2.0, 2.0);
    ///
    /// let aabb = Aabb::empty();
    /// assert!(!aabb.contains(&point1));
    ///
    /// let aabb1 = aabb.grow(&point1);
    /// assert!(aabb1.contains(&point1));
    ///
    /// let aabb2 = aabb.grow(&point2);
    /// assert!(aabb2.contains(&point2));
    /// assert!(!aabb2.contains(&point3));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Point`]: nalgebra::Point
    ///
    pub fn grow(&self, other: &Point<T, D>) -> Aabb<T, D> {
        Aabb {
            min: self.min.inf(other),
            max: self.max.sup(other),
        }
    }

    /// Mutable version of [`Aabb::grow`].
    ///
    /// [`Aabb::grow`]: struct.Aabb.html#method.grow
    ///
    pub fn grow_mut(&mut self, other: &Point<T, D>) {
        *self = self.grow(other);
    }

    /// Returns the size of this [`Aabb`] in all dimensions.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(-1.0,-1.0,-1.0), Point3::new(1.0,1.0,1.0));
    /// assert_eq!(aabb.size(), Vector3::new(2.0, 2.0, 2.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn size(&self) -> SVector<T, D> {
        self.max - self.min
    }

    /// Returns the distances from the center of this [`Aabb`] to its faces.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn half_size(&self) -> SVector<T, D> {
        self.size() / (T::one() + T::one())
    }

    /// Returns the center [`Point`] of the [`Aabb`].
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let min = Point3::new(41.0,41.0,41.0);
    /// let max = Point3::new(43.0,43.0,43.0);
    ///
    /// let aabb = Aabb::with_bounds(min, max);
    /// let center = aabb.center();
    ///
    /// assert!(center.x == 42.0 && center.y == 42.0 && center.z == 42.0);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Point`]: nalgebra::Point
    ///
    pub fn center(&self) -> Point<T, D> {
        Point::from((self.min.coords + self.max.coords) / (T::one() + T::one()))
    }

    /// Returns the volume of this [`Aabb`], `0` for an empty box.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn volume(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        self.size().iter().fold(T::one(), |volume, extent| volume * *extent)
    }

    /// Returns the index of the axis along which the [`Aabb`] is stretched the most.
    /// Ties resolve to the lowest index.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use aabbkit::axis::Axis;
    /// use nalgebra::Point3;
    ///
    /// let min = Point3::new(-100.0,0.0,0.0);
    /// let max = Point3::new(100.0,0.0,0.0);
    ///
    /// let aabb = Aabb::with_bounds(min, max);
    /// assert_eq!(aabb.largest_axis(), Axis::X.index());
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn largest_axis(&self) -> usize {
        let size = self.size();
        let mut largest = 0;
        for i in 1..D {
            if size[i] > size[largest] {
                largest = i;
            }
        }
        largest
    }

    /// Returns one of the `2^D` vertices of the [`Aabb`].
    ///
    /// Bit `i` of `index` selects `max` (set) or `min` (clear) on axis `i`. In 3D, bit 0
    /// picks x, bit 1 picks y and bit 2 picks z, so `corner(0)` is `min` and `corner(7)`
    /// is `max`.
    ///
    /// # Panics
    /// Panics if `index >= 2^D`.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,2.0,3.0));
    ///
    /// assert_eq!(aabb.corner(0), aabb.min);
    /// assert_eq!(aabb.corner(5), Point3::new(1.0, 0.0, 3.0));
    /// assert_eq!(aabb.corner(7), aabb.max);
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn corner(&self, index: usize) -> Point<T, D> {
        assert!(
            index < 1 << D,
            "corner index {} out of range for a {}-dimensional box",
            index,
            D
        );
        Point::from(SVector::from_fn(|axis, _| {
            if index & (1 << axis) != 0 {
                self.max[axis]
            } else {
                self.min[axis]
            }
        }))
    }

    /// Iterates over all `2^D` vertices of the [`Aabb`], in the order of [`Aabb::corner`].
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Aabb::corner`]: struct.Aabb.html#method.corner
    ///
    pub fn corners(&self) -> impl Iterator<Item = Point<T, D>> + '_ {
        (0..1usize << D).map(move |index| self.corner(index))
    }

    /// Returns the [`Point`] on or in the [`Aabb`] closest to `p`. Points inside the box are
    /// returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
    ///
    /// assert_eq!(aabb.closest_point(&Point3::new(2.0, 0.5, -3.0)), Point3::new(1.0, 0.5, 0.0));
    /// assert_eq!(aabb.closest_point(&Point3::new(0.25, 0.5, 0.75)), Point3::new(0.25, 0.5, 0.75));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    /// [`Point`]: nalgebra::Point
    ///
    pub fn closest_point(&self, p: &Point<T, D>) -> Point<T, D> {
        Point::from(SVector::from_fn(|i, _| {
            fast_clamp(p[i], self.min[i], self.max[i])
        }))
    }

    /// Returns true if the sphere with the given `center` and `radius` intersects this
    /// [`Aabb`]. Spheres that only touch the surface do not intersect.
    ///
    /// # Panics
    /// Panics, in debug mode, if the radius is negative.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
    ///
    /// assert!(aabb.intersects_sphere(&Point3::new(2.0, 0.5, 0.5), 1.5));
    /// assert!(!aabb.intersects_sphere(&Point3::new(2.0, 0.5, 0.5), 1.0));
    /// ```
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn intersects_sphere(&self, center: &Point<T, D>, radius: T) -> bool {
        debug_assert!(radius >= T::zero(), "sphere radius must not be negative: {}", radius);
        self.distance_squared(*center) < radius * radius
    }

    /// Returns the largest extent of this [`Aabb`] over all axes, `0` for an empty box.
    ///
    /// [`Aabb`]: struct.Aabb.html
    ///
    pub fn max_extent(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }
        self.size().iter().fold(T::zero(), |acc, extent| fast_max(acc, *extent))
    }
}

/// Make [`Aabb`]s indexable. `aabb[0]` gives a reference to the minimum bound.
/// All other indices return a reference to the maximum bound.
///
/// [`Aabb`]: struct.Aabb.html
///
impl<T: AabbValue, const D: usize> Index<usize> for Aabb<T, D> {
    type Output = Point<T, D>;

    fn index(&self, index: usize) -> &Point<T, D> {
        if index == 0 {
            &self.min
        } else {
            &self.max
        }
    }
}

/// Implementation of [`Bounded`] for [`Aabb`].
///
/// [`Bounded`]: trait.Bounded.html
/// [`Aabb`]: struct.Aabb.html
///
impl<T: AabbValue, const D: usize> Bounded<T, D> for Aabb<T, D> {
    fn aabb(&self) -> Aabb<T, D> {
        *self
    }
}

/// Implementation of [`Bounded`] for [`Point`].
///
/// [`Bounded`]: trait.Bounded.html
/// [`Point`]: nalgebra::Point
///
impl<T: AabbValue, const D: usize> Bounded<T, D> for Point<T, D> {
    fn aabb(&self) -> Aabb<T, D> {
        Aabb::with_bounds(*self, *self)
    }
}
