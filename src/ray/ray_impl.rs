//! This module defines a RaySegment structure and the slab-method intersection
//! with axis aligned bounding boxes.

use crate::aabb::Aabb;
use crate::axis::Axis;
use crate::scalar::AabbValue;
use nalgebra::{Point, SVector};

/// A directed line segment `origin + t * delta` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaySegment<T: AabbValue, const D: usize> {
    /// The segment origin, reached at `t = 0`.
    pub origin: Point<T, D>,

    /// Offset from the origin to the end of the segment, reached at `t = 1`.
    pub delta: SVector<T, D>,

    /// Inverse (1/x) delta. Cached for the boolean [`IntersectsAabb`] test.
    ///
    /// [`IntersectsAabb`]: crate::aabb::IntersectsAabb
    ///
    pub inv_delta: SVector<T, D>,
}

/// A struct which is returned by [`RaySegment::intersect_aabb()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit<T: AabbValue, const D: usize> {
    /// Parameter of the entry point along the segment, or
    /// [`AabbValue::NO_INTERSECTION`] if the segment misses the box.
    ///
    /// [`AabbValue::NO_INTERSECTION`]: crate::scalar::AabbValue::NO_INTERSECTION
    pub t: T,

    /// Outward unit normal of the face that was hit. For segments starting inside the box
    /// this is the normalized negated delta. Zero on a miss.
    pub normal: SVector<T, D>,

    /// Index of the axis of the face that was hit. `None` on a miss and for segments
    /// starting inside the box.
    pub axis: Option<usize>,
}

impl<T: AabbValue, const D: usize> SegmentHit<T, D> {
    fn miss() -> SegmentHit<T, D> {
        SegmentHit {
            t: T::NO_INTERSECTION,
            normal: SVector::zeros(),
            axis: None,
        }
    }

    /// Returns true if the segment reaches the box before its end.
    pub fn is_hit(&self) -> bool {
        self.t <= T::one()
    }
}

impl<T: AabbValue> SegmentHit<T, 3> {
    /// The [`Axis`] of the face that was hit.
    ///
    /// [`Axis`]: crate::axis::Axis
    pub fn face_axis(&self) -> Option<Axis> {
        self.axis.and_then(Axis::from_index)
    }
}

impl<T: AabbValue, const D: usize> RaySegment<T, D> {
    /// Creates a new [`RaySegment`] from an `origin` and a `delta`.
    /// Unlike a ray direction, `delta` is not normalized: its length is the extent of the
    /// segment.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::ray::RaySegment;
    /// use nalgebra::{Point3,Vector3};
    ///
    /// let origin = Point3::new(0.0,0.0,0.0);
    /// let delta = Vector3::new(4.0,0.0,0.0);
    /// let segment = RaySegment::new(origin, delta);
    ///
    /// assert_eq!(segment.origin, origin);
    /// assert_eq!(segment.delta, delta);
    /// assert_eq!(segment.inv_delta.x, 0.25);
    /// ```
    ///
    /// [`RaySegment`]: struct.RaySegment.html
    ///
    pub fn new(origin: Point<T, D>, delta: SVector<T, D>) -> RaySegment<T, D> {
        RaySegment {
            origin,
            delta,
            inv_delta: delta.map(|x| T::one() / x),
        }
    }

    /// Creates the [`RaySegment`] going from `start` to `end`.
    ///
    /// [`RaySegment`]: struct.RaySegment.html
    ///
    pub fn between(start: Point<T, D>, end: Point<T, D>) -> RaySegment<T, D> {
        RaySegment::new(start, end - start)
    }

    /// Returns the point at parameter `t`.
    pub fn point_at(&self, t: T) -> Point<T, D> {
        self.origin + self.delta * t
    }

    /// Intersects this segment with an [`Aabb`] using the slab method.
    ///
    /// For every axis on which the origin lies outside the box, the parameter at which the
    /// segment crosses the near face is computed. The segment is rejected right away if it
    /// moves away from that face or ends before reaching it. The box is entered at the
    /// latest of these crossings; ties resolve to the lowest axis. The entry point must
    /// then lie within the box on the remaining axes.
    ///
    /// A segment starting inside the box hits at `t = 0`.
    ///
    /// # Examples
    /// ```
    /// use aabbkit::aabb::Aabb;
    /// use aabbkit::ray::RaySegment;
    /// use nalgebra::{Point3,Vector3};
    ///
    /// let aabb = Aabb::with_bounds(Point3::new(0.0,0.0,0.0), Point3::new(1.0,1.0,1.0));
    ///
    /// let segment = RaySegment::new(Point3::new(2.0,0.5,0.5), Vector3::new(-4.0,0.0,0.0));
    /// let hit = segment.intersect_aabb(&aabb);
    ///
    /// assert!(hit.is_hit());
    /// assert_eq!(hit.t, 0.25);
    /// assert_eq!(hit.normal, Vector3::new(1.0, 0.0, 0.0));
    /// assert_eq!(hit.axis, Some(0));
    ///
    /// let too_short = RaySegment::new(Point3::new(2.0,0.5,0.5), Vector3::new(-0.5,0.0,0.0));
    /// assert!(!too_short.intersect_aabb(&aabb).is_hit());
    /// ```
    ///
    /// [`Aabb`]: crate::aabb::Aabb
    ///
    pub fn intersect_aabb(&self, aabb: &Aabb<T, D>) -> SegmentHit<T, D> {
        let mut inside = true;

        // Per axis: crossing parameter of the near face and the sign of its normal.
        let mut crossings = [(-T::one(), T::zero()); D];
        for (i, crossing) in crossings.iter_mut().enumerate() {
            let origin = self.origin[i];
            let delta = self.delta[i];
            if origin < aabb.min[i] {
                let gap = aabb.min[i] - origin;
                if gap > delta {
                    return SegmentHit::miss();
                }
                *crossing = (gap / delta, -T::one());
                inside = false;
            } else if origin > aabb.max[i] {
                let gap = aabb.max[i] - origin;
                if gap < delta {
                    return SegmentHit::miss();
                }
                *crossing = (gap / delta, T::one());
                inside = false;
            }
        }

        if inside {
            let length = self.delta.dot(&self.delta).sqrt();
            let normal = if length > T::zero() {
                -self.delta / length
            } else {
                SVector::zeros()
            };
            return SegmentHit {
                t: T::zero(),
                normal,
                axis: None,
            };
        }

        let mut which = 0;
        for i in 1..D {
            if crossings[i].0 > crossings[which].0 {
                which = i;
            }
        }
        let t = crossings[which].0;

        for i in (0..D).filter(|i| *i != which) {
            let coordinate = self.origin[i] + self.delta[i] * t;
            if coordinate < aabb.min[i] || coordinate > aabb.max[i] {
                return SegmentHit::miss();
            }
        }

        let mut normal = SVector::zeros();
        normal[which] = crossings[which].1;
        SegmentHit {
            t,
            normal,
            axis: Some(which),
        }
    }
}

impl<T: AabbValue, const D: usize> Aabb<T, D> {
    /// Returns the parameter at which `segment` enters this box, or
    /// [`AabbValue::NO_INTERSECTION`]. See [`RaySegment::intersect_aabb`].
    ///
    /// [`AabbValue::NO_INTERSECTION`]: crate::scalar::AabbValue::NO_INTERSECTION
    /// [`RaySegment::intersect_aabb`]: crate::ray::RaySegment::intersect_aabb
    pub fn ray_intersect(&self, segment: &RaySegment<T, D>) -> T {
        segment.intersect_aabb(self).t
    }
}

#[cfg(all(feature = "bench", test))]
mod bench {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test::{black_box, Bencher};

    use crate::aabb::IntersectsAabb;
    use crate::testbase::{tuple_to_point, tuple_to_vector, TAabb3, TSegment3, TupleVec};

    /// Generate a random deterministic `RaySegment`.
    fn random_segment(rng: &mut StdRng) -> TSegment3 {
        let a = tuple_to_point(&rng.random::<TupleVec>());
        let b = tuple_to_vector(&rng.random::<TupleVec>());
        TSegment3::new(a, b)
    }

    /// Generate a random deterministic `Aabb`.
    fn random_aabb(rng: &mut StdRng) -> TAabb3 {
        let a = tuple_to_point(&rng.random::<TupleVec>());
        let b = tuple_to_point(&rng.random::<TupleVec>());

        TAabb3::empty().grow(&a).grow(&b)
    }

    /// Generate the segment and boxes used for benchmarks.
    fn random_segment_and_boxes() -> (TSegment3, Vec<TAabb3>) {
        let seed = [0; 32];
        let mut rng = StdRng::from_seed(seed);

        let segment = random_segment(&mut rng);
        let boxes = (0..1000).map(|_| random_aabb(&mut rng)).collect::<Vec<_>>();

        black_box((segment, boxes))
    }

    /// Benchmark for the slab method with normal and axis reporting.
    #[bench]
    fn bench_intersect_aabb(b: &mut Bencher) {
        let (segment, boxes) = random_segment_and_boxes();

        b.iter(|| {
            for aabb in &boxes {
                black_box(segment.intersect_aabb(aabb));
            }
        });
    }

    /// Benchmark for the boolean slab test.
    #[bench]
    fn bench_intersects_aabb(b: &mut Bencher) {
        let (segment, boxes) = random_segment_and_boxes();

        b.iter(|| {
            for aabb in &boxes {
                black_box(segment.intersects_aabb(aabb));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::aabb::IntersectsAabb;
    use crate::axis::Axis;
    use crate::scalar::AabbValue;
    use crate::testbase::{
        tuple_to_point, tuplevec_medium_strategy, TAabb3, TPoint3, TSegment3, TVector3, TupleVec,
    };

    use float_eq::assert_float_eq;
    use proptest::prelude::*;

    fn unit_box() -> TAabb3 {
        TAabb3::with_bounds(TPoint3::new(0.0, 0.0, 0.0), TPoint3::new(1.0, 1.0, 1.0))
    }

    /// Generates a random [`RaySegment`] which ends beyond the center of a random [`Aabb`].
    fn gen_segment_to_aabb(data: (TupleVec, TupleVec, TupleVec)) -> (TSegment3, TAabb3) {
        // Generate a random `Aabb`
        let aabb = TAabb3::empty()
            .grow(&tuple_to_point(&data.0))
            .grow(&tuple_to_point(&data.1));

        // Get its center
        let center = aabb.center();

        // Generate a random segment passing through the center
        let pos = tuple_to_point(&data.2);
        let segment = TSegment3::new(pos, (center - pos) * 2.0);
        (segment, aabb)
    }

    #[test]
    fn segment_hits_min_face() {
        let segment = TSegment3::new(TPoint3::new(-1.0, 0.5, 0.5), TVector3::new(2.0, 0.0, 0.0));
        let hit = segment.intersect_aabb(&unit_box());
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.normal, TVector3::new(-1.0, 0.0, 0.0));
        assert_eq!(hit.face_axis(), Some(Axis::X));
        assert_eq!(unit_box().ray_intersect(&segment), 0.5);
    }

    #[test]
    fn segment_misses_beside_box() {
        let segment = TSegment3::new(TPoint3::new(-1.0, 2.0, 2.0), TVector3::new(2.0, 0.0, 0.0));
        let hit = segment.intersect_aabb(&unit_box());
        assert_eq!(hit.t, f32::NO_INTERSECTION);
        assert!(!hit.is_hit());
        assert_eq!(hit.normal, TVector3::zeros());
        assert_eq!(hit.axis, None);
    }

    #[test]
    fn segment_hits_max_face_from_above() {
        let segment = TSegment3::new(TPoint3::new(0.5, 3.0, 0.25), TVector3::new(0.0, -4.0, 0.0));
        let hit = segment.intersect_aabb(&unit_box());
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.normal, TVector3::new(0.0, 1.0, 0.0));
        assert_eq!(hit.face_axis(), Some(Axis::Y));
    }

    #[test]
    fn segment_moving_away_misses() {
        let segment = TSegment3::new(TPoint3::new(2.0, 0.5, 0.5), TVector3::new(1.0, 0.0, 0.0));
        assert!(!segment.intersect_aabb(&unit_box()).is_hit());
    }

    #[test]
    fn segment_ending_before_box_misses() {
        let segment = TSegment3::new(TPoint3::new(-1.0, 0.5, 0.5), TVector3::new(0.5, 0.0, 0.0));
        assert_eq!(unit_box().ray_intersect(&segment), f32::NO_INTERSECTION);
    }

    #[test]
    fn segment_ending_on_face_hits() {
        let segment = TSegment3::new(TPoint3::new(-1.0, 0.5, 0.5), TVector3::new(1.0, 0.0, 0.0));
        assert_eq!(unit_box().ray_intersect(&segment), 1.0);
    }

    #[test]
    fn segment_starting_inside() {
        let segment = TSegment3::new(TPoint3::new(0.5, 0.5, 0.5), TVector3::new(0.0, 3.0, 4.0));
        let hit = segment.intersect_aabb(&unit_box());
        assert_eq!(hit.t, 0.0);
        assert_float_eq!(hit.normal.y, -0.6, abs <= 1e-6);
        assert_float_eq!(hit.normal.z, -0.8, abs <= 1e-6);
        assert_eq!(hit.axis, None);
    }

    #[test]
    fn degenerate_segment() {
        let inside = TSegment3::new(TPoint3::new(0.5, 0.5, 0.5), TVector3::zeros());
        let hit = inside.intersect_aabb(&unit_box());
        assert_eq!(hit.t, 0.0);
        assert_eq!(hit.normal, TVector3::zeros());

        let outside = TSegment3::new(TPoint3::new(1.5, 0.5, 0.5), TVector3::zeros());
        assert!(!outside.intersect_aabb(&unit_box()).is_hit());
    }

    #[test]
    fn tie_between_axes_resolves_to_lowest() {
        let segment = TSegment3::new(TPoint3::new(-1.0, -1.0, 0.5), TVector3::new(2.0, 2.0, 0.0));
        let hit = segment.intersect_aabb(&unit_box());
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.normal, TVector3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn latest_crossing_is_the_entry() {
        // Crosses the x slab at t = 0.25 but only enters the y slab at t = 0.5.
        let segment = TSegment3::new(TPoint3::new(-0.5, -1.0, 0.5), TVector3::new(2.0, 2.0, 0.0));
        let hit = segment.intersect_aabb(&unit_box());
        assert_eq!(hit.t, 0.5);
        assert_eq!(hit.normal, TVector3::new(0.0, -1.0, 0.0));
        assert_eq!(segment.point_at(hit.t), TPoint3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn segment_hits_zero_depth_aabb() {
        let segment = TSegment3::between(TPoint3::new(0.0, 0.0, 0.0), TPoint3::new(0.0, 0.0, 2.0));
        let aabb = TAabb3::with_bounds(TPoint3::new(-1.0, -1.0, 1.0), TPoint3::new(1.0, 1.0, 1.0));
        let hit = segment.intersect_aabb(&aabb);
        assert_eq!(hit.t, 0.5);
        assert!(segment.intersects_aabb(&aabb));
    }

    proptest! {
        // Test whether a `RaySegment` which passes through the center of an `Aabb` hits it
        // on its surface, through a face facing the segment.
        #[test]
        fn test_segment_through_aabb_center(data in (tuplevec_medium_strategy(),
                                                      tuplevec_medium_strategy(),
                                                      tuplevec_medium_strategy())) {
            let (segment, aabb) = gen_segment_to_aabb(data);
            let hit = segment.intersect_aabb(&aabb);

            assert!(hit.is_hit());
            assert!(hit.t >= 0.0 && hit.t <= 0.5 + 1e-4);
            assert!(aabb.approx_contains_eps(&segment.point_at(hit.t), 1e-2));
            if hit.axis.is_some() {
                assert!(hit.normal.dot(&segment.delta) < 0.0);
                assert_eq!(hit.normal.iter().filter(|c| **c != 0.0).count(), 1);
            }
            assert!(segment.intersects_aabb(&aabb));
        }

        // Test whether a `RaySegment` which points away from the center of an `Aabb`
        // does not hit it, unless its origin is inside the `Aabb`.
        #[test]
        fn test_segment_from_aabb_center(data in (tuplevec_medium_strategy(),
                                                   tuplevec_medium_strategy(),
                                                   tuplevec_medium_strategy())) {
            let (segment, aabb) = gen_segment_to_aabb(data);

            // Invert the direction of the segment
            let segment = TSegment3::new(segment.origin, -segment.delta);
            let hit = segment.intersect_aabb(&aabb);

            if aabb.contains(&segment.origin) {
                assert_eq!(hit.t, 0.0);
            } else {
                assert!(!hit.is_hit());
                assert!(!segment.intersects_aabb(&aabb));
            }
        }
    }
}
