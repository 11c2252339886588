#![no_main]
use std::fmt::{self, Debug, Formatter};

use aabbkit::aabb::{Aabb, IntersectsAabb};
use aabbkit::plane::{Plane, PlaneSide};
use aabbkit::ray::RaySegment;
use aabbkit::scalar::{is_within_step, AabbValue};
use approx::assert_relative_eq;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nalgebra::{Point, SVector, SimdPartialOrd};
use ordered_float::NotNan;

type Float = f32;
const LIMIT: Float = 1_000.0;

fuzz_target!(|workload: Workload<3>| {
    workload.fuzz();
});

#[derive(Debug, Arbitrary)]
struct ArbitraryPoint<const D: usize> {
    coordinates: [NotNan<Float>; D],
}

impl<const D: usize> ArbitraryPoint<D> {
    fn point(&self) -> Point<Float, D> {
        Point::<_, D>::from_slice(&self.coordinates).map(|f| f.into_inner().clamp(-LIMIT, LIMIT))
    }
}

#[derive(Arbitrary)]
struct ArbitraryBox<const D: usize> {
    a: ArbitraryPoint<D>,
    b: ArbitraryPoint<D>,
}

impl<const D: usize> Debug for ArbitraryBox<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.aabb(), f)
    }
}

impl<const D: usize> ArbitraryBox<D> {
    fn aabb(&self) -> Aabb<Float, D> {
        let a = self.a.point();
        let b = self.b.point();
        Aabb::with_bounds(a.simd_min(b), a.simd_max(b))
    }
}

#[derive(Arbitrary)]
struct ArbitrarySegment<const D: usize> {
    start: ArbitraryPoint<D>,
    end: ArbitraryPoint<D>,
}

impl<const D: usize> Debug for ArbitrarySegment<D> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.segment(), f)
    }
}

impl<const D: usize> ArbitrarySegment<D> {
    fn segment(&self) -> RaySegment<Float, D> {
        RaySegment::between(self.start.point(), self.end.point())
    }
}

#[derive(Debug, Arbitrary)]
struct Workload<const D: usize> {
    stationary: ArbitraryBox<D>,
    moving: ArbitraryBox<D>,
    segment: ArbitrarySegment<D>,
    displacement: ArbitraryPoint<D>,
    normal: ArbitraryPoint<D>,
    d: NotNan<Float>,
}

impl<const D: usize> Workload<D> {
    fn fuzz(self) {
        let stationary = self.stationary.aabb();
        let moving = self.moving.aabb();
        let displacement: SVector<Float, D> = self.displacement.point().coords;

        // Overlap and intersection are symmetric.
        assert_eq!(stationary.overlaps(&moving), moving.overlaps(&stationary));
        assert_eq!(stationary.intersection(&moving), moving.intersection(&stationary));
        if let Some(common) = stationary.intersection(&moving) {
            assert!(stationary.contains_aabb(&common));
            assert!(moving.contains_aabb(&common));
        }

        // Segment hits land on the box.
        let segment = self.segment.segment();
        let hit = segment.intersect_aabb(&stationary);
        if hit.is_hit() {
            assert!(hit.t >= 0.0);
            assert!(stationary.approx_contains_eps(&segment.point_at(hit.t), 1e-1));
            if hit.axis.is_some() {
                assert_relative_eq!(hit.normal.norm(), 1.0);
            }
        } else {
            assert_eq!(hit.t, Float::NO_INTERSECTION);
        }
        // Check that this doesn't panic.
        let _ = segment.intersects_aabb(&stationary);

        // Sweeps start at zero for overlapping boxes and never report a hit outside the step.
        let t = stationary.intersect_moving(&moving, &displacement);
        if stationary.overlaps(&moving) {
            assert_eq!(t, 0.0);
        }
        assert!(is_within_step(t) || t == Float::NO_INTERSECTION);

        // Classification agrees with the support distances.
        let normal = self.normal.point().coords;
        if normal.norm() > 1e-3 {
            let normal = normal.normalize();
            if let Ok(plane) = Plane::new(normal, self.d.into_inner().clamp(-LIMIT, LIMIT)) {
                let (min_d, max_d) = stationary.support_distances(plane.normal());
                assert!(min_d <= max_d);
                match stationary.classify_plane(&plane) {
                    PlaneSide::Front => assert!(min_d >= plane.d()),
                    PlaneSide::Behind => assert!(max_d <= plane.d()),
                    PlaneSide::Straddling => assert!(min_d < plane.d() && max_d > plane.d()),
                }
            }
        }
    }
}
