//! Boolean segment test over the cached inverse delta, used when only a yes/no answer is needed.

use super::RaySegment;
use crate::aabb::{Aabb, IntersectsAabb};
use crate::scalar::AabbValue;
use crate::utils::{fast_max, fast_min};

impl<T: AabbValue, const D: usize> IntersectsAabb<T, D> for RaySegment<T, D> {
    /// Tests the segment against the box using the cached `inv_delta`.
    ///
    /// An axis on which `delta` is zero does not constrain the parameter range. The origin
    /// must then lie within the box on that axis, faces included.
    fn intersects_aabb(&self, aabb: &Aabb<T, D>) -> bool {
        let lbr = (aabb[0].coords - self.origin.coords).component_mul(&self.inv_delta);
        let rtr = (aabb[1].coords - self.origin.coords).component_mul(&self.inv_delta);

        let (mut inf, mut sup) = lbr.inf_sup(&rtr);

        for i in 0..D {
            if self.delta[i] == T::zero() {
                if self.origin[i] < aabb.min[i] || self.origin[i] > aabb.max[i] {
                    return false;
                }
                inf[i] = T::zero();
                sup[i] = T::one();
            }
        }

        let tmin = fast_max(inf.max(), T::zero());
        let tmax = fast_min(sup.min(), T::one());

        tmax >= tmin
    }
}
