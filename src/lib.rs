//! A crate which exports axis-aligned bounding boxes together with the static and dynamic
//! intersection tests that real-time spatial queries are built from.
//!
//! ## About
//!
//! Collision detection, culling and ray casting all reduce to a handful of questions asked of
//! an [`Aabb`] many times per simulation step: does it contain a point, touch a sphere, lie in
//! front of a plane, overlap another box, get hit by a ray segment, or get reached by another
//! box moving through space. This crate answers those questions in constant time per axis.
//!
//! Boxes are built from point clouds or child boxes ([`Aabb::grow`], [`Aabb::join`]), carried
//! along with their owners' transforms ([`Aabb::transformed`]) and queried against
//! [`RaySegment`]s, [`Plane`]s, [`Ball`]s and other boxes.
//!
//! The dynamic tests do not return `Option`s. A miss is reported by the sentinel
//! [`AabbValue::NO_INTERSECTION`], which is always greater than `1`, so a single `t <= 1`
//! check rejects both misses and hits beyond the end of the movement.
//!
//! ## Example
//!
//! ```
//! use aabbkit::aabb::Aabb;
//! use aabbkit::ray::RaySegment;
//! use aabbkit::scalar::AabbValue;
//! use nalgebra::{Point3, Vector3};
//!
//! let aabb = Aabb::with_bounds(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
//!
//! let segment = RaySegment::new(Point3::new(-1.0, 0.5, 0.5), Vector3::new(2.0, 0.0, 0.0));
//! let hit = segment.intersect_aabb(&aabb);
//! assert_eq!(hit.t, 0.5);
//! assert_eq!(hit.normal, Vector3::new(-1.0, 0.0, 0.0));
//!
//! let stationary = Aabb::with_bounds(Point3::new(2.0, 0.0, 0.0), Point3::new(3.0, 1.0, 1.0));
//! let t = stationary.intersect_moving(&aabb, &Vector3::new(2.0, 0.0, 0.0));
//! assert_eq!(t, 0.5);
//!
//! let miss = stationary.intersect_moving(&aabb, &Vector3::new(0.0, 2.0, 0.0));
//! assert_eq!(miss, f64::NO_INTERSECTION);
//! ```
//!
//! ## Features
//!
//! - `rayon` (default **enabled**) - parallel bounding of large point clouds and box sets
//! - `serde` (default **disabled**) - adds `Serialize` and `Deserialize` implementations for some types
//! - `bench` (default **disabled**) - nightly micro-benchmarks
//!
//! [`Aabb`]: aabb::Aabb
//! [`Aabb::grow`]: aabb::Aabb::grow
//! [`Aabb::join`]: aabb::Aabb::join
//! [`Aabb::transformed`]: aabb::Aabb::transformed
//! [`RaySegment`]: ray::RaySegment
//! [`Plane`]: plane::Plane
//! [`Ball`]: ball::Ball
//! [`AabbValue::NO_INTERSECTION`]: scalar::AabbValue::NO_INTERSECTION

#![deny(missing_docs)]
#![cfg_attr(feature = "bench", feature(test))]

#[cfg(all(feature = "bench", test))]
extern crate test;

pub mod aabb;
pub mod axis;
pub mod ball;
pub mod error;
pub mod plane;
pub mod point_query;
pub mod ray;
pub mod scalar;
mod sweep;
mod utils;

pub use error::{AabbError, Result};
pub use sweep::intersect_moving_aabb;

#[cfg(test)]
mod testbase;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
