//! This module holds the [`RaySegment`] definition and its [`Aabb`] intersection tests.
//!
//! [`Aabb`]: crate::aabb::Aabb
mod ray_impl;
mod slab;

pub use self::ray_impl::*;
