//! Infinite plane primitive.

use glint_core::Material;
use glint_math::{normalize, Ray, Vec3};

use crate::hittable::{HitRecord, HIT_RANGE};

/// Below this `|n·d|` the ray is treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Intersect `ray` with the plane through `point` with normal `normal`.
///
/// The normal is normalized here and returned as-is, whichever side the
/// ray comes from.
pub fn hit_plane<'a>(
    point: Vec3,
    normal: Vec3,
    material: &'a Material,
    ray: &Ray,
) -> Option<HitRecord<'a>> {
    let normal = normalize(normal);
    let denom = normal.dot(ray.direction);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = (point - ray.origin).dot(normal) / denom;
    if !HIT_RANGE.contains(t) {
        return None;
    }

    Some(HitRecord::new(ray, t, normal, material))
}
