//! Sphere primitive for ray tracing.

use glint_core::Material;
use glint_math::{normalize, Ray, Vec3};

use crate::hittable::{HitRecord, HIT_RANGE};

/// Intersect `ray` with a sphere by solving `|O + tD - C|² = r²`.
///
/// The nearer root wins unless it lies within [`HIT_EPSILON`](crate::HIT_EPSILON)
/// of the origin, in which case the farther root is tried (rays starting
/// on or inside the sphere).
pub fn hit_sphere<'a>(
    center: Vec3,
    radius: f32,
    material: &'a Material,
    ray: &Ray,
) -> Option<HitRecord<'a>> {
    let oc = ray.origin - center;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Find the nearest root in the acceptable range
    let mut root = (-b - sqrtd) / (2.0 * a);
    if !HIT_RANGE.surrounds(root) {
        root = (-b + sqrtd) / (2.0 * a);
        if !HIT_RANGE.surrounds(root) {
            return None;
        }
    }

    let p = ray.at(root);
    Some(HitRecord::new(ray, root, normalize(p - center), material))
}
