//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use glint_core::Material;
use glint_math::{normalize, Ray, Vec3};

use crate::hittable::{HitRecord, HIT_RANGE};

/// Below this determinant the ray is treated as parallel to the triangle.
const PARALLEL_EPSILON: f32 = 1e-4;

/// Möller-Trumbore ray-triangle intersection.
///
/// The normal is the flat face normal `normalize(e1 × e2)`, so it depends on
/// vertex winding and is reported unchanged for hits on the back face.
pub fn hit_triangle<'a>(
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    material: &'a Material,
    ray: &Ray,
) -> Option<HitRecord<'a>> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < PARALLEL_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);

    // Check if intersection is outside triangle (u parameter)
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    // Check if intersection is outside triangle (v parameter)
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if !HIT_RANGE.contains(t) {
        return None;
    }

    Some(HitRecord::new(ray, t, normalize(edge1.cross(edge2)), material))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Triangle in XY plane at z=-1, counter-clockwise seen from +Z
    const V0: Vec3 = Vec3::new(-1.0, -1.0, -1.0);
    const V1: Vec3 = Vec3::new(1.0, -1.0, -1.0);
    const V2: Vec3 = Vec3::new(0.0, 1.0, -1.0);

    #[test]
    fn test_triangle_hit() {
        let material = Material::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = hit_triangle(V0, V1, V2, &material, &ray).unwrap();
        assert!((rec.t - 1.0).abs() < 1e-6);
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_triangle_miss() {
        let material = Material::default();

        // Ray pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(hit_triangle(V0, V1, V2, &material, &ray).is_none());

        // Outside the edges
        let ray = Ray::new(Vec3::new(0.9, 0.9, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(hit_triangle(V0, V1, V2, &material, &ray).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let material = Material::default();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::X);
        assert!(hit_triangle(V0, V1, V2, &material, &ray).is_none());
    }

    #[test]
    fn test_triangle_back_face_keeps_winding_normal() {
        let material = Material::default();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -3.0), Vec3::Z);

        let rec = hit_triangle(V0, V1, V2, &material, &ray).unwrap();
        assert!((rec.t - 2.0).abs() < 1e-6);
        // Same normal as a front hit, pointing toward +Z (away from this ray's origin)
        assert!((rec.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_triangle_reversed_winding_flips_normal() {
        let material = Material::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let rec = hit_triangle(V0, V2, V1, &material, &ray).unwrap();
        assert!((rec.normal + Vec3::Z).length() < 1e-6);
    }
}
