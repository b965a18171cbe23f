//! Axis-aligned box primitive.
//!
//! Slab test against the three pairs of axis-aligned planes. A zero direction
//! component makes its reciprocal infinite and that axis' slab parameters
//! become ±infinity, which the min/max reduction absorbs.

use glint_core::Material;
use glint_math::{Ray, Vec3};

use crate::hittable::{HitRecord, HIT_EPSILON};

/// How far past a half-extent a hit point may sit and still claim that face.
const FACE_BIAS: f32 = 1.0001;

/// Intersect `ray` with the box spanning `min`..`max`.
pub fn hit_box<'a>(min: Vec3, max: Vec3, material: &'a Material, ray: &Ray) -> Option<HitRecord<'a>> {
    let inv = Vec3::new(
        1.0 / ray.direction.x,
        1.0 / ray.direction.y,
        1.0 / ray.direction.z,
    );

    let t0 = (min - ray.origin) * inv;
    let t1 = (max - ray.origin) * inv;

    let t_near = t0.x.min(t1.x).max(t0.y.min(t1.y)).max(t0.z.min(t1.z));
    let t_far = t0.x.max(t1.x).min(t0.y.max(t1.y)).min(t0.z.max(t1.z));

    if t_far < 0.0 || t_near > t_far || t_near < HIT_EPSILON {
        return None;
    }

    let p = ray.at(t_near);
    Some(HitRecord::new(ray, t_near, box_normal(min, max, p), material))
}

/// Face normal at a point on the box surface.
///
/// Axes are checked x, then y, then z; the first whose offset from the
/// center reaches its half-extent (within `FACE_BIAS`) wins. Near edges and
/// corners this can name a face the ray did not actually cross. If no axis
/// qualifies the x-axis sign is used.
fn box_normal(min: Vec3, max: Vec3, p: Vec3) -> Vec3 {
    let center = (min + max) * 0.5;
    let half = (max - min) * 0.5;
    let local = p - center;

    if local.x.abs() * FACE_BIAS >= half.x {
        Vec3::new(local.x.signum(), 0.0, 0.0)
    } else if local.y.abs() * FACE_BIAS >= half.y {
        Vec3::new(0.0, local.y.signum(), 0.0)
    } else if local.z.abs() * FACE_BIAS >= half.z {
        Vec3::new(0.0, 0.0, local.z.signum())
    } else {
        Vec3::new(local.x.signum(), 0.0, 0.0)
    }
}
