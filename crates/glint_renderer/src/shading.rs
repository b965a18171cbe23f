//! Phong shading with hard shadows and mirror reflection.
//!
//! `trace_ray` is the per-ray state machine:
//! - depth exhausted: black
//! - no intersection: the scene background, untouched
//! - intersection: direct lighting from every light, blended with one
//!   reflected ray per call when the surface is reflective

use glint_core::{Color, Light, Scene};
use glint_math::{normalize, reflect, Ray, Vec3};

use crate::hittable::{HitRecord, Hittable};

/// Offset of shadow-ray origins off the surface, toward the light.
const SHADOW_BIAS: f32 = 0.001;

/// Compute the color seen along `ray` with `depth` bounces remaining.
pub fn trace_ray(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    match scene.hit(ray) {
        Some(rec) => shade(scene, ray, &rec, depth),
        None => scene.background,
    }
}

/// Color leaving the hit point back along `ray`.
///
/// Direct lighting is summed over every light. With reflectivity `r > 0`
/// and more than one bounce left, the result is
/// `local * (1 - r) + reflected * r`.
pub fn shade(scene: &Scene, ray: &Ray, rec: &HitRecord, depth: u32) -> Color {
    let view = -ray.direction;

    let local = scene
        .lights
        .iter()
        .fold(Color::ZERO, |acc, light| acc + direct_light(scene, rec, light, view));

    if rec.material.is_reflective() && depth > 1 {
        let reflectivity = rec.material.reflectivity;
        let reflected = Ray::new(rec.p, normalize(reflect(ray.direction, rec.normal)));
        let bounce = trace_ray(scene, &reflected, depth - 1);
        return local * (1.0 - reflectivity) + bounce * reflectivity;
    }

    local
}

/// Diffuse + specular contribution of one light, or zero if occluded.
fn direct_light(scene: &Scene, rec: &HitRecord, light: &Light, view: Vec3) -> Color {
    let to_light = light.position - rec.p;
    let distance = to_light.length();
    let light_dir = normalize(to_light);

    if is_occluded(scene, rec, light_dir, distance) {
        return Color::ZERO;
    }

    let material = rec.material;
    let diffuse = rec.normal.dot(light_dir).max(0.0);
    let reflected = reflect(-light_dir, rec.normal);
    let specular = view.dot(reflected).max(0.0).powf(material.shininess);
    let attenuation = 1.0 / (1.0 + 0.1 * distance + 0.01 * distance * distance);

    (material.color * diffuse + Color::splat(specular)) * light.color * light.intensity * attenuation
}

/// Binary visibility: anything between the surface and the light blocks it.
///
/// The shadow ray starts just off the surface on the light's side: the
/// normal is negated first when the light is behind it.
fn is_occluded(scene: &Scene, rec: &HitRecord, light_dir: Vec3, distance: f32) -> bool {
    let toward_light = if rec.normal.dot(light_dir) >= 0.0 {
        rec.normal
    } else {
        -rec.normal
    };
    let shadow_ray = Ray::new(rec.p + toward_light * SHADOW_BIAS, light_dir);

    scene
        .hit(&shadow_ray)
        .is_some_and(|blocker| blocker.t < distance)
}
