//! Hittable trait and HitRecord for ray-object intersection.

use glint_core::{Material, Primitive, Scene};
use glint_math::{Interval, Ray, Vec3};

use crate::{cuboid::hit_box, plane::hit_plane, sphere::hit_sphere, triangle::hit_triangle};

/// Hits closer than this along the ray are treated as self-intersection.
pub const HIT_EPSILON: f32 = 0.001;

/// Accepted range of ray parameters for every primitive test.
pub(crate) const HIT_RANGE: Interval = Interval::new(HIT_EPSILON, f32::INFINITY);

/// Record of a ray-object intersection.
///
/// A miss is `None` at every call site; [`HitRecord::MISS_DISTANCE`] is the
/// distance a miss would have.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection. Not flipped toward the ray.
    pub normal: Vec3,
    /// Material of the primitive that was struck
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    pub const MISS_DISTANCE: f32 = f32::INFINITY;

    pub fn new(ray: &Ray, t: f32, normal: Vec3, material: &'a Material) -> Self {
        Self {
            t,
            p: ray.at(t),
            normal,
            material,
        }
    }
}

/// Trait for things that can be hit by rays.
pub trait Hittable {
    /// Nearest intersection of `ray` with this object, if any.
    fn hit<'a>(&'a self, ray: &Ray) -> Option<HitRecord<'a>>;
}

impl Hittable for Primitive {
    fn hit<'a>(&'a self, ray: &Ray) -> Option<HitRecord<'a>> {
        match self {
            Primitive::Sphere {
                center,
                radius,
                material,
            } => hit_sphere(*center, *radius, material, ray),
            Primitive::Plane {
                point,
                normal,
                material,
            } => hit_plane(*point, *normal, material, ray),
            Primitive::Triangle {
                v0,
                v1,
                v2,
                material,
            } => hit_triangle(*v0, *v1, *v2, material, ray),
            Primitive::Box { min, max, material } => hit_box(*min, *max, material, ray),
            Primitive::Unknown => None,
        }
    }
}

impl Hittable for Scene {
    /// Linear scan over every primitive. On exactly equal distances the
    /// primitive listed first wins.
    fn hit<'a>(&'a self, ray: &Ray) -> Option<HitRecord<'a>> {
        let mut closest = None;
        let mut closest_so_far = HitRecord::MISS_DISTANCE;

        for primitive in &self.primitives {
            if let Some(rec) = primitive.hit(ray) {
                if rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Camera, Color};

    fn scene_with(primitives: Vec<Primitive>) -> Scene {
        let mut scene = Scene::new(Camera::default());
        for p in primitives {
            scene.add_primitive(p);
        }
        scene
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let near = Material::new(Color::new(1.0, 0.0, 0.0));
        let far = Material::new(Color::new(0.0, 0.0, 1.0));
        let scene = scene_with(vec![
            Primitive::sphere(Vec3::new(0.0, 0.0, -10.0), 1.0, far),
            Primitive::sphere(Vec3::new(0.0, 0.0, -4.0), 1.0, near),
        ]);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&ray).unwrap();

        assert!((rec.t - 3.0).abs() < 1e-5);
        assert_eq!(*rec.material, near);
    }

    #[test]
    fn test_equal_distance_keeps_first() {
        let first = Material::new(Color::new(1.0, 0.0, 0.0));
        let second = Material::new(Color::new(0.0, 1.0, 0.0));
        let scene = scene_with(vec![
            Primitive::plane(Vec3::new(0.0, 0.0, -2.0), Vec3::Z, first),
            Primitive::plane(Vec3::new(0.0, 0.0, -2.0), Vec3::Z, second),
        ]);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(*scene.hit(&ray).unwrap().material, first);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = scene_with(Vec::new());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(scene.hit(&ray).is_none());
    }

    #[test]
    fn test_unknown_primitive_never_hits() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(Primitive::Unknown.hit(&ray).is_none());

        // Unknown entries are skipped, later ones still hit
        let scene = scene_with(vec![
            Primitive::Unknown,
            Primitive::sphere(Vec3::ZERO, 1.0, Material::default()),
        ]);
        assert!((scene.hit(&ray).unwrap().t - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_dispatch_reaches_every_shape() {
        let m = Material::default();
        let ray = Ray::new(Vec3::new(0.2, 0.2, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let shapes = [
            Primitive::sphere(Vec3::ZERO, 1.0, m),
            Primitive::plane(Vec3::ZERO, Vec3::Z, m),
            Primitive::triangle(
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                m,
            ),
            Primitive::aabox(Vec3::splat(-1.0), Vec3::splat(1.0), m),
        ];

        for shape in &shapes {
            assert!(shape.hit(&ray).is_some(), "{} should be hit", shape.kind());
        }
    }
}
