//! Scene types for Glint.
//!
//! A scene is a camera, a set of point lights, a flat list of primitives and
//! a background color. The renderer borrows it read-only; the parallel
//! dispatcher shares one instance across every worker behind an `Arc`.

use glint_math::{normalize, Vec3};
use serde::{Deserialize, Serialize};

use crate::loader::SceneError;
use crate::material::{Color, Material};

/// A pinhole camera. The up vector is always world-up (+Y).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,

    /// Look-at point
    pub target: Vec3,

    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 5.0),
            target: Vec3::ZERO,
            fov: 60.0,
        }
    }
}

impl Camera {
    /// Create a new camera.
    pub fn new(position: Vec3, target: Vec3, fov: f32) -> Self {
        Self {
            position,
            target,
            fov,
        }
    }

    /// Unit view direction, or zero when position and target coincide.
    pub fn forward(&self) -> Vec3 {
        normalize(self.target - self.position)
    }

    /// True when no camera basis can be built against world-up: the view
    /// direction is zero or parallel to +Y. Every pixel of such a camera
    /// gets the same ray, or a ray with zero direction.
    pub fn is_degenerate(&self) -> bool {
        self.forward().cross(Vec3::Y).length_squared() == 0.0
    }
}

/// A point light.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,

    #[serde(default = "white")]
    pub color: Color,

    #[serde(default = "unit_intensity")]
    pub intensity: f32,
}

fn white() -> Color {
    Color::ONE
}

fn unit_intensity() -> f32 {
    1.0
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

/// A renderable primitive.
///
/// The variant set is closed. `Unknown` stands for a primitive whose type
/// tag was not recognized when the scene was read; it never intersects
/// anything, so the object simply does not appear.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Sphere {
        center: Vec3,
        radius: f32,
        #[serde(default)]
        material: Material,
    },
    Plane {
        point: Vec3,
        /// Need not be unit length; normalized before use
        normal: Vec3,
        #[serde(default)]
        material: Material,
    },
    Triangle {
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        #[serde(default)]
        material: Material,
    },
    /// Axis-aligned box
    Box {
        min: Vec3,
        max: Vec3,
        #[serde(default)]
        material: Material,
    },
    #[serde(other)]
    Unknown,
}

impl Primitive {
    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self::Sphere {
            center,
            radius,
            material,
        }
    }

    pub fn plane(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self::Plane {
            point,
            normal,
            material,
        }
    }

    pub fn triangle(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self::Triangle {
            v0,
            v1,
            v2,
            material,
        }
    }

    pub fn aabox(min: Vec3, max: Vec3, material: Material) -> Self {
        Self::Box { min, max, material }
    }

    /// Material of the primitive, `None` for `Unknown`.
    pub fn material(&self) -> Option<&Material> {
        match self {
            Self::Sphere { material, .. }
            | Self::Plane { material, .. }
            | Self::Triangle { material, .. }
            | Self::Box { material, .. } => Some(material),
            Self::Unknown => None,
        }
    }

    /// Short type name, for logs and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "sphere",
            Self::Plane { .. } => "plane",
            Self::Triangle { .. } => "triangle",
            Self::Box { .. } => "box",
            Self::Unknown => "unknown",
        }
    }

    /// Check the geometric and material invariants of a single primitive.
    fn validate(&self, index: usize) -> Result<(), SceneError> {
        let what = || format!("primitives[{}] ({})", index, self.kind());

        let points: Vec<Vec3> = match self {
            Self::Sphere { center, radius, .. } => {
                if !(radius.is_finite() && *radius > 0.0) {
                    return Err(SceneError::invalid(what(), "sphere radius must be positive"));
                }
                vec![*center]
            }
            Self::Plane { point, normal, .. } => {
                if normal.length_squared() == 0.0 {
                    return Err(SceneError::invalid(what(), "plane normal must be non-zero"));
                }
                vec![*point, *normal]
            }
            Self::Triangle { v0, v1, v2, .. } => vec![*v0, *v1, *v2],
            Self::Box { min, max, .. } => {
                if min.cmpgt(*max).any() {
                    return Err(SceneError::invalid(what(), "box min must be <= max on every axis"));
                }
                vec![*min, *max]
            }
            Self::Unknown => return Ok(()),
        };

        if !points.iter().all(|p| p.is_finite()) {
            return Err(SceneError::invalid(what(), "coordinates must be finite"));
        }

        if let Some(material) = self.material() {
            validate_material(material).map_err(|reason| SceneError::invalid(what(), reason))?;
        }

        Ok(())
    }
}

fn validate_material(material: &Material) -> Result<(), &'static str> {
    if !material.color.is_finite() || material.color.min_element() < 0.0 {
        return Err("material color must be finite and non-negative");
    }
    if !(0.0..=1.0).contains(&material.reflectivity) {
        return Err("material reflectivity must be in [0, 1]");
    }
    if !(material.shininess.is_finite() && material.shininess > 0.0) {
        return Err("material shininess must be positive");
    }
    Ok(())
}

/// A complete scene.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub camera: Camera,

    /// Contributions sum, so order does not matter
    #[serde(default)]
    pub lights: Vec<Light>,

    /// Order only breaks exact distance ties (first wins)
    #[serde(default)]
    pub primitives: Vec<Primitive>,

    /// Returned as-is for rays that escape the scene
    #[serde(default)]
    pub background: Color,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            ..Default::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add a primitive to the scene and return its index.
    pub fn add_primitive(&mut self, primitive: Primitive) -> usize {
        self.primitives.push(primitive);
        self.primitives.len() - 1
    }

    /// Number of primitives the renderer can actually hit.
    pub fn renderable_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| !matches!(p, Primitive::Unknown))
            .count()
    }

    /// Check the structural invariants the renderer relies on.
    ///
    /// A degenerate camera is reported in the log but accepted; see
    /// [`Camera::is_degenerate`] for what it renders.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.camera.position.is_finite() && self.camera.target.is_finite()) {
            return Err(SceneError::invalid("camera", "position and target must be finite"));
        }
        if !(self.camera.fov > 0.0 && self.camera.fov < 180.0) {
            return Err(SceneError::invalid("camera", "fov must be in (0, 180) degrees"));
        }
        if self.camera.is_degenerate() {
            log::warn!(
                "Camera at {:?} looking at {:?} has no basis against world-up; every pixel will see the same ray",
                self.camera.position,
                self.camera.target
            );
        }

        for (i, light) in self.lights.iter().enumerate() {
            let what = || format!("lights[{}]", i);
            if !(light.position.is_finite() && light.color.is_finite()) {
                return Err(SceneError::invalid(what(), "position and color must be finite"));
            }
            if !(light.intensity.is_finite() && light.intensity >= 0.0) {
                return Err(SceneError::invalid(what(), "intensity must be >= 0"));
            }
        }

        for (i, primitive) in self.primitives.iter().enumerate() {
            primitive.validate(i)?;
        }

        if !self.background.is_finite() {
            return Err(SceneError::invalid("background", "color must be finite"));
        }

        Ok(())
    }

    /// The built-in demo scene: a floor, a red sphere, a mirror sphere,
    /// a triangle and a box under two lights.
    pub fn demo() -> Self {
        let mut scene = Scene::new(Camera::default()).with_background(Color::new(0.1, 0.12, 0.18));

        scene.add_primitive(Primitive::plane(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Y,
            Material::new(Color::new(0.6, 0.6, 0.6))
                .with_reflectivity(0.1)
                .with_shininess(8.0),
        ));
        scene.add_primitive(Primitive::sphere(
            Vec3::ZERO,
            1.0,
            Material::new(Color::new(0.9, 0.1, 0.1)),
        ));
        scene.add_primitive(Primitive::sphere(
            Vec3::new(-2.2, 0.0, -1.0),
            1.0,
            Material::new(Color::new(0.9, 0.9, 0.9))
                .with_reflectivity(0.6)
                .with_shininess(128.0),
        ));
        scene.add_primitive(Primitive::triangle(
            Vec3::new(1.5, -1.0, -1.0),
            Vec3::new(3.5, -1.0, -1.0),
            Vec3::new(2.5, 1.2, -1.5),
            Material::new(Color::new(0.2, 0.3, 0.9)),
        ));
        scene.add_primitive(Primitive::aabox(
            Vec3::new(1.5, -1.0, 0.8),
            Vec3::new(2.5, 0.0, 1.8),
            Material::new(Color::new(0.2, 0.8, 0.3)).with_shininess(16.0),
        ));

        scene.add_light(Light::new(Vec3::new(5.0, 5.0, 5.0), Color::ONE, 1.5));
        scene.add_light(Light::new(
            Vec3::new(-4.0, 6.0, 3.0),
            Color::new(1.0, 0.9, 0.8),
            1.0,
        ));

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_scene_is_valid() {
        let scene = Scene::demo();

        assert!(scene.validate().is_ok());
        assert_eq!(scene.primitives.len(), 5);
        assert_eq!(scene.renderable_count(), 5);
        assert_eq!(scene.lights.len(), 2);
    }

    #[test]
    fn test_camera_forward() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 60.0);
        assert_eq!(camera.forward(), Vec3::new(0.0, 0.0, -1.0));
        assert!(!camera.is_degenerate());
    }

    #[test]
    fn test_camera_degenerate() {
        let straight_down = Camera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, 60.0);
        assert!(straight_down.is_degenerate());

        let coincident = Camera::new(Vec3::ONE, Vec3::ONE, 60.0);
        assert_eq!(coincident.forward(), Vec3::ZERO);
        assert!(coincident.is_degenerate());

        // Accepted by validation, only logged
        assert!(Scene::new(straight_down).validate().is_ok());
    }

    #[test]
    fn test_primitive_material() {
        let sphere = Primitive::sphere(Vec3::ZERO, 1.0, Material::default());
        assert_eq!(sphere.material(), Some(&Material::default()));
        assert_eq!(sphere.kind(), "sphere");

        assert_eq!(Primitive::Unknown.material(), None);
    }

    #[test]
    fn test_validate_rejects_bad_sphere() {
        let mut scene = Scene::default();
        scene.add_primitive(Primitive::sphere(Vec3::ZERO, 0.0, Material::default()));

        let err = scene.validate().unwrap_err();
        assert!(err.to_string().contains("primitives[0]"));
    }

    #[test]
    fn test_validate_rejects_inverted_box() {
        let mut scene = Scene::default();
        scene.add_primitive(Primitive::aabox(Vec3::ONE, Vec3::ZERO, Material::default()));

        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_material() {
        let mut scene = Scene::default();
        scene.add_primitive(Primitive::plane(
            Vec3::ZERO,
            Vec3::Y,
            Material::default().with_reflectivity(1.5),
        ));
        assert!(scene.validate().is_err());

        let mut scene = Scene::default();
        scene.add_primitive(Primitive::plane(
            Vec3::ZERO,
            Vec3::Y,
            Material::default().with_shininess(0.0),
        ));
        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_light() {
        let mut scene = Scene::default();
        scene.add_light(Light::new(Vec3::ONE, Color::ONE, -1.0));

        assert!(scene.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_unknown_primitive() {
        let mut scene = Scene::default();
        scene.add_primitive(Primitive::Unknown);

        assert!(scene.validate().is_ok());
        assert_eq!(scene.renderable_count(), 0);
    }
}
