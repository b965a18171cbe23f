//! Surface description used by the Phong shader.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB radiance, unclamped until quantization)
pub type Color = Vec3;

/// A Phong material with optional mirror reflection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse albedo (RGB, 0-1)
    pub color: Color,

    /// Fraction of outgoing light that is mirror-reflected, in [0, 1]
    pub reflectivity: f32,

    /// Phong specular exponent, > 0
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5), // Grey default
            reflectivity: 0.0,
            shininess: 32.0,
        }
    }
}

impl Material {
    /// Create a matte material with the given albedo.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the mirror reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Set the Phong exponent.
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Check if this material contributes a mirror bounce.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}
