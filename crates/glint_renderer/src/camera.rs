//! Camera ray generation.

use glint_core::Camera;
use glint_math::{normalize, Ray, Vec3};

/// World-up. The camera has no roll.
const WORLD_UP: Vec3 = Vec3::Y;

/// Precomputed camera basis for a given image size.
///
/// If the view direction is parallel to world-up, `right` and `up` collapse
/// to zero and every pixel gets the same ray along the view direction. If
/// position and target coincide, every ray has zero direction. Neither
/// case is corrected here.
#[derive(Debug, Clone, Copy)]
pub struct CameraRays {
    origin: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    width: f32,
    height: f32,
    aspect: f32,
    scale: f32,
}

impl CameraRays {
    /// Build the camera basis for a `width`×`height` image.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let forward = normalize(camera.target - camera.position);
        let right = normalize(forward.cross(WORLD_UP));
        let up = right.cross(forward);

        Self {
            origin: camera.position,
            forward,
            right,
            up,
            width: width as f32,
            height: height as f32,
            aspect: width as f32 / height as f32,
            scale: (camera.fov.to_radians() * 0.5).tan(),
        }
    }

    /// Primary ray through the center of pixel (x, y). Row 0 is the top.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let ndc_x = (x as f32 + 0.5) / self.width;
        let ndc_y = (y as f32 + 0.5) / self.height;

        let screen_x = (2.0 * ndc_x - 1.0) * self.aspect * self.scale;
        let screen_y = (1.0 - 2.0 * ndc_y) * self.scale;

        let direction = normalize(self.forward + self.right * screen_x + self.up * screen_y);
        Ray::new(self.origin, direction)
    }

    /// Camera basis as (forward, right, up).
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.forward, self.right, self.up)
    }
}
