use crate::Vec3;

/// A half-line `origin + t * direction`, `t >= 0`.
///
/// Primary, shadow and reflection rays all carry a unit direction so that
/// `t` is a distance. A zero direction is allowed and simply never hits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}
