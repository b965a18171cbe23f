/// A range of ray parameters or channel values between `min` and `max`.
///
/// Intersection tests use it with an infinite upper bound; quantization uses
/// it as a `[0, 255]` clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `min <= x <= max`
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// `min < x < max`
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Pull `x` into `[min, max]`. NaN lands on `min`.
    pub fn clamp(&self, x: f32) -> f32 {
        x.max(self.min).min(self.max)
    }
}
