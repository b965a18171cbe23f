//! Glint math kernel.
//!
//! `Vec3` is glam's single-precision vector; add, subtract, scale, dot,
//! cross and length come straight from glam. This crate adds the pieces
//! whose edge-case behaviour the renderer depends on.

// Re-export glam for convenience
pub use glam::*;

mod interval;
mod ray;
mod vector;

pub use interval::Interval;
pub use ray::Ray;
pub use vector::{normalize, reflect};
