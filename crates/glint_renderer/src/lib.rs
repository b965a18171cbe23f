//! Glint Renderer - CPU Ray Casting
//!
//! Turns a [`Scene`] into an RGBA8 pixel buffer by casting one ray per
//! pixel, shading hits with Phong lighting and hard shadows, and following
//! mirror reflections up to a fixed depth.
//!
//! Two execution modes produce byte-identical output:
//! - [`render_sequential`] walks the rows in order and can report progress.
//! - [`render_parallel`] splits the image into row bands and renders them on
//!   a fixed-size thread pool.

mod band;
mod camera;
mod cuboid;
mod dispatcher;
mod hittable;
mod plane;
mod renderer;
mod shading;
mod sphere;
mod triangle;

pub use band::{generate_bands, merge_band, render_band, BandRequest, BandResponse, RowBand};
pub use camera::CameraRays;
pub use cuboid::hit_box;
pub use dispatcher::{render, render_parallel, worker_count, RenderError};
pub use hittable::{HitRecord, Hittable, HIT_EPSILON};
pub use plane::hit_plane;
pub use renderer::{
    color_to_rgba, render_pixel, render_rows, render_scene, render_sequential, RenderConfig,
    RenderMode,
};
pub use shading::{shade, trace_ray};
pub use sphere::hit_sphere;
pub use triangle::hit_triangle;

/// Re-export the scene model and math types the renderer speaks in
pub use glint_core::{Camera, Color, Light, Material, Primitive, Scene};
pub use glint_math::{Ray, Vec3};
