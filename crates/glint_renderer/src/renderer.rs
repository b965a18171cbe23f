//! Sequential renderer and output quantization.
//!
//! Output is always RGBA8, row-major, top row first, alpha 255.

use std::ops::Range;
use std::time::Instant;

use glint_core::{Color, Scene};
use glint_math::Interval;
use serde::{Deserialize, Serialize};

use crate::camera::CameraRays;
use crate::shading::trace_ray;

/// Rows between progress reports in the sequential path.
const PROGRESS_INTERVAL: u32 = 10;

/// Rows between cooperative yields in the sequential path.
const YIELD_INTERVAL: u32 = 50;

const CHANNEL_RANGE: Interval = Interval::new(0.0, 255.0);

/// How the image is computed. Both modes give identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One task, rows in order, with progress reporting
    Sequential,
    /// Row bands on a fixed-size thread pool
    #[default]
    Parallel,
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Maximum trace depth; 0 renders black, 1 disables reflections
    pub max_depth: u32,
    /// Execution mode
    pub mode: RenderMode,
    /// Worker count for the parallel mode; `None` uses available parallelism
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_depth: 5,
            mode: RenderMode::default(),
            threads: None,
        }
    }
}

impl RenderConfig {
    /// Create a configuration for a `width`×`height` image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the maximum trace depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the execution mode.
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Pin the parallel worker count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Bytes in one output row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }

    /// Bytes in the whole output buffer.
    pub fn buffer_len(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}

/// Convert a color to 8-bit RGBA: `min(255, max(0, c * 255))`, truncated.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let quantize = |c: f32| CHANNEL_RANGE.clamp(c * 255.0) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z), 255]
}

/// Trace the primary ray for pixel (x, y).
pub fn render_pixel(scene: &Scene, rays: &CameraRays, x: u32, y: u32, max_depth: u32) -> [u8; 4] {
    let ray = rays.ray_for_pixel(x, y);
    color_to_rgba(trace_ray(scene, &ray, max_depth))
}

/// Render a contiguous range of full-width rows.
pub fn render_rows(
    scene: &Scene,
    rays: &CameraRays,
    width: u32,
    rows: Range<u32>,
    max_depth: u32,
) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(rows.len() * width as usize * 4);

    for y in rows {
        for x in 0..width {
            pixels.extend_from_slice(&render_pixel(scene, rays, x, y, max_depth));
        }
    }

    pixels
}

/// Render the scene to an RGBA8 buffer on the calling thread.
pub fn render_scene(scene: &Scene, width: u32, height: u32, max_depth: u32) -> Vec<u8> {
    let config = RenderConfig::new(width, height)
        .with_max_depth(max_depth)
        .with_mode(RenderMode::Sequential);
    render_sequential(scene, &config, None)
}

/// Render row by row, reporting percent complete every few rows.
///
/// `progress` receives non-decreasing values ending with 100. The thread
/// yields periodically so a host sharing it is not starved. There is no
/// way to cancel; drop the result to abandon it.
pub fn render_sequential(
    scene: &Scene,
    config: &RenderConfig,
    mut progress: Option<&mut dyn FnMut(u32)>,
) -> Vec<u8> {
    let start = Instant::now();
    let (width, height) = (config.width, config.height);
    log::info!(
        "Rendering {}x{} sequentially, max depth {}",
        width,
        height,
        config.max_depth
    );

    let rays = CameraRays::new(&scene.camera, width, height);
    let mut pixels = Vec::with_capacity(config.buffer_len());

    for y in 0..height {
        if y % PROGRESS_INTERVAL == 0 {
            let percent = (u64::from(y) * 100 / u64::from(height)) as u32;
            log::debug!("Row {}/{} ({}%)", y, height, percent);
            if let Some(report) = progress.as_deref_mut() {
                report(percent);
            }
        }
        if y > 0 && y % YIELD_INTERVAL == 0 {
            std::thread::yield_now();
        }

        pixels.extend(render_rows(scene, &rays, width, y..y + 1, config.max_depth));
    }

    if let Some(report) = progress {
        report(100);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    pixels
}
