//! Row-band decomposition for parallel rendering.
//!
//! The image is cut into contiguous bands of full rows. Each band is an
//! independent unit of work: it reads the shared scene and writes only its
//! own pixels. A response carries its row range, so bands can be merged in
//! whatever order they finish.

use std::sync::Arc;

use glint_core::Scene;

use crate::camera::CameraRays;
use crate::renderer::{render_rows, RenderConfig};

/// A contiguous range of image rows, `start_row..end_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    pub start_row: u32,
    pub end_row: u32,
    /// Index of this band, top to bottom
    pub index: usize,
}

impl RowBand {
    /// Create a new band.
    pub fn new(start_row: u32, end_row: u32, index: usize) -> Self {
        Self {
            start_row,
            end_row,
            index,
        }
    }

    /// Number of rows in this band.
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row
    }
}

/// Split `height` rows into at most `count` contiguous bands.
///
/// Bands differ in size by at most one row, the larger ones first. No band
/// is empty, so fewer than `count` bands come back for short images.
pub fn generate_bands(height: u32, count: usize) -> Vec<RowBand> {
    let count = (count.max(1) as u64).min(u64::from(height)) as u32;
    if count == 0 {
        return Vec::new();
    }

    let base = height / count;
    let extra = height % count;

    let mut bands = Vec::with_capacity(count as usize);
    let mut start = 0;
    for i in 0..count {
        let rows = base + u32::from(i < extra);
        bands.push(RowBand::new(start, start + rows, i as usize));
        start += rows;
    }

    bands
}

/// Everything a worker needs to render one band.
#[derive(Debug, Clone)]
pub struct BandRequest {
    pub scene: Arc<Scene>,
    pub width: u32,
    pub height: u32,
    pub start_row: u32,
    pub end_row: u32,
    pub max_depth: u32,
}

impl BandRequest {
    /// Build the request for `band` of an image described by `config`.
    pub fn new(scene: Arc<Scene>, config: &RenderConfig, band: &RowBand) -> Self {
        Self {
            scene,
            width: config.width,
            height: config.height,
            start_row: band.start_row,
            end_row: band.end_row,
            max_depth: config.max_depth,
        }
    }
}

/// Result of rendering a band.
#[derive(Debug, Clone)]
pub struct BandResponse {
    pub start_row: u32,
    pub end_row: u32,
    /// RGBA8 pixels for rows `start_row..end_row`
    pub pixels: Vec<u8>,
}

/// Render a single band. One request yields exactly one response.
pub fn render_band(request: &BandRequest) -> BandResponse {
    log::debug!(
        "Rendering rows {}..{} on {:?}",
        request.start_row,
        request.end_row,
        std::thread::current().name()
    );

    let rays = CameraRays::new(&request.scene.camera, request.width, request.height);
    let pixels = render_rows(
        &request.scene,
        &rays,
        request.width,
        request.start_row..request.end_row,
        request.max_depth,
    );

    BandResponse {
        start_row: request.start_row,
        end_row: request.end_row,
        pixels,
    }
}

/// Copy a band's pixels into the full image at its row offset.
pub fn merge_band(image: &mut [u8], width: u32, response: &BandResponse) {
    let row_bytes = width as usize * 4;
    let offset = response.start_row as usize * row_bytes;
    image[offset..offset + response.pixels.len()].copy_from_slice(&response.pixels);
}
