//! Parallel render dispatch.
//!
//! One job per row band goes onto a fixed-size rayon pool. Every job holds
//! its own `Arc` to the scene and sends a [`BandResponse`] back over a
//! channel; the dispatcher waits for all of them and places each band by
//! its row offset, so completion order never affects the output.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

use glint_core::Scene;
use thiserror::Error;

use crate::band::{generate_bands, merge_band, render_band, BandRequest, BandResponse};
use crate::renderer::{render_sequential, RenderConfig, RenderMode};

/// Errors from the parallel dispatcher.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to start render workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Band for rows {start_row}..{end_row} never reported back")]
    MissingBand { start_row: u32, end_row: u32 },
}

/// Number of workers (and bands) the parallel mode will use.
pub fn worker_count(config: &RenderConfig) -> usize {
    config
        .threads
        .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()))
        .max(1)
}

/// Render with whichever mode `config` asks for.
///
/// `progress` gets row-level percentages in sequential mode. The parallel
/// mode only reports 100 once the image is complete.
pub fn render(
    scene: Arc<Scene>,
    config: &RenderConfig,
    progress: Option<&mut dyn FnMut(u32)>,
) -> Result<Vec<u8>, RenderError> {
    match config.mode {
        RenderMode::Sequential => Ok(render_sequential(&scene, config, progress)),
        RenderMode::Parallel => {
            let image = render_parallel(scene, config)?;
            if let Some(report) = progress {
                report(100);
            }
            Ok(image)
        }
    }
}

/// Render the image as row bands on a dedicated thread pool.
///
/// The call returns once every band is merged. A band whose worker panics
/// is reported as [`RenderError::MissingBand`].
pub fn render_parallel(scene: Arc<Scene>, config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
    dispatch_bands(scene, config, render_band)
}

fn dispatch_bands(
    scene: Arc<Scene>,
    config: &RenderConfig,
    band_renderer: fn(&BandRequest) -> BandResponse,
) -> Result<Vec<u8>, RenderError> {
    let mut image = vec![0u8; config.buffer_len()];
    if image.is_empty() {
        return Ok(image);
    }

    let start = Instant::now();
    let workers = worker_count(config);
    let bands = generate_bands(config.height, workers);
    log::info!(
        "Rendering {}x{} in {} bands on {} threads, max depth {}",
        config.width,
        config.height,
        bands.len(),
        workers,
        config.max_depth
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("glint-band-{}", i))
        .build()?;

    let (tx, rx) = mpsc::channel();
    for band in &bands {
        let request = BandRequest::new(Arc::clone(&scene), config, band);
        let tx = tx.clone();
        pool.spawn(move || {
            // An uncaught panic here would abort the whole process
            let result = panic::catch_unwind(AssertUnwindSafe(|| band_renderer(&request)));
            let (start_row, end_row) = (request.start_row, request.end_row);
            // Release the scene before reporting back
            drop(request);

            match result {
                // The receiver is only gone if the dispatcher already bailed out
                Ok(response) => {
                    let _ = tx.send(response);
                }
                Err(_) => log::error!("Worker for rows {}..{} panicked", start_row, end_row),
            }
        });
    }
    drop(tx);

    let mut merged = vec![false; bands.len()];
    for response in rx {
        merge_band(&mut image, config.width, &response);
        if let Some(i) = bands.iter().position(|b| b.start_row == response.start_row) {
            merged[i] = true;
        }
        log::debug!("Merged rows {}..{}", response.start_row, response.end_row);
    }

    if let Some(band) = bands.iter().zip(&merged).find(|(_, done)| !**done).map(|(b, _)| b) {
        return Err(RenderError::MissingBand {
            start_row: band.start_row,
            end_row: band.end_row,
        });
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
