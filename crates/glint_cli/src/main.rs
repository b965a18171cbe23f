use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, Scene};
use glint_renderer::{render, RenderConfig};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    log::info!("Starting Glint");

    let scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, rendering the demo scene");
            Scene::demo()
        }
    };

    let config = args.render_config();
    let mut report = |percent: u32| log::info!("Progress: {}%", percent);
    let pixels =
        render(Arc::new(scene), &config, Some(&mut report)).context("Render failed")?;

    save_png(&args.output, &pixels, &config)?;
    log::info!("Image saved as {}", args.output.display());

    Ok(())
}

fn save_png(path: &Path, pixels: &[u8], config: &RenderConfig) -> Result<()> {
    image::save_buffer(
        path,
        pixels,
        config.width,
        config.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write {}", path.display()))
}
