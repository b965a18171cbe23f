//! Simple ray casting example.
//!
//! Renders the demo scene both ways, checks the outputs agree, and saves a
//! PPM.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use glint_renderer::{render, RenderConfig, RenderMode, Scene};

fn main() {
    env_logger::init();

    println!("Glint Ray Caster - Simple Example");
    println!("=================================");

    let scene = Arc::new(Scene::demo());
    println!(
        "Scene: {} primitives, {} lights",
        scene.primitives.len(),
        scene.lights.len()
    );

    let config = RenderConfig::new(640, 360).with_max_depth(5);

    let start = std::time::Instant::now();
    let sequential = render(
        Arc::clone(&scene),
        &config.clone().with_mode(RenderMode::Sequential),
        None,
    )
    .expect("Sequential render failed");
    println!("Sequential: {:?}", start.elapsed());

    let start = std::time::Instant::now();
    let parallel = render(scene, &config.clone().with_mode(RenderMode::Parallel), None)
        .expect("Parallel render failed");
    println!("Parallel:   {:?}", start.elapsed());

    assert!(sequential == parallel, "Modes disagree");

    let filename = "output.ppm";
    save_ppm(&parallel, &config, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(pixels: &[u8], config: &RenderConfig, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", config.width, config.height)?;
    writeln!(writer, "255")?;

    for rgba in pixels.chunks_exact(4) {
        writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
    }

    Ok(())
}
