//! Example: Load and inspect a JSON scene.
//!
//! Run with: cargo run --example load_scene -- scenes/demo.json

use std::env;

use glint_core::{load_scene, Primitive};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene.json>");
        println!("\nExamples:");
        println!("  cargo run --example load_scene -- scenes/demo.json");
        println!("  cargo run --example load_scene -- scenes/mirrors.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let camera = &scene.camera;
            println!("\n=== Camera ===");
            println!(
                "  From ({:.2}, {:.2}, {:.2}) to ({:.2}, {:.2}, {:.2}), fov {:.1}",
                camera.position.x,
                camera.position.y,
                camera.position.z,
                camera.target.x,
                camera.target.y,
                camera.target.z,
                camera.fov
            );
            if camera.is_degenerate() {
                println!("  WARNING: view direction is parallel to world-up");
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] at ({:.2}, {:.2}, {:.2}) intensity {:.2}",
                    i, light.position.x, light.position.y, light.position.z, light.intensity
                );
            }

            println!("\n--- Primitives ---");
            for (i, primitive) in scene.primitives.iter().enumerate() {
                match (primitive, primitive.material()) {
                    (Primitive::Unknown, _) | (_, None) => {
                        println!("  [{}] unknown type (skipped at render time)", i)
                    }
                    (p, Some(m)) => println!(
                        "  [{}] {} - reflectivity {:.2}, shininess {:.1}",
                        i,
                        p.kind(),
                        m.reflectivity,
                        m.shininess
                    ),
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
        }
    }
}
