//! Glint Core - scene model for the Glint ray caster.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `Light`, `Primitive`, `Material`
//! - **Scene loading**: JSON parsing and validation
//!
//! A `Scene` is built once, validated, and then treated as read-only for
//! the whole of a render. Nothing in here holds process-wide state.
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("scenes/demo.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitives.len(),
//!     scene.lights.len());
//! ```

pub mod loader;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, SceneError};
pub use material::{Color, Material};
pub use scene::{Camera, Light, Primitive, Scene};
