//! JSON scene loading.
//!
//! ```json
//! {
//!   "camera": { "position": [0, 1, 5], "target": [0, 0, 0], "fov": 60 },
//!   "lights": [{ "position": [5, 5, 5], "color": [1, 1, 1], "intensity": 1.5 }],
//!   "primitives": [
//!     { "type": "sphere", "center": [0, 0, 0], "radius": 1,
//!       "material": { "color": [0.9, 0.1, 0.1], "reflectivity": 0, "shininess": 32 } }
//!   ],
//!   "background": [0.1, 0.12, 0.18]
//! }
//! ```
//!
//! Any failure here is reported before a render is attempted. Unrecognized
//! primitive types are not failures: they load as [`Primitive::Unknown`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scene::{Primitive, Scene};

/// Errors from reading or validating a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed scene description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {what}: {reason}")]
    Invalid { what: String, reason: String },
}

impl SceneError {
    pub(crate) fn invalid(what: impl Into<String>, reason: impl Into<String>) -> Self {
        SceneError::Invalid {
            what: what.into(),
            reason: reason.into(),
        }
    }
}

/// Load and validate a scene from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    log::info!("Loading scene: {}", path.display());

    let source = fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_scene_from_str(&source)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(source: &str) -> Result<Scene, SceneError> {
    let scene: Scene = serde_json::from_str(source)?;

    let unknown = scene
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Unknown))
        .count();
    if unknown > 0 {
        log::warn!(
            "Scene contains {} primitive(s) of unrecognized type; they will not be rendered",
            unknown
        );
    }

    scene.validate()?;

    log::info!(
        "Scene loaded: {} primitives ({} renderable), {} lights",
        scene.primitives.len(),
        scene.renderable_count(),
        scene.lights.len()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Material};
    use glint_math::Vec3;

    const SCENE: &str = r#"{
        "camera": { "position": [0, 1, 5], "target": [0, 0, 0], "fov": 60 },
        "lights": [
            { "position": [5, 5, 5], "color": [1, 1, 1], "intensity": 1.5 },
            { "position": [-4, 6, 3] }
        ],
        "primitives": [
            { "type": "sphere", "center": [0, 0, 0], "radius": 1,
              "material": { "color": [0.9, 0.1, 0.1], "reflectivity": 0.0, "shininess": 32 } },
            { "type": "plane", "point": [0, -1, 0], "normal": [0, 2, 0] },
            { "type": "triangle", "v0": [0, 0, 0], "v1": [1, 0, 0], "v2": [0, 1, 0],
              "material": { "color": [0.2, 0.3, 0.9] } },
            { "type": "box", "min": [-1, -1, -1], "max": [1, 1, 1],
              "material": { "reflectivity": 0.5 } }
        ],
        "background": [0.1, 0.12, 0.18]
    }"#;

    #[test]
    fn test_load_scene_from_str() {
        let scene = load_scene_from_str(SCENE).unwrap();

        assert_eq!(scene.camera.position, Vec3::new(0.0, 1.0, 5.0));
        assert_eq!(scene.camera.fov, 60.0);
        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.primitives.len(), 4);
        assert_eq!(scene.background, Color::new(0.1, 0.12, 0.18));

        assert_eq!(scene.primitives[0].kind(), "sphere");
        assert_eq!(scene.primitives[1].kind(), "plane");
        assert_eq!(scene.primitives[2].kind(), "triangle");
        assert_eq!(scene.primitives[3].kind(), "box");
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let scene = load_scene_from_str(SCENE).unwrap();

        // Light without color/intensity
        assert_eq!(scene.lights[1].color, Color::ONE);
        assert_eq!(scene.lights[1].intensity, 1.0);

        // Plane without material
        assert_eq!(scene.primitives[1].material(), Some(&Material::default()));

        // Partial material
        let material = scene.primitives[3].material().unwrap();
        assert_eq!(material.reflectivity, 0.5);
        assert_eq!(material.shininess, Material::default().shininess);
    }

    #[test]
    fn test_plane_normal_kept_as_given() {
        let scene = load_scene_from_str(SCENE).unwrap();

        match &scene.primitives[1] {
            Primitive::Plane { normal, .. } => assert_eq!(*normal, Vec3::new(0.0, 2.0, 0.0)),
            other => panic!("expected plane, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_primitive_type() {
        let source = r#"{
            "camera": { "position": [0, 0, 5], "target": [0, 0, 0], "fov": 45 },
            "primitives": [
                { "type": "torus", "center": [0, 0, 0], "major": 1, "minor": 0.25 },
                { "type": "sphere", "center": [0, 0, 0], "radius": 1 }
            ]
        }"#;

        let scene = load_scene_from_str(source).unwrap();
        assert_eq!(scene.primitives[0], Primitive::Unknown);
        assert_eq!(scene.primitives[1].kind(), "sphere");
        assert_eq!(scene.renderable_count(), 1);
    }

    #[test]
    fn test_missing_camera_is_parse_error() {
        let err = load_scene_from_str(r#"{ "primitives": [] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_scene_from_str("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let source = r#"{
            "camera": { "position": [0, 0, 5], "target": [0, 0, 0], "fov": 45 },
            "primitives": [ { "type": "sphere", "center": [0, 0, 0], "radius": -2 } ]
        }"#;

        let err = load_scene_from_str(source).unwrap_err();
        assert!(matches!(err, SceneError::Invalid { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_scene("/nonexistent/glint/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
        assert!(err.to_string().contains("scene.json"));
    }

    #[test]
    fn test_demo_scene_round_trip() {
        let demo = Scene::demo();
        let json = serde_json::to_string(&demo).unwrap();
        let loaded = load_scene_from_str(&json).unwrap();

        assert_eq!(loaded, demo);
    }

    #[test]
    fn test_bundled_scenes_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenes");

        let demo = load_scene(dir.join("demo.json")).unwrap();
        let kinds: Vec<_> = demo.primitives.iter().map(Primitive::kind).collect();
        let expected: Vec<_> = Scene::demo().primitives.iter().map(Primitive::kind).collect();
        assert_eq!(kinds, expected);
        assert_eq!(demo.lights.len(), 2);

        // The torus is skipped, not rejected
        let mirrors = load_scene(dir.join("mirrors.json")).unwrap();
        assert_eq!(mirrors.primitives.len(), 6);
        assert_eq!(mirrors.renderable_count(), 5);
    }
}
