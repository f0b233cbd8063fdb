// src/lib.rs
//! Raylar Scene Export
//!
//! Serializes an in-memory scene graph - meshes, materials, lights, cameras -
//! into the JSON scene format consumed by the Raylar renderer, and collects
//! the texture files the scene references so they can travel with the
//! document.
//!
//! The library never talks to a host 3D application directly: adapters
//! capture the host's object model into [`scene`] snapshot nodes (or build a
//! [`MemoryScene`] from scratch) and hand it to [`export_scene`].
//!
//! ```no_run
//! use raylar_export::{export_scene, MemoryScene};
//! use raylar_export::geometry::generate_cube;
//!
//! let mut scene = MemoryScene::new();
//! scene.add_mesh(generate_cube("cube"));
//! export_scene(&scene, "scene.json")?;
//! # Ok::<(), raylar_export::ExportError>(())
//! ```

pub mod document;
pub mod error;
pub mod export;
pub mod geometry;
pub mod scene;

// Re-export main types for convenience
pub use error::{ExportError, ObjImportError};
pub use export::{export_scene, DocumentBundle, ExportSummary, SceneSerializer};
pub use scene::{
    CameraNode, EmissionInput, Face, LightKind, LightNode, MaterialGraph, MaterialSlot,
    MemoryScene, MeshNode, RenderSettings, SceneSource,
};
