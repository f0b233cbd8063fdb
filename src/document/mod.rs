//! Output document model
//!
//! Serde types mirroring the renderer's JSON scene schema. Maps are
//! `BTreeMap` so repeated exports of the same scene produce byte-identical
//! documents.
//!
//! Optionality matters here: material inputs the source lacks are omitted
//! from the document entirely, while the geometry keys (`vertices`,
//! `normals`, `texcoords`, `matrix`, `materials`, `children`) are always
//! present even when empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A triangle's three indices into the flattened vertex stream, plus the
/// owning face's smoothing flag.
pub type TriangleIndices = [u32; 4];

/// Top-level scene document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SceneDocument {
    pub objects: BTreeMap<String, ObjectRecord>,
    pub lights: Vec<LightRecord>,
    pub observers: Vec<ObserverRecord>,
}

/// An exported mesh object.
///
/// The vertex stream is flattened: every triangle corner gets its own entry
/// in `vertices`/`normals` (and `texcoords` when a UV layer was present), so
/// material index lists reference corners directly with no sharing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub vertices: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub texcoords: Vec<[f32; 2]>,
    /// World transform with columns as the outer arrays.
    pub matrix: [[f32; 4]; 4],
    pub materials: BTreeMap<String, MaterialRecord>,
    /// Nested child objects. The format supports nesting; this exporter
    /// always emits flat scenes, so the map stays empty.
    pub children: BTreeMap<String, ObjectRecord>,
}

/// An exported material.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Slot position of the material on its object.
    #[serde(rename = "_index")]
    pub index: u32,
    /// RGBA base color; the emission color when the material is a light.
    pub color: [f32; 4],
    /// Whether the material emits light.
    pub light: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_strength: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transmission: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_of_refraction: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossiness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f32>,
    /// Base filename of the referenced texture image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    pub indices: Vec<TriangleIndices>,
}

/// An exported light.
#[derive(Debug, Serialize, Deserialize)]
pub struct LightRecord {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub active: bool,
    pub light_strength: f32,
    pub directional_light: bool,
    /// Unit pointing direction for directional lights, all zeros otherwise.
    pub direction: [f32; 4],
}

/// An exported camera.
#[derive(Debug, Serialize, Deserialize)]
pub struct ObserverRecord {
    pub position: [f32; 3],
    /// Synthesized look-at point, homogeneous.
    pub target: [f32; 4],
    pub up: [f32; 3],
    /// Field of view in degrees.
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub perspective: bool,
}
