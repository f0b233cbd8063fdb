//! In-memory scene graph
//!
//! [`MemoryScene`] is the provided [`SceneSource`] implementation. Host
//! adapters populate one from their live object model; standalone programs
//! build one directly from primitives or OBJ files and hand it to the
//! exporter.

use super::node::{CameraNode, LightNode, MeshNode};
use super::source::{RenderSettings, SceneSource};

/// A scene graph held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryScene {
    pub settings: RenderSettings,
    meshes: Vec<MeshNode>,
    lights: Vec<LightNode>,
    cameras: Vec<CameraNode>,
}

impl MemoryScene {
    /// Creates an empty scene with default render settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn add_mesh(&mut self, node: MeshNode) -> &mut MeshNode {
        self.meshes.push(node);
        self.meshes.last_mut().unwrap()
    }

    pub fn add_light(&mut self, node: LightNode) {
        self.lights.push(node);
    }

    pub fn add_camera(&mut self, node: CameraNode) {
        self.cameras.push(node);
    }

    /// Looks up a mesh node by name.
    pub fn mesh(&self, name: &str) -> Option<&MeshNode> {
        self.meshes.iter().find(|m| m.name == name)
    }

    pub fn mesh_mut(&mut self, name: &str) -> Option<&mut MeshNode> {
        self.meshes.iter_mut().find(|m| m.name == name)
    }
}

impl SceneSource for MemoryScene {
    fn mesh_nodes(&self) -> &[MeshNode] {
        &self.meshes
    }

    fn light_nodes(&self) -> &[LightNode] {
        &self.lights
    }

    fn camera_nodes(&self) -> &[CameraNode] {
        &self.cameras
    }

    fn render_settings(&self) -> RenderSettings {
        self.settings
    }
}
