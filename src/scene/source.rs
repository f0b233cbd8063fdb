//! Read-only scene traversal interface

use super::node::{CameraNode, LightNode, MeshNode};

/// Active render output settings of the host scene.
///
/// The exported aspect ratio comes from here, not from any camera's own
/// sensor settings.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    pub resolution_x: u32,
    pub resolution_y: u32,
}

impl RenderSettings {
    pub fn new(resolution_x: u32, resolution_y: u32) -> Self {
        Self {
            resolution_x,
            resolution_y,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.resolution_x as f32 / self.resolution_y as f32
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution_x: 1920,
            resolution_y: 1080,
        }
    }
}

/// Read-only view of a host scene graph.
///
/// The serializer depends only on this capability set - iterate nodes by
/// type, read transforms and material graphs, read render settings - so it
/// never touches a host's object identity or mutation API. Implementations
/// hand out snapshot nodes; nothing here allows writing back.
pub trait SceneSource {
    fn mesh_nodes(&self) -> &[MeshNode];
    fn light_nodes(&self) -> &[LightNode];
    fn camera_nodes(&self) -> &[CameraNode];
    fn render_settings(&self) -> RenderSettings;
}
