//! Material snapshot model
//!
//! A host material is a shader graph with named input sockets. The snapshot
//! keeps each input the exporter cares about as an explicit optional value,
//! so the defaulting policy lives in one place instead of scattered
//! key-existence checks.

use std::path::PathBuf;

/// The emissive input of a material graph.
///
/// When present, its color overrides the base color and the material is
/// treated as a light emitter.
#[derive(Debug, Clone, Copy)]
pub struct EmissionInput {
    pub color: [f32; 4],
    pub strength: f32,
}

/// The inputs read off a host material's shader graph.
///
/// Every field is independently optional: an absent input is omitted from the
/// exported record, never defaulted to zero.
#[derive(Debug, Clone, Default)]
pub struct MaterialGraph {
    /// Base/diffuse color, RGBA in 0-1.
    pub base_color: Option<[f32; 4]>,
    pub transmission: Option<f32>,
    pub ior: Option<f32>,
    /// Metallic input; exported as the renderer's glossiness.
    pub metallic: Option<f32>,
    pub roughness: Option<f32>,
    pub emission: Option<EmissionInput>,
    /// Absolute path of the image-texture input's file, if any.
    pub texture: Option<PathBuf>,
}

impl MaterialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_color(mut self, color: [f32; 4]) -> Self {
        self.base_color = Some(color);
        self
    }

    pub fn with_transmission(mut self, transmission: f32) -> Self {
        self.transmission = Some(transmission);
        self
    }

    pub fn with_ior(mut self, ior: f32) -> Self {
        self.ior = Some(ior);
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = Some(metallic);
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = Some(roughness);
        self
    }

    pub fn with_emission(mut self, color: [f32; 4], strength: f32) -> Self {
        self.emission = Some(EmissionInput { color, strength });
        self
    }

    pub fn with_texture(mut self, path: impl Into<PathBuf>) -> Self {
        self.texture = Some(path.into());
        self
    }
}

/// A material slot attached to a mesh node.
///
/// `graph` is `None` when the host material's shader graph could not be read
/// at all; the exporter treats that as a fatal condition.
#[derive(Debug, Clone)]
pub struct MaterialSlot {
    pub name: String,
    pub graph: Option<MaterialGraph>,
}

impl MaterialSlot {
    pub fn new(name: &str, graph: MaterialGraph) -> Self {
        Self {
            name: name.to_string(),
            graph: Some(graph),
        }
    }

    /// A slot whose shader graph is unreadable.
    pub fn opaque(name: &str) -> Self {
        Self {
            name: name.to_string(),
            graph: None,
        }
    }
}
