//! Snapshot node types for meshes, lights and cameras
//!
//! All transforms, positions and rotations are world-space values captured
//! after the host has baked any pending translation/rotation/scale. Nodes are
//! plain data; the serializer only ever reads them.

use cgmath::{Matrix4, Quaternion, Rad, SquareMatrix, Vector2, Vector3};

use super::material::MaterialSlot;

/// A polygonal face of a mesh node.
///
/// `vertices` index into the owning node's position/normal arrays. When the
/// mesh carries a UV layer, `texcoords` holds one UV per corner, parallel to
/// `vertices`; otherwise it is empty.
#[derive(Debug, Clone)]
pub struct Face {
    pub vertices: Vec<u32>,
    pub texcoords: Vec<Vector2<f32>>,
    /// Index into the owning node's material slot list.
    pub material_slot: usize,
    pub smooth: bool,
}

impl Face {
    /// Creates a flat-shaded face over the given vertex indices, assigned to
    /// material slot 0.
    pub fn new(vertices: Vec<u32>) -> Self {
        Self {
            vertices,
            texcoords: Vec::new(),
            material_slot: 0,
            smooth: false,
        }
    }

    pub fn with_texcoords(mut self, texcoords: Vec<Vector2<f32>>) -> Self {
        self.texcoords = texcoords;
        self
    }

    pub fn with_material_slot(mut self, slot: usize) -> Self {
        self.material_slot = slot;
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }
}

/// A mesh object captured from the host scene.
///
/// Positions and normals are parallel arrays; faces index into both. Faces
/// may be polygons of any order - triangulation happens during export and
/// never writes back into the node.
#[derive(Debug, Clone)]
pub struct MeshNode {
    pub name: String,
    /// World transform, baked.
    pub transform: Matrix4<f32>,
    pub positions: Vec<Vector3<f32>>,
    /// Per-vertex normals, parallel to `positions`.
    pub normals: Vec<Vector3<f32>>,
    pub faces: Vec<Face>,
    pub materials: Vec<MaterialSlot>,
    /// Whether the mesh carries an active UV layer. When set, every face
    /// stores one texcoord per corner.
    pub uv_layer: bool,
}

impl MeshNode {
    /// Creates an empty mesh node with an identity transform and no
    /// material slots.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Matrix4::identity(),
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
            materials: Vec::new(),
            uv_layer: false,
        }
    }

    pub fn with_transform(mut self, transform: Matrix4<f32>) -> Self {
        self.transform = transform;
        self
    }

    /// Appends a material slot and returns its index.
    pub fn add_material(&mut self, slot: MaterialSlot) -> usize {
        self.materials.push(slot);
        self.materials.len() - 1
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Host light type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Point,
    /// Directional light with uniform direction and no positional falloff.
    Sun,
    Spot,
    Area,
}

/// A light captured from the host scene.
#[derive(Debug, Clone)]
pub struct LightNode {
    pub name: String,
    pub kind: LightKind,
    pub position: Vector3<f32>,
    /// World rotation, used to derive the pointing direction of sun lights.
    pub rotation: Quaternion<f32>,
    pub color: [f32; 3],
    /// Light power in the host's units.
    pub energy: f32,
}

impl LightNode {
    pub fn is_directional(&self) -> bool {
        self.kind == LightKind::Sun
    }
}

/// A camera captured from the host scene.
///
/// The host representation stores only position and orientation; the look-at
/// target the output format wants is synthesized during export.
#[derive(Debug, Clone)]
pub struct CameraNode {
    pub name: String,
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    /// Full vertical field of view.
    pub fov: Rad<f32>,
    pub near: f32,
    pub far: f32,
    pub perspective: bool,
}

impl CameraNode {
    /// Creates a perspective camera with the clip range the target renderer
    /// expects by default.
    pub fn new(name: &str, position: Vector3<f32>, rotation: Quaternion<f32>, fov: Rad<f32>) -> Self {
        Self {
            name: name.to_string(),
            position,
            rotation,
            fov,
            near: 0.01,
            far: 10_000.0,
            perspective: true,
        }
    }
}
