//! OBJ/MTL ingestion
//!
//! Populates a [`MemoryScene`] from an OBJ file with automatic material
//! extraction. MTL has no shader graph, so each material maps onto the
//! snapshot inputs through a small defaulting table: diffuse becomes the base
//! color (alpha from dissolve), shininess converts to roughness, optical
//! density carries over as the index of refraction.

use std::path::Path;

use cgmath::{InnerSpace, Vector2, Vector3, Zero};
use log::{info, warn};

use crate::error::ObjImportError;

use super::material::{MaterialGraph, MaterialSlot};
use super::memory::MemoryScene;
use super::node::{Face, MeshNode};

impl MemoryScene {
    /// Loads every model in an OBJ file as a mesh node.
    ///
    /// Geometry arrives pre-triangulated. Texture paths from the MTL file are
    /// resolved relative to the OBJ's directory so the exporter can copy them
    /// later.
    ///
    /// Returns the number of mesh nodes added.
    pub fn add_obj_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ObjImportError> {
        let path = path.as_ref();
        let (models, materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| ObjImportError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let materials = materials.unwrap_or_else(|err| {
            warn!("no usable MTL file for {}: {}", path.display(), err);
            Vec::new()
        });

        let obj_dir = path.parent().unwrap_or_else(|| Path::new("."));

        let mut added = 0;
        for (model_idx, model) in models.iter().enumerate() {
            let mesh = &model.mesh;

            let name = if model.name.is_empty() {
                format!("model_{}", model_idx)
            } else {
                model.name.clone()
            };

            let positions: Vec<Vector3<f32>> = mesh
                .positions
                .chunks_exact(3)
                .map(|p| Vector3::new(p[0], p[1], p[2]))
                .collect();

            // Use normals from the OBJ if present, otherwise average face
            // normals per vertex.
            let normals = if mesh.normals.len() == mesh.positions.len() {
                mesh.normals
                    .chunks_exact(3)
                    .map(|n| Vector3::new(n[0], n[1], n[2]))
                    .collect()
            } else {
                vertex_normals(&positions, &mesh.indices)
            };

            let uv_layer = !mesh.texcoords.is_empty();

            let mut node = MeshNode::new(&name);
            node.positions = positions;
            node.normals = normals;
            node.uv_layer = uv_layer;

            if let Some(material_id) = mesh.material_id {
                if let Some(mtl) = materials.get(material_id) {
                    node.add_material(convert_mtl(mtl, material_id, obj_dir));
                }
            }

            for triangle in mesh.indices.chunks_exact(3) {
                let mut face = Face::new(triangle.to_vec());
                if uv_layer {
                    face.texcoords = triangle
                        .iter()
                        .map(|&i| {
                            let i = i as usize;
                            Vector2::new(mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1])
                        })
                        .collect();
                }
                node.faces.push(face);
            }

            info!(
                "loaded '{}' from {}: {} vertices, {} faces",
                name,
                path.display(),
                node.vertex_count(),
                node.face_count()
            );

            self.add_mesh(node);
            added += 1;
        }

        Ok(added)
    }
}

fn convert_mtl(mtl: &tobj::Material, index: usize, obj_dir: &Path) -> MaterialSlot {
    let name = if mtl.name.is_empty() {
        format!("material_{}", index)
    } else {
        mtl.name.clone()
    };

    let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
    let mut graph = MaterialGraph::new()
        .with_base_color([
            diffuse[0],
            diffuse[1],
            diffuse[2],
            mtl.dissolve.unwrap_or(1.0),
        ])
        // Convert shininess to roughness; MTL has no direct roughness value.
        .with_roughness(1.0 - (mtl.shininess.unwrap_or(32.0) / 128.0).clamp(0.0, 1.0));

    if let Some(ior) = mtl.optical_density {
        graph = graph.with_ior(ior);
    }

    if let Some(texture) = &mtl.diffuse_texture {
        let resolved = obj_dir.join(texture);
        // Prefer the canonical absolute path; a texture that is missing on
        // disk keeps the joined path and is skipped at copy time.
        let resolved = resolved.canonicalize().unwrap_or(resolved);
        graph = graph.with_texture(resolved);
    }

    MaterialSlot::new(&name, graph)
}

/// Averages face normals into per-vertex normals for meshes without any.
fn vertex_normals(positions: &[Vector3<f32>], indices: &[u32]) -> Vec<Vector3<f32>> {
    let mut normals = vec![Vector3::zero(); positions.len()];

    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;

        let edge1 = positions[i1] - positions[i0];
        let edge2 = positions[i2] - positions[i0];
        let face_normal = edge1.cross(edge2);

        normals[i0] += face_normal;
        normals[i1] += face_normal;
        normals[i2] += face_normal;
    }

    for normal in &mut normals {
        if normal.magnitude2() > 0.0 {
            *normal = normal.normalize();
        }
    }

    normals
}
