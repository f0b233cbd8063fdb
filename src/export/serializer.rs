//! Scene document construction
//!
//! The extraction pass: walk a [`SceneSource`], flatten every mesh into a
//! per-corner vertex stream with per-material triangle lists, and capture
//! lights and cameras. The document is built fully in memory; nothing is
//! written here.

use std::collections::BTreeMap;
use std::path::PathBuf;

use cgmath::{Deg, Rotation, Vector3};
use log::{info, warn};

use crate::document::{LightRecord, MaterialRecord, ObjectRecord, ObserverRecord, SceneDocument};
use crate::error::ExportError;
use crate::scene::material::MaterialSlot;
use crate::scene::node::{CameraNode, LightNode, MeshNode};
use crate::scene::source::{RenderSettings, SceneSource};

use super::convert;
use super::triangulate::triangulate;

/// Maps the host's light power units into the renderer's.
const LIGHT_STRENGTH_DIVISOR: f32 = 10.0;

/// How far along the forward axis the synthesized camera target sits.
const TARGET_DISTANCE: f32 = 10.0;

/// A built scene document plus the texture files it references.
#[derive(Debug)]
pub struct DocumentBundle {
    pub document: SceneDocument,
    /// Absolute source paths of every texture referenced by a material, in
    /// the order encountered. Scoped to this build; nothing carries over
    /// between exports.
    pub assets: Vec<PathBuf>,
}

/// Builds scene documents from a scene source.
pub struct SceneSerializer;

impl SceneSerializer {
    /// Walks the whole source and produces the document and its asset list.
    ///
    /// Fails without partial output when any mesh carries a material slot
    /// whose shader graph cannot be introspected.
    pub fn build(source: &impl SceneSource) -> Result<DocumentBundle, ExportError> {
        let mut document = SceneDocument::default();
        let mut assets = Vec::new();

        for node in source.mesh_nodes() {
            let record = extract_mesh(node, &mut assets)?;
            document.objects.insert(node.name.clone(), record);
        }

        for light in source.light_nodes() {
            document.lights.push(extract_light(light));
        }

        let settings = source.render_settings();
        for camera in source.camera_nodes() {
            document.observers.push(extract_camera(camera, settings));
        }

        info!(
            "scene document built: {} objects, {} lights, {} observers, {} texture assets",
            document.objects.len(),
            document.lights.len(),
            document.observers.len(),
            assets.len()
        );

        Ok(DocumentBundle { document, assets })
    }
}

/// Flattens one mesh node into an object record.
///
/// Faces are triangulated on a working copy of their corner positions and
/// walked in face order; each triangle corner gets its own entry in the
/// vertex stream, and the triangle's indices land on whichever material
/// owns the face.
fn extract_mesh(node: &MeshNode, assets: &mut Vec<PathBuf>) -> Result<ObjectRecord, ExportError> {
    let mut materials = BTreeMap::new();
    let mut slot_names = Vec::with_capacity(node.materials.len());
    for (index, slot) in node.materials.iter().enumerate() {
        let record = extract_material(slot, index as u32, assets)?;
        slot_names.push(slot.name.clone());
        materials.insert(slot.name.clone(), record);
    }

    let mut record = ObjectRecord {
        matrix: convert::convert_matrix(node.transform),
        materials,
        ..Default::default()
    };

    let mut index: u32 = 0;
    for face in &node.faces {
        let corners: Vec<Vector3<f32>> = face
            .vertices
            .iter()
            .map(|&v| node.positions[v as usize])
            .collect();

        for triangle in triangulate(&corners) {
            for &corner in &triangle {
                let vertex = face.vertices[corner] as usize;
                record.vertices.push(node.positions[vertex].into());
                record.normals.push(node.normals[vertex].into());
                if node.uv_layer {
                    record.texcoords.push(face.texcoords[corner].into());
                }
            }

            // A face whose slot has no material keeps its vertices in the
            // stream but lands in no index list.
            if let Some(name) = slot_names.get(face.material_slot) {
                if let Some(material) = record.materials.get_mut(name) {
                    material
                        .indices
                        .push([index, index + 1, index + 2, face.smooth as u32]);
                }
            }
            index += 3;
        }
    }

    Ok(record)
}

/// Reads one material slot into a record, following the defaulting table:
/// emission outranks the base color, a graph with neither stays opaque
/// white, and every other input is copied only when present.
fn extract_material(
    slot: &MaterialSlot,
    index: u32,
    assets: &mut Vec<PathBuf>,
) -> Result<MaterialRecord, ExportError> {
    let graph = slot
        .graph
        .as_ref()
        .ok_or_else(|| ExportError::UnreadableMaterial {
            name: slot.name.clone(),
        })?;

    let mut record = MaterialRecord {
        index,
        ..Default::default()
    };

    match (graph.emission, graph.base_color) {
        (Some(emission), _) => {
            record.color = emission.color;
            record.light = true;
            record.light_strength = Some(emission.strength);
        }
        (None, Some(color)) => {
            record.color = color;
        }
        (None, None) => {
            record.color = [1.0, 1.0, 1.0, 1.0];
        }
    }

    record.transmission = graph.transmission;
    record.index_of_refraction = graph.ior;
    record.glossiness = graph.metallic;
    record.roughness = graph.roughness;

    if let Some(path) = &graph.texture {
        match path.file_name() {
            Some(file_name) => {
                record.texture = Some(file_name.to_string_lossy().into_owned());
                assets.push(path.clone());
            }
            None => warn!(
                "material '{}': texture path '{}' has no file name, dropping",
                slot.name,
                path.display()
            ),
        }
    }

    Ok(record)
}

fn extract_light(node: &LightNode) -> LightRecord {
    let directional = node.is_directional();
    let direction = if directional {
        // World-space pointing direction: canonical forward through the
        // light's rotation, then into the renderer's frame.
        let forward = node.rotation.rotate_vector(Vector3::new(0.0, 0.0, -1.0));
        let forward = convert::convert_vector(forward);
        [forward.x, forward.y, forward.z, 0.0]
    } else {
        [0.0; 4]
    };

    let position = convert::convert_vector(node.position);

    LightRecord {
        position: position.into(),
        color: node.color,
        active: true,
        light_strength: node.energy / LIGHT_STRENGTH_DIVISOR,
        directional_light: directional,
        direction,
    }
}

fn extract_camera(node: &CameraNode, settings: RenderSettings) -> ObserverRecord {
    let forward = node.rotation.rotate_vector(Vector3::new(0.0, 0.0, -1.0));
    let up = node.rotation.rotate_vector(Vector3::new(0.0, 1.0, 0.0));

    // The host stores only position and orientation, so the look-at target
    // is synthesized a fixed distance along the forward axis.
    let target = node.position + forward * TARGET_DISTANCE;

    let position = convert::convert_vector(node.position);
    let target = convert::convert_vector(target);
    let up = convert::convert_vector(up);

    ObserverRecord {
        position: position.into(),
        target: [target.x, target.y, target.z, 1.0],
        up: up.into(),
        fov: Deg::from(node.fov).0,
        aspect_ratio: settings.aspect_ratio(),
        near: node.near,
        far: node.far,
        perspective: node.perspective,
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, One, Quaternion, Rad, Vector2};

    use crate::geometry::generate_plane;
    use crate::scene::material::MaterialGraph;
    use crate::scene::memory::MemoryScene;
    use crate::scene::node::{Face, LightKind};

    use super::*;

    fn quad_mesh(name: &str) -> MeshNode {
        let mut node = generate_plane(name, 2.0, 2.0);
        node.uv_layer = false;
        for face in &mut node.faces {
            face.texcoords.clear();
        }
        node
    }

    #[test]
    fn test_quad_mesh_flattens_to_two_triangles() {
        let mut node = quad_mesh("ground");
        node.add_material(MaterialSlot::new("default", MaterialGraph::new()));

        let mut assets = Vec::new();
        let record = extract_mesh(&node, &mut assets).unwrap();

        assert_eq!(record.vertices.len(), 6);
        assert_eq!(record.normals.len(), 6);
        assert!(record.texcoords.is_empty()); // no UV layer
        assert!(record.children.is_empty());

        let material = &record.materials["default"];
        assert_eq!(material.indices, vec![[0, 1, 2, 0], [3, 4, 5, 0]]);
        assert!(assets.is_empty());
    }

    #[test]
    fn test_mesh_with_no_materials_still_exports() {
        let node = quad_mesh("bare");
        let mut assets = Vec::new();
        let record = extract_mesh(&node, &mut assets).unwrap();

        assert!(record.materials.is_empty());
        assert_eq!(record.vertices.len(), 6);
    }

    #[test]
    fn test_material_index_lists_do_not_overlap() {
        let mut node = MeshNode::new("two_sided");
        node.positions = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        node.normals = vec![Vector3::new(0.0, 0.0, 1.0); 4];
        node.add_material(MaterialSlot::new("a", MaterialGraph::new()));
        node.add_material(MaterialSlot::new("b", MaterialGraph::new()));
        node.faces = vec![
            Face::new(vec![0, 1, 2]).with_material_slot(0),
            Face::new(vec![0, 2, 3]).with_material_slot(1),
        ];

        let mut assets = Vec::new();
        let record = extract_mesh(&node, &mut assets).unwrap();

        let a = &record.materials["a"].indices;
        let b = &record.materials["b"].indices;
        assert_eq!(a, &vec![[0, 1, 2, 0]]);
        assert_eq!(b, &vec![[3, 4, 5, 0]]);
    }

    #[test]
    fn test_uv_layer_emits_per_corner_texcoords() {
        let mut node = generate_plane("ground", 2.0, 2.0);
        node.add_material(MaterialSlot::new("default", MaterialGraph::new()));

        let mut assets = Vec::new();
        let record = extract_mesh(&node, &mut assets).unwrap();
        assert_eq!(record.texcoords.len(), record.vertices.len());
    }

    #[test]
    fn test_unreadable_material_aborts_with_its_name() {
        let mut node = quad_mesh("broken");
        node.add_material(MaterialSlot::opaque("mystery"));

        let mut assets = Vec::new();
        let err = extract_mesh(&node, &mut assets).unwrap_err();
        match err {
            ExportError::UnreadableMaterial { name } => assert_eq!(name, "mystery"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_material_defaulting_table() {
        let mut assets = Vec::new();

        // Neither base color nor emission: opaque white, not a light
        let bare = MaterialSlot::new("bare", MaterialGraph::new());
        let record = extract_material(&bare, 0, &mut assets).unwrap();
        assert_eq!(record.color, [1.0, 1.0, 1.0, 1.0]);
        assert!(!record.light);
        assert!(record.light_strength.is_none());
        assert!(record.transmission.is_none());

        // Emission overrides the base color
        let lamp = MaterialSlot::new(
            "lamp",
            MaterialGraph::new()
                .with_base_color([0.1, 0.1, 0.1, 1.0])
                .with_emission([1.0, 0.9, 0.8, 1.0], 40.0),
        );
        let record = extract_material(&lamp, 1, &mut assets).unwrap();
        assert_eq!(record.color, [1.0, 0.9, 0.8, 1.0]);
        assert!(record.light);
        assert_eq!(record.light_strength, Some(40.0));

        // Metallic is exported as glossiness
        let metal = MaterialSlot::new("metal", MaterialGraph::new().with_metallic(0.75));
        let record = extract_material(&metal, 2, &mut assets).unwrap();
        assert_eq!(record.glossiness, Some(0.75));
        assert!(record.roughness.is_none());
    }

    #[test]
    fn test_texture_records_basename_and_gathers_asset() {
        let mut assets = Vec::new();
        let slot = MaterialSlot::new(
            "painted",
            MaterialGraph::new().with_texture("/srv/textures/wood.png"),
        );
        let record = extract_material(&slot, 0, &mut assets).unwrap();

        assert_eq!(record.texture.as_deref(), Some("wood.png"));
        assert_eq!(assets.len(), 1);
        assert!(assets[0].ends_with("wood.png"));
    }

    #[test]
    fn test_directional_light_strength_and_direction() {
        let light = LightNode {
            name: "sun".to_string(),
            kind: LightKind::Sun,
            position: Vector3::new(0.0, 0.0, 20.0),
            rotation: Quaternion::one(),
            color: [1.0, 1.0, 1.0],
            energy: 100.0,
        };

        let record = extract_light(&light);
        assert!(record.directional_light);
        assert!(record.active);
        assert!((record.light_strength - 10.0).abs() < 1e-6);

        let d = Vector3::new(record.direction[0], record.direction[1], record.direction[2]);
        assert!(d.magnitude() > 0.0);
        assert!((d.magnitude() - 1.0).abs() < 1e-5);
        assert_eq!(record.direction[3], 0.0);
    }

    #[test]
    fn test_point_light_reports_zero_direction() {
        let light = LightNode {
            name: "bulb".to_string(),
            kind: LightKind::Point,
            position: Vector3::new(1.0, 2.0, 3.0),
            rotation: Quaternion::one(),
            color: [1.0, 0.5, 0.2],
            energy: 60.0,
        };

        let record = extract_light(&light);
        assert!(!record.directional_light);
        assert_eq!(record.direction, [0.0, 0.0, 0.0, 0.0]);
        assert!((record.light_strength - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_camera_target_is_synthesized_along_forward() {
        let camera = CameraNode::new(
            "cam",
            Vector3::new(0.0, 0.0, 0.0),
            Quaternion::one(),
            Rad(std::f32::consts::FRAC_PI_2),
        );
        let settings = RenderSettings::new(1600, 900);

        let record = extract_camera(&camera, settings);

        // Identity rotation looks along -Z in the authoring frame, which is
        // -Y after conversion
        assert!((record.target[0] - 0.0).abs() < 1e-4);
        assert!((record.target[1] + 10.0).abs() < 1e-4);
        assert!((record.target[2] - 0.0).abs() < 1e-4);
        assert_eq!(record.target[3], 1.0);

        assert!((record.fov - 90.0).abs() < 1e-4);
        assert!((record.aspect_ratio - 1600.0 / 900.0).abs() < 1e-6);
        assert!(record.perspective);
        assert!((record.near - 0.01).abs() < 1e-6);
        assert!((record.far - 10_000.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_build_counts() {
        let mut scene = MemoryScene::new();

        let mut cube = crate::geometry::generate_cube("cube");
        cube.add_material(MaterialSlot::new(
            "default",
            MaterialGraph::new().with_base_color([0.8, 0.8, 0.8, 1.0]),
        ));
        scene.add_mesh(cube);

        scene.add_light(LightNode {
            name: "sun".to_string(),
            kind: LightKind::Sun,
            position: Vector3::new(0.0, 0.0, 10.0),
            rotation: Quaternion::one(),
            color: [1.0, 1.0, 1.0],
            energy: 100.0,
        });

        scene.add_camera(CameraNode::new(
            "cam",
            Vector3::new(5.0, -5.0, 4.0),
            Quaternion::one(),
            Rad(0.9),
        ));

        let bundle = SceneSerializer::build(&scene).unwrap();
        assert_eq!(bundle.document.objects.len(), 1);
        assert_eq!(bundle.document.lights.len(), 1);
        assert_eq!(bundle.document.observers.len(), 1);
        assert!(bundle.assets.is_empty());

        // 6 quads, 2 triangles each, 3 corners each
        let cube = &bundle.document.objects["cube"];
        assert_eq!(cube.vertices.len(), 36);
        assert_eq!(cube.texcoords.len(), 36);
        assert_eq!(cube.materials["default"].indices.len(), 12);
    }

    #[test]
    fn test_face_corner_uvs_follow_triangulation() {
        let mut node = MeshNode::new("patch");
        node.positions = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        node.normals = vec![Vector3::new(0.0, 0.0, 1.0); 4];
        node.uv_layer = true;
        node.add_material(MaterialSlot::new("default", MaterialGraph::new()));
        node.faces = vec![Face::new(vec![0, 1, 2, 3]).with_texcoords(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        ])];

        let mut assets = Vec::new();
        let record = extract_mesh(&node, &mut assets).unwrap();

        // Both diagonals of a square are equal, so the split keeps corner 0
        assert_eq!(record.texcoords[0], [0.0, 0.0]);
        assert_eq!(record.texcoords[3], [0.0, 0.0]); // second triangle restarts at corner 0
    }
}
