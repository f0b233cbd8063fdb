//! # Primitive Shape Generation
//!
//! Functions to generate common shapes as mesh nodes, with normals and
//! texture coordinates. Faces are emitted as quads where the shape allows,
//! which also makes these useful for exercising face triangulation.
//!
//! Shapes follow the Z-up authoring convention; the exporter handles the
//! conversion into the renderer's frame.

use std::f32::consts::PI;

use cgmath::{Vector2, Vector3};

use crate::scene::node::{Face, MeshNode};

/// Generate a flat plane lying in the XY plane
///
/// # Arguments
/// * `name` - Node name
/// * `width` - Extent along X
/// * `height` - Extent along Y
///
/// Returns a single-quad plane centered at the origin with its normal
/// pointing up (positive Z) and UVs from 0 to 1.
pub fn generate_plane(name: &str, width: f32, height: f32) -> MeshNode {
    let hw = width * 0.5;
    let hh = height * 0.5;

    let mut node = MeshNode::new(name);
    node.positions = vec![
        Vector3::new(-hw, -hh, 0.0),
        Vector3::new(hw, -hh, 0.0),
        Vector3::new(hw, hh, 0.0),
        Vector3::new(-hw, hh, 0.0),
    ];
    node.normals = vec![Vector3::new(0.0, 0.0, 1.0); 4];
    node.uv_layer = true;
    node.faces = vec![Face::new(vec![0, 1, 2, 3]).with_texcoords(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ])];

    node
}

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes, built from six
/// quad faces. Each face has its own four vertices so normals point straight
/// out and UVs run 0 to 1 per face.
pub fn generate_cube(name: &str) -> MeshNode {
    // One entry per face: (normal, four corner positions, counter-clockwise
    // seen from outside).
    let faces: [(Vector3<f32>, [Vector3<f32>; 4]); 6] = [
        (
            Vector3::new(0.0, 0.0, 1.0), // top
            [
                Vector3::new(-0.5, -0.5, 0.5),
                Vector3::new(0.5, -0.5, 0.5),
                Vector3::new(0.5, 0.5, 0.5),
                Vector3::new(-0.5, 0.5, 0.5),
            ],
        ),
        (
            Vector3::new(0.0, 0.0, -1.0), // bottom
            [
                Vector3::new(-0.5, -0.5, -0.5),
                Vector3::new(-0.5, 0.5, -0.5),
                Vector3::new(0.5, 0.5, -0.5),
                Vector3::new(0.5, -0.5, -0.5),
            ],
        ),
        (
            Vector3::new(-1.0, 0.0, 0.0), // left
            [
                Vector3::new(-0.5, -0.5, -0.5),
                Vector3::new(-0.5, -0.5, 0.5),
                Vector3::new(-0.5, 0.5, 0.5),
                Vector3::new(-0.5, 0.5, -0.5),
            ],
        ),
        (
            Vector3::new(1.0, 0.0, 0.0), // right
            [
                Vector3::new(0.5, -0.5, 0.5),
                Vector3::new(0.5, -0.5, -0.5),
                Vector3::new(0.5, 0.5, -0.5),
                Vector3::new(0.5, 0.5, 0.5),
            ],
        ),
        (
            Vector3::new(0.0, -1.0, 0.0), // front
            [
                Vector3::new(-0.5, -0.5, -0.5),
                Vector3::new(0.5, -0.5, -0.5),
                Vector3::new(0.5, -0.5, 0.5),
                Vector3::new(-0.5, -0.5, 0.5),
            ],
        ),
        (
            Vector3::new(0.0, 1.0, 0.0), // back
            [
                Vector3::new(0.5, 0.5, -0.5),
                Vector3::new(-0.5, 0.5, -0.5),
                Vector3::new(-0.5, 0.5, 0.5),
                Vector3::new(0.5, 0.5, 0.5),
            ],
        ),
    ];

    let uvs = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];

    let mut node = MeshNode::new(name);
    node.uv_layer = true;

    for (normal, corners) in faces {
        let base = node.positions.len() as u32;
        for corner in corners {
            node.positions.push(corner);
            node.normals.push(normal);
        }
        node.faces.push(
            Face::new(vec![base, base + 1, base + 2, base + 3]).with_texcoords(uvs.to_vec()),
        );
    }

    node
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `name` - Node name
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a smooth-shaded sphere of radius 1.0 centered at the origin,
/// built from quad bands with triangle fans at the poles.
pub fn generate_uv_sphere(name: &str, longitude_segments: u32, latitude_segments: u32) -> MeshNode {
    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    let mut node = MeshNode::new(name);
    node.uv_layer = true;

    // Generate vertices ring by ring, poles included
    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            // Z-up spherical to Cartesian
            let x = sin_theta * cos_phi;
            let y = sin_theta * sin_phi;
            let z = cos_theta;

            let point = Vector3::new(x, y, z);
            node.positions.push(point);
            node.normals.push(point); // normal equals position on a unit sphere
        }
    }

    let ring = long_segs + 1;
    let uv = |lat: u32, long: u32| {
        Vector2::new(long as f32 / long_segs as f32, lat as f32 / lat_segs as f32)
    };

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * ring + long;
            let second = first + ring;

            let face = if lat == 0 {
                // Top pole: the quad collapses to a triangle
                Face::new(vec![first, second, second + 1]).with_texcoords(vec![
                    uv(lat, long),
                    uv(lat + 1, long),
                    uv(lat + 1, long + 1),
                ])
            } else if lat == lat_segs - 1 {
                // Bottom pole
                Face::new(vec![first, second, first + 1]).with_texcoords(vec![
                    uv(lat, long),
                    uv(lat + 1, long),
                    uv(lat, long + 1),
                ])
            } else {
                Face::new(vec![first, second, second + 1, first + 1]).with_texcoords(vec![
                    uv(lat, long),
                    uv(lat + 1, long),
                    uv(lat + 1, long + 1),
                    uv(lat, long + 1),
                ])
            };

            node.faces.push(face.with_smooth(true));
        }
    }

    node
}
