//! Face triangulation
//!
//! Splits polygonal faces into triangles over a working copy of the face's
//! corner positions; the source mesh is never touched. The split is
//! deterministic: quads cut along their shorter diagonal, larger polygons
//! fan out from the first corner.

use cgmath::{InnerSpace, Vector3};

/// Triangulates one face given its corner positions in order.
///
/// Returned triples index into the corner array. Faces with fewer than three
/// corners produce no triangles.
pub(crate) fn triangulate(corners: &[Vector3<f32>]) -> Vec<[usize; 3]> {
    match corners.len() {
        0..=2 => Vec::new(),
        3 => vec![[0, 1, 2]],
        4 => {
            let diagonal_02 = (corners[0] - corners[2]).magnitude2();
            let diagonal_13 = (corners[1] - corners[3]).magnitude2();
            if diagonal_02 <= diagonal_13 {
                vec![[0, 1, 2], [0, 2, 3]]
            } else {
                vec![[1, 2, 3], [1, 3, 0]]
            }
        }
        n => (1..n - 1).map(|i| [0, i, i + 1]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(corners: &[Vector3<f32>], triangles: &[[usize; 3]]) -> f32 {
        triangles
            .iter()
            .map(|t| {
                let a = corners[t[1]] - corners[t[0]];
                let b = corners[t[2]] - corners[t[0]];
                a.cross(b).magnitude() * 0.5
            })
            .sum()
    }

    #[test]
    fn test_triangles_pass_through() {
        let corners = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        assert_eq!(triangulate(&corners), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_degenerate_faces_produce_nothing() {
        assert!(triangulate(&[]).is_empty());
        assert!(triangulate(&[Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_quad_splits_along_shorter_diagonal() {
        // A kite: diagonal 1-3 is much shorter than 0-2
        let corners = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 4.0, 0.0),
            Vector3::new(-1.0, 1.0, 0.0),
        ];
        assert_eq!(triangulate(&corners), vec![[1, 2, 3], [1, 3, 0]]);
    }

    #[test]
    fn test_quad_area_is_preserved() {
        let corners = vec![
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(-1.0, 1.0, 0.0),
        ];
        let triangles = triangulate(&corners);
        assert_eq!(triangles.len(), 2);
        assert!((area(&corners, &triangles) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_ngon_fan_preserves_area() {
        // Regular hexagon of circumradius 1, area 3*sqrt(3)/2
        let corners: Vec<Vector3<f32>> = (0..6)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::PI / 3.0;
                Vector3::new(angle.cos(), angle.sin(), 0.0)
            })
            .collect();
        let triangles = triangulate(&corners);
        assert_eq!(triangles.len(), 4); // n - 2
        let expected = 3.0 * 3.0_f32.sqrt() / 2.0;
        assert!((area(&corners, &triangles) - expected).abs() < 1e-5);
    }
}
