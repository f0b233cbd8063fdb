//! Coordinate convention conversion
//!
//! Scenes are authored Z-up; the target renderer is Y-up. The bridge is one
//! fixed rotation of -90 degrees about X, applied exactly once when a value
//! is written into the output document - never inside intermediate math.

use cgmath::{Deg, Matrix3, Matrix4, Vector3};

/// The global Z-up to Y-up rotation.
fn axis_rotation() -> Matrix4<f32> {
    Matrix4::from_angle_x(Deg(-90.0))
}

/// Converts a world transform into the renderer's frame and memory layout.
///
/// cgmath stores matrices column-major, which is exactly the layout the
/// consumer expects: columns become the outer arrays.
pub(crate) fn convert_matrix(transform: Matrix4<f32>) -> [[f32; 4]; 4] {
    (axis_rotation() * transform).into()
}

/// Converts a free vector or point into the renderer's frame.
pub(crate) fn convert_vector(v: Vector3<f32>) -> Vector3<f32> {
    Matrix3::from_angle_x(Deg(-90.0)) * v
}
