//! Primitive mesh generation

pub mod primitives;

pub use primitives::{generate_cube, generate_plane, generate_uv_sphere};
