//! Scene graph snapshot model
//!
//! The serializer never talks to a live host application directly. Instead a
//! host adapter captures its object model into the snapshot node types in
//! this module and exposes them through the read-only [`SceneSource`] trait.
//! [`MemoryScene`] is the provided implementation, usable both as an adapter
//! target and as a standalone scene-building API.

pub mod material;
pub mod memory;
pub mod node;
pub mod obj;
pub mod source;

pub use material::{EmissionInput, MaterialGraph, MaterialSlot};
pub use memory::MemoryScene;
pub use node::{CameraNode, Face, LightKind, LightNode, MeshNode};
pub use source::{RenderSettings, SceneSource};
