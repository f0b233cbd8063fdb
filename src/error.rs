//! Error types for scene import and export.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or writing a scene document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A material slot whose shader graph could not be introspected at all.
    ///
    /// Geometry without any usable material is invalid output, so this aborts
    /// the whole export rather than emitting a partial document.
    #[error("material '{name}' has no readable shader graph")]
    UnreadableMaterial { name: String },

    #[error("failed to serialize scene document")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write scene document to '{}'", path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy texture '{}' into the export directory", path.display())]
    CopyAsset {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while populating a scene from an OBJ/MTL file pair.
#[derive(Debug, Error)]
pub enum ObjImportError {
    #[error("failed to load OBJ file '{}'", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
}
