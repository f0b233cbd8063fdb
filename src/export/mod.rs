//! Scene export
//!
//! One operation: serialize a scene source to a JSON document at a caller
//! chosen path, then copy the referenced texture assets into the document's
//! directory. The whole document is built in memory first - a failing build
//! writes nothing.

mod assets;
mod convert;
mod serializer;
mod triangulate;

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::ExportError;
use crate::scene::source::SceneSource;

pub use serializer::{DocumentBundle, SceneSerializer};

/// What an export produced.
#[derive(Debug)]
pub struct ExportSummary {
    pub document_path: PathBuf,
    pub assets_copied: usize,
    pub assets_skipped: usize,
}

/// Exports a scene to a JSON document at `path`.
///
/// Texture files referenced by materials are copied into the document's
/// directory under their base filenames. A texture already sitting at its
/// destination is skipped; one missing on disk is skipped with a warning.
pub fn export_scene(
    source: &impl SceneSource,
    path: impl AsRef<Path>,
) -> Result<ExportSummary, ExportError> {
    let path = path.as_ref();

    let bundle = SceneSerializer::build(source)?;
    let json = serde_json::to_string(&bundle.document)?;

    fs::write(path, json).map_err(|source| ExportError::WriteDocument {
        path: path.to_path_buf(),
        source,
    })?;

    let target_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let outcome = assets::copy_assets(&bundle.assets, target_dir)?;

    info!(
        "exported scene to '{}' ({} textures copied, {} skipped)",
        path.display(),
        outcome.copied,
        outcome.skipped
    );

    Ok(ExportSummary {
        document_path: path.to_path_buf(),
        assets_copied: outcome.copied,
        assets_skipped: outcome.skipped,
    })
}
