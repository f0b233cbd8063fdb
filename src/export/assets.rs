//! Texture asset copying
//!
//! Copies every texture gathered during document construction into the
//! export directory under its base filename. Missing sources are skipped
//! with a warning; a source and destination resolving to the identical file
//! is not an error and is left alone.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::ExportError;

#[derive(Debug, Default)]
pub(crate) struct CopyOutcome {
    pub copied: usize,
    pub skipped: usize,
}

pub(crate) fn copy_assets(assets: &[PathBuf], target_dir: &Path) -> Result<CopyOutcome, ExportError> {
    let mut outcome = CopyOutcome::default();

    for asset in assets {
        let file_name = match asset.file_name() {
            Some(name) => name,
            None => {
                warn!("asset path '{}' has no file name, skipping", asset.display());
                outcome.skipped += 1;
                continue;
            }
        };

        if !asset.exists() {
            warn!("texture '{}' not found on disk, skipping", asset.display());
            outcome.skipped += 1;
            continue;
        }

        let destination = target_dir.join(file_name);
        if is_same_file(asset, &destination) {
            debug!("texture '{}' already in place", asset.display());
            outcome.skipped += 1;
            continue;
        }

        fs::copy(asset, &destination).map_err(|source| ExportError::CopyAsset {
            path: asset.clone(),
            source,
        })?;
        outcome.copied += 1;
    }

    Ok(outcome)
}

/// Whether source and destination resolve to the identical file on disk.
fn is_same_file(source: &Path, destination: &Path) -> bool {
    if !destination.exists() {
        return false;
    }
    match (source.canonicalize(), destination.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
