//! Reading and writing `FIRMWARE_LIST.json`.
//!
//! The manifest is regenerated from scratch on every run. It is serialized in
//! full before the file is opened, so a serialization failure never leaves a
//! truncated manifest behind.

use crate::types::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the manifest as 2-space-indented JSON.
pub fn to_json(manifest: &Manifest) -> Result<String, ManifestError> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// Write the manifest to `dir/file_name`, replacing any previous one.
///
/// Returns the path written.
pub fn write_manifest(
    dir: &Path,
    file_name: &str,
    manifest: &Manifest,
) -> Result<PathBuf, ManifestError> {
    let json = to_json(manifest)?;
    let path = dir.join(file_name);
    fs::write(&path, json)?;
    Ok(path)
}

/// Read a previously written manifest.
pub fn read_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// State of the manifest on disk relative to a fresh scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Compare the manifest at `path` with `expected`.
///
/// A file that exists but cannot be parsed counts as stale.
pub fn manifest_status(path: &Path, expected: &Manifest) -> Result<ManifestStatus, ManifestError> {
    if !path.exists() {
        return Ok(ManifestStatus::Missing);
    }
    match read_manifest(path) {
        Ok(existing) if existing == *expected => Ok(ManifestStatus::UpToDate),
        Ok(_) | Err(ManifestError::Json(_)) => Ok(ManifestStatus::Stale),
        Err(e) => Err(e),
    }
}
