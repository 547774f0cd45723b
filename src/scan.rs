//! Firmware directory scanning.
//!
//! Lists the firmware directory, drops the excluded names, and runs every
//! remaining entry through [`parse_firmware_name`]. Entries that do not follow
//! the naming convention are collected as skipped rather than failing the
//! scan; a directory where nothing matches still yields an empty, valid
//! manifest.
//!
//! Records keep the order in which the filesystem lists the directory. The
//! listing is deliberately not sorted.

use crate::config::CatalogConfig;
use crate::naming::parse_firmware_name;
use crate::types::{FirmwareRecord, Manifest};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read firmware folder {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of scanning a firmware directory.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub manifest: Manifest,
    /// Candidate names that did not match the naming convention.
    pub skipped: Vec<String>,
}

/// Scan `dir` into a catalog.
pub fn scan(dir: &Path, config: &CatalogConfig) -> Result<Catalog, ScanError> {
    let names = list_candidates(dir, config)?;
    Ok(catalog_names(names))
}

/// Directory entry names, minus the excluded ones, in listing order.
pub fn list_candidates(dir: &Path, config: &CatalogConfig) -> Result<Vec<String>, ScanError> {
    let read_err = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = entry.file_name().to_string_lossy().to_string();
        if !config.is_excluded(&name) {
            names.push(name);
        }
    }
    Ok(names)
}

/// Parse candidate names into a catalog without touching the filesystem.
pub fn catalog_names<I, S>(names: I) -> Catalog
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut catalog = Catalog::default();
    for name in names {
        let name = name.as_ref();
        match parse_firmware_name(name) {
            Some(parsed) => catalog
                .manifest
                .firmware_list
                .push(FirmwareRecord::from_parsed(name, parsed)),
            None => catalog.skipped.push(name.to_string()),
        }
    }
    catalog
}
