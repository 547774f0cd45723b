//! Shared test utilities for the firmware-catalog test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = firmware_dir(&["donglee_mg21_zigbee_stable_6.10.3_115200.gbl"]);
//! let catalog = scan(tmp.path(), &CatalogConfig::default()).unwrap();
//!
//! let record = find_record(&catalog.manifest, "donglee_mg21_zigbee_stable_6.10.3_115200.gbl");
//! assert_eq!(record.dongle_type, "ZBDongle-E");
//! ```

use tempfile::TempDir;

use crate::types::{FirmwareRecord, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory holding empty files with the given names.
pub fn firmware_dir(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        std::fs::write(tmp.path().join(name), b"").unwrap();
    }
    tmp
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a record by filename. Panics if not found.
pub fn find_record<'a>(manifest: &'a Manifest, name: &str) -> &'a FirmwareRecord {
    manifest
        .firmware_list
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| {
            let names = record_names(manifest);
            panic!("record '{name}' not found. Available: {names:?}")
        })
}

/// Filenames of all records, in manifest order.
pub fn record_names(manifest: &Manifest) -> Vec<&str> {
    manifest
        .firmware_list
        .iter()
        .map(|r| r.name.as_str())
        .collect()
}
