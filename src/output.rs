//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Each firmware record leads with its positional index and resolved labels,
//! so the listing reads as an inventory of what the UI will offer. The raw
//! filename follows as an indented `Source:` line.
//!
//! ```text
//! Firmware (firmware-build)
//! 001 ZBDongle-E Zigbee stable 6.10.3
//!     Chip: mg21
//!     Baud: 115200
//!     Source: donglee_mg21_zigbee_stable_6.10.3_115200.gbl
//! 002 unknown Official stable 1.0.0
//!     Chip: esp32
//!     Baud: 921600
//!     Source: unknownvendor_esp32_stable_1.0.0_921600.bin
//!
//! Firmware info did not match pattern: random.txt
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::manifest::ManifestStatus;
use crate::scan::Catalog;
use crate::types::FirmwareRecord;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Diagnostic line for a name that does not follow the naming convention.
pub fn skipped_line(name: &str) -> String {
    format!("Firmware info did not match pattern: {name}")
}

/// Format a single record: header plus indented context lines.
pub fn format_record(index: usize, record: &FirmwareRecord) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} {} {} {}",
        format_index(index),
        record.dongle_type,
        record.firmware_type,
        record.firmware_desc,
        record.version
    )];
    if let Some(chip) = &record.chip_model {
        lines.push(format!("{}Chip: {}", indent(1), chip));
    }
    lines.push(format!("{}Baud: {}", indent(1), record.baud_rate));
    lines.push(format!("{}Source: {}", indent(1), record.name));
    lines
}

/// Format scan results: every record, then one diagnostic per skipped name.
pub fn format_scan_output(catalog: &Catalog, source: &Path) -> Vec<String> {
    let mut lines = vec![format!("Firmware ({})", source.display())];

    if catalog.manifest.firmware_list.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
    }
    for (i, record) in catalog.manifest.firmware_list.iter().enumerate() {
        lines.extend(format_record(i + 1, record));
    }

    if !catalog.skipped.is_empty() {
        lines.push(String::new());
        lines.extend(catalog.skipped.iter().map(|name| skipped_line(name)));
    }
    lines
}

pub fn print_scan_output(catalog: &Catalog, source: &Path) {
    for line in format_scan_output(catalog, source) {
        println!("{}", line);
    }
}

/// Confirmation line after the manifest is written.
pub fn format_generated(file_name: &str) -> String {
    format!("Generated JSON file: {file_name}")
}

/// Format the outcome of `parse` for one name.
pub fn format_parse_output(name: &str, record: Option<&FirmwareRecord>) -> Vec<String> {
    match record {
        Some(r) => format_record(1, r),
        None => vec![skipped_line(name)],
    }
}

/// Format the result of comparing the on-disk manifest with a fresh scan.
pub fn format_check_status(status: ManifestStatus, path: &Path) -> String {
    match status {
        ManifestStatus::UpToDate => format!("==> {} is up to date", path.display()),
        ManifestStatus::Stale => format!("==> {} is stale, run generate", path.display()),
        ManifestStatus::Missing => format!("==> {} is missing, run generate", path.display()),
    }
}
