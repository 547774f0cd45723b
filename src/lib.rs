//! # Firmware Catalog
//!
//! Catalogs the firmware binaries in a directory and writes the
//! `FIRMWARE_LIST.json` manifest read by the firmware-selection UI. The
//! filenames are the data source: each one encodes the product, chip, role,
//! channel, version and baud rate of the image it names.
//!
//! # Pipeline
//!
//! ```text
//! 1. List      firmware-build/  →  candidate names  (minus .DS_Store and the manifest)
//! 2. Parse     name             →  tokens           (or skipped, with a diagnostic)
//! 3. Label     tokens           →  FirmwareRecord   (display names for codes)
//! 4. Write     records          →  FIRMWARE_LIST.json
//! ```
//!
//! The manifest is rebuilt from scratch every run. Unparseable names are
//! reported and left out; only I/O failures abort.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | Filename tokenizer for `<dongle>_<chip>_[<role>_]<desc>_<version>_<baud>[_<extra>].<ext>` |
//! | [`labels`] | Fixed code → display-name tables for product families and firmware roles |
//! | [`types`] | `Manifest` and `FirmwareRecord`, the JSON contract with the UI |
//! | [`scan`] | Directory listing, exclusions, and per-file parsing |
//! | [`manifest`] | Writing, reading, and staleness checks for the manifest file |
//! | [`config`] | Optional TOML config: output file name and ignored entries |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Tokenizer Over Regex
//!
//! The convention has two optional middle tokens (chip and role) and an
//! optional trailing one. A single regex with nested optional groups makes
//! it hard to see which group captured what. [`naming`] splits on `_` and
//! tries an explicit, ordered list of layouts instead, so every stage can be
//! tested on its own.
//!
//! ## Listing Order
//!
//! Records appear in the order the filesystem lists them. The UI does its
//! own sorting; the manifest does not impose one.

pub mod config;
pub mod labels;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
