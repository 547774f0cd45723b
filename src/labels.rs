//! Display labels for the codes embedded in firmware filenames.
//!
//! Both tables are closed, exact-match and case-sensitive. A code that is
//! not listed never fails; it resolves to [`UNKNOWN`] (or, for firmware on
//! an `esp32` chip, to [`OFFICIAL`]).

/// Label for any code missing from its table.
pub const UNKNOWN: &str = "unknown";

/// Label for role-less or unrecognized firmware built for [`ESP32_CHIP`].
pub const OFFICIAL: &str = "Official";

/// Chip model whose unlabelled firmware is vendor-official.
pub const ESP32_CHIP: &str = "esp32";

/// Product family code → display name.
pub const DONGLE_TYPES: &[(&str, &str)] = &[
    ("ihost", "iHost"),
    ("donglee", "ZBDongle-E"),
    ("donglep", "ZBDongle-P"),
    ("donglem", "Dongle-M"),
    ("donglelmg21", "Dongle-LMG21"),
    ("donglepmg24", "Dongle-PMG24"),
];

/// Firmware role code → display name.
pub const FIRMWARE_TYPES: &[(&str, &str)] = &[
    ("zigbee", "Zigbee"),
    ("zigbeerouter", "Zigbee Router"),
    ("openthread", "OpenThread"),
    ("multipan", "MultiPAN"),
];

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, label)| label)
}

/// Resolve a product family code, e.g. `donglee` → `ZBDongle-E`.
pub fn map_dongle_type(code: &str) -> &'static str {
    lookup(DONGLE_TYPES, code).unwrap_or(UNKNOWN)
}

/// Resolve a firmware role code, e.g. `zigbeerouter` → `Zigbee Router`.
///
/// An absent or unlisted role falls back on the chip model: `esp32`
/// firmware is labelled [`OFFICIAL`], everything else [`UNKNOWN`].
pub fn map_firmware_type(code: Option<&str>, chip_model: Option<&str>) -> &'static str {
    if let Some(label) = code.and_then(|c| lookup(FIRMWARE_TYPES, c)) {
        return label;
    }
    if chip_model == Some(ESP32_CHIP) {
        OFFICIAL
    } else {
        UNKNOWN
    }
}
