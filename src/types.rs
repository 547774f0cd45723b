//! Types serialized into `FIRMWARE_LIST.json`.
//!
//! Key names are the contract with the firmware-selection UI, so the fields
//! are renamed to camelCase on the wire.

use crate::labels::{map_dongle_type, map_firmware_type};
use crate::naming::ParsedFirmwareName;
use serde::{Deserialize, Serialize};

/// The manifest written to the firmware directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub firmware_list: Vec<FirmwareRecord>,
}

/// One firmware artifact, as shown in the selection UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareRecord {
    /// Original filename.
    pub name: String,
    /// Display label of the product family, or `unknown`.
    pub dongle_type: String,
    /// Raw chip token. Omitted when the filename leaves the chip slot empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip_model: Option<String>,
    /// Display label of the firmware role, `Official`, or `unknown`.
    pub firmware_type: String,
    pub firmware_desc: String,
    pub version: String,
    pub baud_rate: String,
}

impl FirmwareRecord {
    /// Resolve the labels of a parsed filename into a manifest record.
    pub fn from_parsed(name: &str, parsed: ParsedFirmwareName) -> Self {
        let dongle_type = map_dongle_type(&parsed.dongle_type).to_string();
        let firmware_type =
            map_firmware_type(parsed.firmware_type.as_deref(), parsed.chip_model.as_deref())
                .to_string();
        Self {
            name: name.to_string(),
            dongle_type,
            chip_model: parsed.chip_model,
            firmware_type,
            firmware_desc: parsed.firmware_desc,
            version: parsed.version,
            baud_rate: parsed.baud_rate,
        }
    }
}
