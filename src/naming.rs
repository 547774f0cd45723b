//! Filename parsing for the firmware naming convention.
//!
//! Every firmware artifact is named after what it is:
//!
//! ```text
//! <dongle>_<chip>_[<role>_]<desc>_<version>_<baud>[_<extra>].<ext>
//! ```
//!
//! - `donglee_mg21_zigbee_stable_6.10.3_115200.gbl`
//! - `donglep_cc2652p_zigbeerouter_stable_20240703_115200.hex`
//! - `sonoff_esp32_stable_1.0.0_921600.bin` (no role)
//! - `donglee__zigbee_stable_6.10.3_115200.gbl` (empty chip slot)
//!
//! ## Token Classes
//!
//! | Token | Characters | Optional |
//! |-------|------------|----------|
//! | dongle, chip, role, desc | `[A-Za-z0-9]+` | chip, role |
//! | version, extra | `[0-9.]+` | extra |
//! | baud | `[0-9]+` | no |
//!
//! The extension must be exactly `bin`, `gbl` or `hex`.
//!
//! ## Resolving Optional Tokens
//!
//! The chip slot is always delimited, so an empty slot (`dongle__...`) means
//! "no chip model" and never shifts the other tokens. The role and extra
//! tokens are the only real ambiguity: a four-segment tail such as
//! `a_b_1_2` could be `role_desc_version_baud` or `desc_version_baud_extra`.
//! Layouts are tried in a fixed order ([`TAIL_LAYOUTS`]) and the first one
//! whose tokens all validate wins, so a role is preferred over an extra.

/// Binary formats the catalog accepts. Matched case-sensitively.
pub const FIRMWARE_EXTENSIONS: &[&str] = &["bin", "gbl", "hex"];

/// Tokens extracted from a firmware filename, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFirmwareName {
    /// Product family code, e.g. `donglee`.
    pub dongle_type: String,
    /// Radio chip code, e.g. `mg21`. `None` when the slot is empty.
    pub chip_model: Option<String>,
    /// Firmware role code, e.g. `zigbeerouter`.
    pub firmware_type: Option<String>,
    /// Channel/tag, e.g. `stable`.
    pub firmware_desc: String,
    pub version: String,
    pub baud_rate: String,
    /// Reserved trailing field. Parsed but not emitted in the manifest.
    pub extra: Option<String>,
    pub extension: String,
}

/// Which optional tokens a tail layout carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailLayout {
    pub role: bool,
    pub extra: bool,
}

impl TailLayout {
    fn segment_count(self) -> usize {
        3 + usize::from(self.role) + usize::from(self.extra)
    }
}

/// Candidate layouts for the segments after the chip slot, in match order.
pub const TAIL_LAYOUTS: [TailLayout; 4] = [
    TailLayout {
        role: true,
        extra: true,
    },
    TailLayout {
        role: true,
        extra: false,
    },
    TailLayout {
        role: false,
        extra: true,
    },
    TailLayout {
        role: false,
        extra: false,
    },
];

/// Tokens following the chip slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTail<'a> {
    pub firmware_type: Option<&'a str>,
    pub firmware_desc: &'a str,
    pub version: &'a str,
    pub baud_rate: &'a str,
    pub extra: Option<&'a str>,
}

/// Parse a firmware filename.
///
/// Returns `None` when any part of the name does not conform; the whole
/// name must match, there is no partial parse.
pub fn parse_firmware_name(name: &str) -> Option<ParsedFirmwareName> {
    let (stem, extension) = split_extension(name)?;
    let segments: Vec<&str> = stem.split('_').collect();
    let (dongle_type, chip_model, tail) = split_head(&segments)?;
    let tail = match_tail(tail)?;

    Some(ParsedFirmwareName {
        dongle_type: dongle_type.to_string(),
        chip_model: chip_model.map(str::to_string),
        firmware_type: tail.firmware_type.map(str::to_string),
        firmware_desc: tail.firmware_desc.to_string(),
        version: tail.version.to_string(),
        baud_rate: tail.baud_rate.to_string(),
        extra: tail.extra.map(str::to_string),
        extension: extension.to_string(),
    })
}

/// Split `stem.ext` on the last dot, accepting only [`FIRMWARE_EXTENSIONS`].
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    let (stem, ext) = name.rsplit_once('.')?;
    FIRMWARE_EXTENSIONS
        .contains(&ext)
        .then_some((stem, ext))
}

/// Take the dongle token and the chip slot off the front of the segments.
///
/// Returns the dongle type, the chip model (`None` for an empty slot), and
/// the remaining segments.
pub fn split_head<'a, 'b>(
    segments: &'b [&'a str],
) -> Option<(&'a str, Option<&'a str>, &'b [&'a str])> {
    let [dongle, chip, tail @ ..] = segments else {
        return None;
    };
    if !is_alphanumeric_token(dongle) {
        return None;
    }
    let chip = match *chip {
        "" => None,
        c if is_alphanumeric_token(c) => Some(c),
        _ => return None,
    };
    Some((*dongle, chip, tail))
}

/// Match the segments after the chip slot against [`TAIL_LAYOUTS`].
pub fn match_tail<'a>(segments: &[&'a str]) -> Option<ParsedTail<'a>> {
    TAIL_LAYOUTS
        .iter()
        .find_map(|&layout| match_tail_layout(segments, layout))
}

/// Match the segments against a single layout.
pub fn match_tail_layout<'a>(segments: &[&'a str], layout: TailLayout) -> Option<ParsedTail<'a>> {
    if segments.len() != layout.segment_count() {
        return None;
    }
    let mut tokens = segments.iter().copied();

    let firmware_type = if layout.role {
        Some(tokens.next().filter(|t| is_alphanumeric_token(t))?)
    } else {
        None
    };
    let firmware_desc = tokens.next().filter(|t| is_alphanumeric_token(t))?;
    let version = tokens.next().filter(|t| is_version_token(t))?;
    let baud_rate = tokens.next().filter(|t| is_digit_token(t))?;
    let extra = if layout.extra {
        Some(tokens.next().filter(|t| is_version_token(t))?)
    } else {
        None
    };

    Some(ParsedTail {
        firmware_type,
        firmware_desc,
        version,
        baud_rate,
        extra,
    })
}

fn is_alphanumeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_version_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn is_digit_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
