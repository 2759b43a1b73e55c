//! Hex color blending used by the potion gradient.
//!
//! # Invariants
//! - Accepted input is exactly six hex digits with an optional leading `#`.
//! - Output is always lowercase `#rrggbb`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{6})$").expect("valid hex color regex"));

/// Input could not be parsed as a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorError {
    pub input: String,
}

impl Display for InvalidColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid hex color `{}`; expected #rrggbb", self.input)
    }
}

impl Error for InvalidColorError {}

/// Parses `#rrggbb` (or `rrggbb`) into RGB channels.
pub fn parse_hex(color: &str) -> Result<[u8; 3], InvalidColorError> {
    let invalid = || InvalidColorError {
        input: color.to_string(),
    };
    let digits = HEX_COLOR_RE
        .captures(color)
        .and_then(|caps| caps.get(1))
        .ok_or_else(invalid)?
        .as_str();
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    Ok([(value >> 16) as u8, (value >> 8) as u8, value as u8])
}

/// Lightens `color` by `percent` of the full channel range.
///
/// Each channel gets `round(2.55 * percent)` added and is clamped to
/// `[0, 255]`; negative percentages darken.
pub fn lighten(color: &str, percent: f64) -> Result<String, InvalidColorError> {
    let channels = parse_hex(color)?;
    let amount = (2.55 * percent).round() as i64;
    let [r, g, b] = channels.map(|channel| (i64::from(channel) + amount).clamp(0, 255));
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}
