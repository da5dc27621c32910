//! Hex color code validation and conversion to RGB.
//!
//! Accepts `RRGGBB` with or without a single leading `#`, in any case.
//! Validation and conversion are split so that [`convert`] only ever sees
//! input that [`validate`] has already accepted.

use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::types::RgbColor;

/// Number of hex digits in a color code, excluding the `#` prefix.
pub const HEX_DIGITS: usize = 6;

/// A validated hex color code: exactly six hex digits, `#` removed,
/// original case kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColorInput(String);

impl HexColorInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for HexColorInput {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

/// Validate a raw hex color code.
///
/// Length is checked before content, so `"XYZ"` is reported as
/// [`ValidationError::InvalidLength`].
pub fn validate(raw: &str) -> Result<HexColorInput, ValidationError> {
    let digits = raw.strip_prefix('#').unwrap_or(raw);

    let len = digits.chars().count();
    if len != HEX_DIGITS {
        return Err(ValidationError::InvalidLength { found: len });
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(HexColorInput(digits.to_string()))
}

/// Split a validated code into its three channels.
pub fn convert(input: &HexColorInput) -> RgbColor {
    let hex = input.as_str();
    RgbColor::new(channel(&hex[0..2]), channel(&hex[2..4]), channel(&hex[4..6]))
}

/// Validate then convert.
pub fn hex_to_rgb(raw: &str) -> Result<RgbColor, ValidationError> {
    Ok(convert(&validate(raw)?))
}

// validate() admits only ASCII hex digits, so every pair parses.
fn channel(pair: &str) -> u8 {
    u8::from_str_radix(pair, 16).unwrap_or_default()
}
