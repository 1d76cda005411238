//! RGBA color value type with hex codec and distance metric

use crate::io::error::{PatternError, Result};
use std::fmt;

/// Fully opaque alpha channel value
pub const OPAQUE: u8 = 255;

/// An immutable 4-channel color with value semantics
///
/// Channels are clamped to `[0, 255]` at construction; equality and hashing
/// are structural over all four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = fully opaque)
    pub a: u8,
}

const fn clamp_channel(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

impl Color {
    /// Create a color, silently clamping each channel into `[0, 255]`
    ///
    /// Out-of-range inputs are clamped rather than rejected; there is no
    /// error path.
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: i32, g: i32, b: i32) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque white, the pipeline-wide fallback color
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex string
    ///
    /// The leading `#` is optional and digits are case-insensitive. A
    /// 6-digit string defaults alpha to 255.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidHex`] when the digit count is neither
    /// 6 nor 8 or any character is not a hex digit.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let alpha = match digits.len() {
            6 => None,
            8 => Some(parse_pair(hex, digits, 6)?),
            _ => {
                return Err(PatternError::InvalidHex {
                    value: hex.to_string(),
                    reason: "expected 6 or 8 hex digits",
                });
            }
        };

        let r = parse_pair(hex, digits, 0)?;
        let g = parse_pair(hex, digits, 2)?;
        let b = parse_pair(hex, digits, 4)?;

        Ok(Self {
            r,
            g,
            b,
            a: alpha.unwrap_or(OPAQUE),
        })
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
    ///
    /// Output is uppercase and round-trips with [`Self::from_hex`] for every
    /// representable color.
    pub fn to_hex(self) -> String {
        if self.a == OPAQUE {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Euclidean distance over all four channels, alpha included
    ///
    /// Deliberately unweighted (not perceptual) so results are deterministic
    /// and cheap to compute.
    pub fn distance_to(self, other: Self) -> f64 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        let da = i32::from(self.a) - i32::from(other.a);
        f64::from(dr * dr + dg * dg + db * db + da * da).sqrt()
    }

    /// Luma brightness `0.299R + 0.587G + 0.114B`, truncated to `[0, 255]`
    ///
    /// Alpha is ignored.
    pub fn brightness(self) -> u8 {
        let luma =
            0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        luma as u8
    }

    /// Whether the color is fully transparent (alpha = 0)
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn parse_pair(original: &str, digits: &str, offset: usize) -> Result<u8> {
    let pair = digits
        .get(offset..offset + 2)
        .ok_or_else(|| PatternError::InvalidHex {
            value: original.to_string(),
            reason: "expected 6 or 8 hex digits",
        })?;
    u8::from_str_radix(pair, 16).map_err(|_| PatternError::InvalidHex {
        value: original.to_string(),
        reason: "non-hex character",
    })
}

#[cfg(test)]
// Test assertions unwrap known-good values; a panic is the failure signal
#[allow(clippy::unwrap_used)]
mod tests {
    use super::Color;

    #[test]
    fn test_construction_clamps_out_of_range_channels() {
        let color = Color::new(-10, 300, 128, 600);
        assert_eq!((color.r, color.g, color.b, color.a), (0, 255, 128, 255));
    }

    #[test]
    fn test_hex_prefix_is_optional_and_case_insensitive() {
        let with_prefix = Color::from_hex("#ABCDEF").unwrap();
        let without_prefix = Color::from_hex("abcdef").unwrap();
        assert_eq!(with_prefix, without_prefix);
        assert_eq!(with_prefix.to_hex(), "#ABCDEF");
    }

    #[test]
    fn test_eight_digit_hex_carries_alpha() {
        let color = Color::from_hex("#11223344").unwrap();
        assert_eq!((color.r, color.g, color.b, color.a), (0x11, 0x22, 0x33, 0x44));
        assert_eq!(color.to_hex(), "#11223344");
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#FF00FF0").is_err());
    }

    #[test]
    fn test_brightness_uses_truncated_luma_weights() {
        assert_eq!(Color::opaque(255, 255, 255).brightness(), 255);
        assert_eq!(Color::opaque(0, 0, 0).brightness(), 0);
        // 0.299*255 = 76.245, truncated
        assert_eq!(Color::opaque(255, 0, 0).brightness(), 76);
    }
}
