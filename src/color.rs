//! SwatchColor, the 8-bit RGB color carried by every swatch.
//!
//! Swatches are rendered with CSS-style `rgb(r, g, b)` backgrounds and
//! selections are reported as lowercase `#rrggbb` strings. Both textual forms
//! are parsed and formatted here.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Opaque RGB color with 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwatchColor {
    r: u8,
    g: u8,
    b: u8,
}

impl SwatchColor {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);

    /// Create from 0–255 RGB values.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel.
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Format as lowercase hex with a leading `#`, e.g. `#ff0066`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Format as a CSS background value, e.g. `rgb(255, 0, 102)`.
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Parse `rgb(r, g, b)`. Whitespace around channels is ignored; alpha is
    /// not accepted.
    pub fn from_css_rgb(css: &str) -> Result<Self, ColorError> {
        let inner = css
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ColorError::NotRgb(css.to_string()))?;

        let channels = inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u8>()
                    .map_err(|_| ColorError::Channel(part.to_string()))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match channels[..] {
            [r, g, b] => Ok(Self { r, g, b }),
            _ => Err(ColorError::ChannelCount(channels.len())),
        }
    }

    /// Parse `#rrggbb` (case-insensitive, `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let stripped = hex.trim_start_matches('#');
        if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&stripped[range], 16).map_err(|_| ColorError::NotHex(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Whether light text reads better on top of this color.
    pub fn is_dark(&self) -> bool {
        let luma = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        luma < 128_000
    }

    /// Convert to a Floem paint color.
    pub fn to_floem(&self) -> floem::peniko::Color {
        floem::peniko::Color::rgb8(self.r, self.g, self.b)
    }
}

impl fmt::Display for SwatchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for SwatchColor {
    type Err = ColorError;

    /// Accepts either textual form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with("rgb(") {
            Self::from_css_rgb(s)
        } else {
            Self::from_hex(s)
        }
    }
}

/// Convert a CSS `rgb(r, g, b)` background into a `#rrggbb` string.
pub fn rgb_to_hex(css: &str) -> Result<String, ColorError> {
    SwatchColor::from_css_rgb(css).map(|c| c.to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex_examples() {
        assert_eq!(rgb_to_hex("rgb(0, 0, 0)").unwrap(), "#000000");
        assert_eq!(rgb_to_hex("rgb(255, 0, 102)").unwrap(), "#ff0066");
        assert_eq!(rgb_to_hex("rgb(26, 255, 255)").unwrap(), "#1affff");
    }

    #[test]
    fn rgb_to_hex_pads_every_channel_value() {
        for v in 0..=255u8 {
            let hex = rgb_to_hex(&format!("rgb({v}, {v}, {v})")).unwrap();
            assert_eq!(hex.len(), 7);
            let pair = format!("{v:02x}");
            assert_eq!(hex, format!("#{pair}{pair}{pair}"));
        }
    }

    #[test]
    fn channels_stay_in_order() {
        assert_eq!(rgb_to_hex("rgb(1, 2, 3)").unwrap(), "#010203");
        assert_eq!(rgb_to_hex("rgb(16,15,160)").unwrap(), "#100fa0");
    }

    #[test]
    fn rejects_malformed_css() {
        assert_eq!(
            rgb_to_hex("#ff0066"),
            Err(ColorError::NotRgb("#ff0066".to_string()))
        );
        assert_eq!(
            rgb_to_hex("rgba(1, 2, 3, 0.5)"),
            Err(ColorError::NotRgb("rgba(1, 2, 3, 0.5)".to_string()))
        );
        assert_eq!(rgb_to_hex("rgb(1, 2)"), Err(ColorError::ChannelCount(2)));
        assert_eq!(
            rgb_to_hex("rgb(1, 2, 256)"),
            Err(ColorError::Channel("256".to_string()))
        );
        assert_eq!(
            rgb_to_hex("rgb(1, x, 3)"),
            Err(ColorError::Channel("x".to_string()))
        );
    }

    #[test]
    fn css_form_matches_swatch_background() {
        let c = SwatchColor::from_rgb(255, 0, 102);
        assert_eq!(c.to_css_rgb(), "rgb(255, 0, 102)");
        assert_eq!(SwatchColor::from_css_rgb(&c.to_css_rgb()).unwrap(), c);
    }

    #[test]
    fn dark_colors() {
        assert!(SwatchColor::BLACK.is_dark());
        assert!(SwatchColor::from_rgb(0, 0, 255).is_dark());
        assert!(!SwatchColor::from_rgb(255, 255, 255).is_dark());
        assert!(!SwatchColor::from_rgb(255, 255, 0).is_dark());
    }

    #[test]
    fn hex_parse() {
        assert_eq!(
            SwatchColor::from_hex("#1AFFFF").unwrap(),
            SwatchColor::from_rgb(26, 255, 255)
        );
        assert!(SwatchColor::from_hex("#fff").is_err());
        assert!(SwatchColor::from_hex("#gg0000").is_err());
        assert_eq!("rgb(0, 0, 0)".parse::<SwatchColor>().unwrap(), SwatchColor::BLACK);
        assert_eq!("#000000".parse::<SwatchColor>().unwrap(), SwatchColor::BLACK);
    }
}
