//! Per-instance picker settings.

use crate::color::SwatchColor;
use crate::constants;

/// Layout and default-color settings for one picker instance.
///
/// The preset palette itself is fixed; see [`PRESET_SWATCHES`](crate::PRESET_SWATCHES).
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Input background applied when the palette opens on an empty value.
    pub default_background: SwatchColor,
    /// Edge length of one swatch.
    pub swatch_size: f32,
    /// Swatches per palette row.
    pub columns: usize,
    /// Width of the color input.
    pub input_width: f32,
    /// Initial canvas size, before layout reports the real one.
    pub canvas_size: (f64, f64),
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_background: SwatchColor::BLACK,
            swatch_size: constants::SWATCH_SIZE,
            columns: constants::PALETTE_COLUMNS,
            input_width: constants::INPUT_WIDTH,
            canvas_size: (constants::CANVAS_WIDTH, constants::CANVAS_HEIGHT),
        }
    }
}

impl PickerConfig {
    pub fn default_background(mut self, color: SwatchColor) -> Self {
        self.default_background = color;
        self
    }

    pub fn swatch_size(mut self, size: f32) -> Self {
        self.swatch_size = size;
        self
    }

    /// Zero is treated as one column.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn input_width(mut self, width: f32) -> Self {
        self.input_width = width;
        self
    }

    pub fn canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_size = (width, height);
        self
    }

    /// Palette width that fits exactly `columns` swatches per row.
    pub fn palette_width(&self) -> f32 {
        let cols = self.columns.max(1) as f32;
        cols * (self.swatch_size + constants::SWATCH_GAP) + 2.0 * constants::PADDING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_black_background() {
        assert_eq!(PickerConfig::default().default_background, SwatchColor::BLACK);
    }

    #[test]
    fn builder_overrides() {
        let cfg = PickerConfig::default()
            .default_background(SwatchColor::from_rgb(1, 2, 3))
            .swatch_size(10.0)
            .columns(0)
            .canvas_size(640.0, 480.0);
        assert_eq!(cfg.default_background, SwatchColor::from_rgb(1, 2, 3));
        assert_eq!(cfg.columns, 1);
        assert_eq!(cfg.canvas_size, (640.0, 480.0));
        assert_eq!(
            cfg.palette_width(),
            10.0 + constants::SWATCH_GAP + 2.0 * constants::PADDING
        );
    }
}
