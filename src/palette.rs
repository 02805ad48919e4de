//! The fixed preset palette.
//!
//! A grayscale ramp followed by dark-to-light ramps for each hue family. The
//! order here is the order swatches are rendered in.

use crate::color::SwatchColor;

const fn ramp<const N: usize>(rgb: [(u8, u8, u8); N]) -> [SwatchColor; N] {
    let mut out = [SwatchColor::BLACK; N];
    let mut i = 0;
    while i < N {
        out[i] = SwatchColor::from_rgb(rgb[i].0, rgb[i].1, rgb[i].2);
        i += 1;
    }
    out
}

const GRAY: [SwatchColor; 10] = ramp([
    (0, 0, 0), (28, 28, 28), (56, 56, 56), (85, 85, 85), (113, 113, 113),
    (141, 141, 141), (170, 170, 170), (198, 198, 198), (226, 226, 226), (255, 255, 255),
]);

const RED: [SwatchColor; 12] = ramp([
    (51, 0, 0), (77, 0, 0), (102, 0, 0), (128, 0, 0), (153, 0, 0), (179, 0, 0),
    (204, 0, 0), (230, 0, 0), (255, 0, 0), (255, 51, 51), (255, 102, 102), (255, 153, 153),
]);

const ORANGE: [SwatchColor; 12] = ramp([
    (51, 26, 0), (77, 38, 0), (102, 51, 0), (128, 64, 0), (153, 77, 0), (179, 89, 0),
    (204, 102, 0), (230, 115, 0), (255, 128, 0), (255, 153, 51), (255, 179, 102), (255, 204, 153),
]);

const YELLOW: [SwatchColor; 12] = ramp([
    (51, 51, 0), (77, 77, 0), (102, 102, 0), (128, 128, 0), (153, 153, 0), (179, 179, 0),
    (204, 204, 0), (230, 230, 0), (255, 255, 0), (255, 255, 51), (255, 255, 102), (255, 255, 153),
]);

const GREEN: [SwatchColor; 12] = ramp([
    (0, 51, 0), (0, 77, 0), (0, 102, 0), (0, 128, 0), (0, 153, 0), (0, 179, 0),
    (0, 204, 0), (0, 230, 0), (0, 255, 0), (51, 255, 51), (102, 255, 102), (153, 255, 153),
]);

const CYAN: [SwatchColor; 12] = ramp([
    (0, 51, 51), (0, 77, 77), (0, 102, 102), (0, 128, 128), (0, 153, 153), (0, 179, 179),
    (0, 204, 204), (0, 230, 230), (0, 255, 255), (26, 255, 255), (77, 255, 255), (128, 255, 255),
]);

const BLUE: [SwatchColor; 12] = ramp([
    (0, 0, 51), (0, 0, 77), (0, 0, 102), (0, 0, 128), (0, 0, 153), (0, 0, 179),
    (0, 0, 204), (0, 0, 230), (0, 0, 255), (51, 51, 255), (102, 102, 255), (153, 153, 255),
]);

const PINK: [SwatchColor; 12] = ramp([
    (51, 0, 20), (77, 0, 31), (102, 0, 41), (128, 0, 51), (153, 0, 61), (179, 0, 71),
    (204, 0, 82), (230, 0, 92), (255, 0, 102), (255, 51, 133), (255, 102, 163), (255, 153, 194),
]);

/// Number of preset swatches.
pub const PRESET_COUNT: usize = 94;

const fn concat() -> [SwatchColor; PRESET_COUNT] {
    let groups: [&[SwatchColor]; 8] = [
        &GRAY, &RED, &ORANGE, &YELLOW, &GREEN, &CYAN, &BLUE, &PINK,
    ];
    let mut out = [SwatchColor::BLACK; PRESET_COUNT];
    let mut n = 0;
    let mut g = 0;
    while g < groups.len() {
        let group = groups[g];
        let mut i = 0;
        while i < group.len() {
            out[n] = group[i];
            n += 1;
            i += 1;
        }
        g += 1;
    }
    out
}

/// Every swatch the palette shows, in render order.
pub const PRESET_SWATCHES: [SwatchColor; PRESET_COUNT] = concat();

/// A rendered palette entry. Carries nothing but its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    color: SwatchColor,
}

impl Swatch {
    pub fn color(&self) -> SwatchColor {
        self.color
    }

    /// The swatch's CSS background value.
    pub fn background(&self) -> String {
        self.color.to_css_rgb()
    }
}

/// Build one swatch per preset color.
pub(crate) fn render_presets() -> Vec<Swatch> {
    PRESET_SWATCHES
        .iter()
        .map(|&color| Swatch { color })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_layout() {
        assert_eq!(PRESET_SWATCHES.len(), 94);
        assert_eq!(PRESET_SWATCHES[0], SwatchColor::BLACK);
        assert_eq!(PRESET_SWATCHES[9], SwatchColor::from_rgb(255, 255, 255));
        assert_eq!(PRESET_SWATCHES[10], SwatchColor::from_rgb(51, 0, 0));
        assert_eq!(PRESET_SWATCHES[93], SwatchColor::from_rgb(255, 153, 194));
    }

    #[test]
    fn grayscale_ramp_comes_first() {
        for c in &PRESET_SWATCHES[..10] {
            assert!(c.r() == c.g() && c.g() == c.b(), "{c} is not gray");
        }
        for pair in PRESET_SWATCHES[..10].windows(2) {
            assert!(pair[0].r() < pair[1].r());
        }
    }

    #[test]
    fn presets_are_distinct() {
        let unique: std::collections::HashSet<_> = PRESET_SWATCHES.iter().collect();
        assert_eq!(unique.len(), PRESET_COUNT);
    }

    #[test]
    fn contains_reference_colors() {
        let hexes: Vec<String> = PRESET_SWATCHES.iter().map(|c| c.to_hex()).collect();
        assert!(hexes.contains(&"#ff0066".to_string()));
        assert!(hexes.contains(&"#1affff".to_string()));
    }

    #[test]
    fn rendered_swatches_follow_presets() {
        let swatches = render_presets();
        assert_eq!(swatches.len(), PRESET_COUNT);
        for (swatch, preset) in swatches.iter().zip(PRESET_SWATCHES.iter()) {
            assert_eq!(swatch.color(), *preset);
            assert_eq!(swatch.background(), preset.to_css_rgb());
        }
    }
}
