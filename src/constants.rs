//! Sizing, color, and styling constants for the picker.

use floem::peniko::Color;

/// Swatch edge length
pub const SWATCH_SIZE: f32 = 14.0;

/// Gap between swatches
pub const SWATCH_GAP: f32 = 2.0;

/// Swatches per palette row (one hue ramp is 12 wide)
pub const PALETTE_COLUMNS: usize = 12;

/// Border radius for the input and palette
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the palette
pub const PADDING: f32 = 6.0;

/// Color input width
pub const INPUT_WIDTH: f32 = 96.0;

/// Color input height
pub const INPUT_HEIGHT: f32 = 24.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Default canvas size
pub const CANVAS_WIDTH: f64 = 480.0;
pub const CANVAS_HEIGHT: f64 = 360.0;

/// Border color for the input, swatches and palette
pub const BORDER: Color = Color::rgb8(200, 200, 200);

/// Palette panel background
pub const PANEL: Color = Color::rgb8(242, 242, 242);
