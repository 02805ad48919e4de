//! Picker state: the color input, the swatch palette and the canvas it
//! recolors.
//!
//! This is the whole behavior of the picker, independent of the toolkit. The
//! view layer forwards pointer and focus events here and renders whatever
//! state results.

use crate::color::SwatchColor;
use crate::config::PickerConfig;
use crate::error::Result;
use crate::palette::{self, Swatch};
use crate::scene::{redraw, MoleculeScene, RedrawPlan};

/// Palette visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Whether the color input itself is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDisplay {
    #[default]
    Shown,
    Hidden,
}

/// The text-like control showing the chosen hex value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorInput {
    value: String,
    background: Option<SwatchColor>,
    display: InputDisplay,
}

impl ColorInput {
    /// Current hex value, empty until a swatch is chosen.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn background(&self) -> Option<SwatchColor> {
        self.background
    }

    pub fn display(&self) -> InputDisplay {
        self.display
    }
}

/// The panel of swatches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorPalette {
    visibility: Visibility,
    pointer_over: bool,
    swatches: Vec<Swatch>,
}

impl ColorPalette {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn pointer_over(&self) -> bool {
        self.pointer_over
    }

    /// Rendered swatches; empty until the palette is first shown.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }
}

/// The drawing surface recolored on selection.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeCanvas {
    width: f64,
    height: f64,
    style: String,
}

impl MoleculeCanvas {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Inline style, `background-color:<hex>` once a color was chosen.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Background parsed back out of the inline style.
    pub fn background(&self) -> Option<SwatchColor> {
        self.style
            .strip_prefix("background-color:")
            .and_then(|hex| SwatchColor::from_hex(hex).ok())
    }
}

/// One picker instance, constructed once and kept for the lifetime of its
/// window.
#[derive(Debug, Clone)]
pub struct ColorPickerWidget {
    config: PickerConfig,
    input: ColorInput,
    palette: ColorPalette,
    canvas: MoleculeCanvas,
}

impl ColorPickerWidget {
    pub fn new(config: PickerConfig) -> Self {
        let (width, height) = config.canvas_size;
        Self {
            config,
            input: ColorInput::default(),
            palette: ColorPalette::default(),
            canvas: MoleculeCanvas {
                width,
                height,
                style: String::new(),
            },
        }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn input(&self) -> &ColorInput {
        &self.input
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn canvas(&self) -> &MoleculeCanvas {
        &self.canvas
    }

    /// Record the canvas size reported by layout.
    pub fn resize_canvas(&mut self, width: f64, height: f64) {
        self.canvas.width = width;
        self.canvas.height = height;
    }

    /// Click (or focus-in) on the color input: default the background when no
    /// value is set, then open the palette.
    pub fn click_input(&mut self) {
        if self.input.value.is_empty() {
            self.input.background = Some(self.config.default_background);
        }
        self.show_palette();
    }

    /// Render the preset swatches if they are not rendered yet, then show the
    /// palette.
    pub fn show_palette(&mut self) {
        if self.palette.swatches.is_empty() {
            self.palette.swatches = palette::render_presets();
        }
        if !self.palette.is_visible() {
            log::debug!("palette shown");
        }
        self.palette.visibility = Visibility::Visible;
    }

    /// Focus left the input. The palette closes unless the pointer is over
    /// it, so a swatch click in progress is not lost.
    pub fn focus_out(&mut self) {
        if self.palette.pointer_over {
            log::debug!("focus lost over palette; keeping it open");
            return;
        }
        self.hide_palette();
    }

    pub fn pointer_enter_palette(&mut self) {
        self.palette.pointer_over = true;
    }

    pub fn pointer_leave_palette(&mut self) {
        self.palette.pointer_over = false;
    }

    /// A hidden palette no longer receives pointer events, so the pointer
    /// flag is cleared along with it.
    fn hide_palette(&mut self) {
        if self.palette.is_visible() {
            log::debug!("palette hidden");
        }
        self.palette.visibility = Visibility::Hidden;
        self.palette.pointer_over = false;
    }

    /// Apply a swatch color and redraw the scene.
    ///
    /// In order: the input takes the hex value and background, the palette
    /// closes, the canvas style becomes `background-color:<hex>`, and the
    /// scene is cleared and redrawn. A scene error is returned as soon as it
    /// happens; the color has been applied by then.
    pub fn choose(&mut self, color: SwatchColor, scene: &mut dyn MoleculeScene) -> Result<RedrawPlan> {
        let (width, height) = self.apply_color(color);
        redraw(scene, width, height)
    }

    /// The state half of [`choose`](Self::choose): apply `color` to the
    /// input and canvas and close the palette. Returns the canvas size the
    /// redraw must clear.
    ///
    /// Callers holding the picker behind a signal apply the color here and
    /// run [`redraw`] once the signal is released, so the scene may read the
    /// picker while it draws.
    pub fn apply_color(&mut self, color: SwatchColor) -> (f64, f64) {
        let hex = color.to_hex();
        log::info!("color chosen: {hex}");

        self.input.value = hex.clone();
        self.input.background = Some(color);
        self.hide_palette();
        self.canvas.style = format!("background-color:{hex}");

        (self.canvas.width, self.canvas.height)
    }

    /// [`choose`](Self::choose) with the swatch's CSS `rgb(r, g, b)`
    /// background. Malformed input changes nothing.
    pub fn choose_css(&mut self, background: &str, scene: &mut dyn MoleculeScene) -> Result<RedrawPlan> {
        let color = SwatchColor::from_css_rgb(background)?;
        self.choose(color, scene)
    }

    /// Flip whether the input is displayed. Not bound to any event.
    pub fn toggle_input_display(&mut self) -> InputDisplay {
        self.input.display = match self.input.display {
            InputDisplay::Shown => InputDisplay::Hidden,
            InputDisplay::Hidden => InputDisplay::Shown,
        };
        self.input.display
    }
}

impl Default for ColorPickerWidget {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}
