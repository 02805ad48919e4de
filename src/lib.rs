//! # floem-swatch
//!
//! A preset color swatch picker for [Floem](https://github.com/lapce/floem).
//!
//! Clicking the color input opens a palette of fixed swatches. Choosing one
//! writes its `#rrggbb` value into the input, paints the molecule canvas with
//! it and asks the host's [`MoleculeScene`] to redraw.
//!
//! All behavior lives in [`ColorPickerWidget`], which can be driven and
//! tested without a window; the views only forward events to it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use floem::prelude::*;
//! use floem_swatch::{swatch_picker, ColorPickerWidget, PickerConfig};
//! # use floem_swatch::{Crystal, Molecule, MoleculeScene, Result};
//! # struct Scene;
//! # impl MoleculeScene for Scene {
//! #     fn molecules(&mut self) -> Result<Vec<Molecule>> { Ok(vec![Molecule::new("crystal")]) }
//! #     fn crystals(&mut self) -> Result<Vec<Crystal>> { Ok(vec![Crystal::default()]) }
//! #     fn clear(&mut self, _: f64, _: f64) -> Result<()> { Ok(()) }
//! #     fn draw_molecule(&mut self) -> Result<()> { Ok(()) }
//! #     fn draw_cube(&mut self) -> Result<()> { Ok(()) }
//! #     fn draw_axis(&mut self) -> Result<()> { Ok(()) }
//! #     fn draw_surface(&mut self) -> Result<()> { Ok(()) }
//! # }
//!
//! let state = RwSignal::new(ColorPickerWidget::new(PickerConfig::default()));
//! let scene = Rc::new(RefCell::new(Scene));
//! // Use `swatch_picker(state, scene)` in your Floem view tree.
//! ```

mod color;
mod color_picker;
mod config;
mod constants;
mod error;
mod inputs;
mod molecule_canvas;
mod palette;
mod scene;
mod swatch_palette;
mod widget;

pub use color::{rgb_to_hex, SwatchColor};
pub use config::PickerConfig;
pub use error::{ColorError, PickerError, Result};
pub use palette::{Swatch, PRESET_COUNT, PRESET_SWATCHES};
pub use scene::{redraw, Crystal, Molecule, MoleculeScene, RedrawPlan, CRYSTAL_KIND};
pub use widget::{
    ColorInput, ColorPalette, ColorPickerWidget, InputDisplay, MoleculeCanvas, Visibility,
};

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level swatch picker view.
///
/// The picker reads from and writes to `state`; hosts can watch the signal
/// for the chosen value. `scene` is redrawn after every selection.
pub fn swatch_picker<S: MoleculeScene + 'static>(
    state: RwSignal<ColorPickerWidget>,
    scene: Rc<RefCell<S>>,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    color_picker::color_picker(state, scene)
}
