//! Picker layout: the color input, its palette, and the canvas below.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::RwSignal;

use crate::constants;
use crate::inputs::color_input;
use crate::molecule_canvas::molecule_canvas;
use crate::scene::MoleculeScene;
use crate::swatch_palette::swatch_palette;
use crate::widget::ColorPickerWidget;

pub(crate) fn color_picker<S: MoleculeScene + 'static>(
    state: RwSignal<ColorPickerWidget>,
    scene: Rc<RefCell<S>>,
) -> impl IntoView {
    v_stack((
        v_stack((color_input(state), swatch_palette(state, scene)))
            .style(|s| s.gap(constants::SWATCH_GAP * 2.0)),
        molecule_canvas(state),
    ))
    .style(|s| s.gap(constants::GAP).padding(constants::GAP))
}
