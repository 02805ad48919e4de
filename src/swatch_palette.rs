//! The swatch grid shown under the color input.

use std::cell::RefCell;
use std::rc::Rc;

use floem::event::{EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::color::SwatchColor;
use crate::constants;
use crate::palette::Swatch;
use crate::scene::{redraw, MoleculeScene};
use crate::widget::ColorPickerWidget;

/// Creates the palette panel.
///
/// Swatches come from the picker state, so nothing is rendered until the
/// palette opens for the first time. Pointer enter/leave are tracked so a
/// focus loss caused by clicking a swatch does not close the panel first.
pub(crate) fn swatch_palette<S: MoleculeScene + 'static>(
    state: RwSignal<ColorPickerWidget>,
    scene: Rc<RefCell<S>>,
) -> impl IntoView {
    let (size, width) =
        state.with_untracked(|w| (w.config().swatch_size, w.config().palette_width()));

    container(
        dyn_stack(
            move || state.with(|w| w.palette().swatches().to_vec()),
            |swatch: &Swatch| swatch.color(),
            move |swatch| swatch_view(swatch, size, state, scene.clone()),
        )
        .style(|s| {
            s.flex_row()
                .flex_wrap(floem::taffy::FlexWrap::Wrap)
                .gap(constants::SWATCH_GAP)
        }),
    )
    .style(move |s| {
        let visible = state.with(|w| w.palette().is_visible());
        s.width(width)
            .padding(constants::PADDING)
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
            .background(constants::PANEL)
            .apply_if(!visible, |s| s.hide())
    })
    .on_event(EventListener::PointerEnter, move |_| {
        state.update(|w| w.pointer_enter_palette());
        EventPropagation::Continue
    })
    .on_event(EventListener::PointerLeave, move |_| {
        state.update(|w| w.pointer_leave_palette());
        EventPropagation::Continue
    })
}

fn swatch_view<S: MoleculeScene + 'static>(
    swatch: Swatch,
    size: f32,
    state: RwSignal<ColorPickerWidget>,
    scene: Rc<RefCell<S>>,
) -> impl IntoView {
    let color = swatch.color();
    empty()
        .style(move |s| {
            s.size(size, size)
                .background(color.to_floem())
                .border(1.0)
                .border_color(constants::BORDER)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.border_color(Color::BLACK))
        })
        .on_event_stop(EventListener::PointerDown, move |_| {
            apply_choice(state, &scene, color);
        })
}

/// Choose `color` and log a failed redraw.
///
/// The redraw runs after the state update returns, so the scene can read
/// `state` while drawing.
fn apply_choice<S: MoleculeScene>(
    state: RwSignal<ColorPickerWidget>,
    scene: &RefCell<S>,
    color: SwatchColor,
) {
    let mut size = (0.0, 0.0);
    state.update(|w| size = w.apply_color(color));
    if let Err(err) = redraw(&mut *scene.borrow_mut(), size.0, size.1) {
        log::error!("redraw after choosing {color} failed: {err}");
    }
}
