//! The color input the palette opens from.

use floem::event::EventListener;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::constants;
use crate::widget::{ColorPickerWidget, InputDisplay};

/// A clickable, focusable field showing the chosen hex value over the chosen
/// color.
///
/// Pointer-down or gaining focus opens the palette; losing focus closes it
/// unless the pointer is over the palette.
pub(crate) fn color_input(state: RwSignal<ColorPickerWidget>) -> impl IntoView {
    let width = state.with_untracked(|w| w.config().input_width);

    h_stack((
        label(move || state.with(|w| w.input().value().to_string())).style(move |s| {
            let dark = state.with(|w| w.input().background().is_some_and(|c| c.is_dark()));
            let fg = if dark {
                Color::WHITE
            } else {
                Color::rgb8(40, 40, 40)
            };
            s.flex_grow(1.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(fg)
        }),
        label(|| lucide_icons::Icon::Palette.unicode().to_string()).style(|s| {
            s.font_size(14.0)
                .font_family("lucide".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
    ))
    .keyboard_navigable()
    .style(move |s| {
        let (bg, display) = state.with(|w| (w.input().background(), w.input().display()));
        s.width(width)
            .height(constants::INPUT_HEIGHT)
            .padding_horiz(4.0)
            .items_center()
            .border(1.0)
            .border_color(constants::BORDER)
            .border_radius(constants::RADIUS)
            .background(bg.map_or(Color::WHITE, |c| c.to_floem()))
            .cursor(floem::style::CursorStyle::Pointer)
            .apply_if(display == InputDisplay::Hidden, |s| s.hide())
    })
    .on_event_stop(EventListener::PointerDown, move |_| {
        state.update(|w| w.click_input());
    })
    .on_event_stop(EventListener::FocusGained, move |_| {
        state.update(|w| w.click_input());
    })
    .on_event_stop(EventListener::FocusLost, move |_| {
        state.update(|w| w.focus_out());
    })
}
