//! Canvas view painted with the chosen background.
//!
//! The molecule itself is drawn by the host's [`MoleculeScene`]; this view
//! owns the surface the picker recolors and reports its laid-out size back
//! to the picker so redraws clear the right area.
//!
//! [`MoleculeScene`]: crate::MoleculeScene

use floem::kurbo::Rect;
use floem::peniko::Color;

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::SwatchColor;
use crate::constants;
use crate::widget::ColorPickerWidget;

pub(crate) struct CanvasView {
    id: ViewId,
    background: Option<SwatchColor>,
    size: floem::taffy::prelude::Size<f32>,
    on_resize: Box<dyn Fn(f64, f64)>,
}

/// Creates the canvas view for `state`.
pub(crate) fn molecule_canvas(state: RwSignal<ColorPickerWidget>) -> CanvasView {
    let id = ViewId::new();

    create_effect(move |prev: Option<Option<SwatchColor>>| {
        let bg = state.with(|w| w.canvas().background());
        if prev != Some(bg) {
            id.update_state(bg);
        }
        bg
    });

    let (width, height) = state.with_untracked(|w| (w.canvas().width(), w.canvas().height()));

    CanvasView {
        id,
        background: state.with_untracked(|w| w.canvas().background()),
        size: Default::default(),
        on_resize: Box::new(move |w, h| {
            state.update(|picker| picker.resize_canvas(w, h));
        }),
    }
    .style(move |s| {
        s.width(width as f32)
            .height(height as f32)
            .border(1.0)
            .border_color(constants::BORDER)
    })
}

impl View for CanvasView {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(bg) = state.downcast::<Option<SwatchColor>>() {
            self.background = *bg;
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        if layout.size != self.size {
            self.size = layout.size;
            (self.on_resize)(self.size.width as f64, self.size.height as f64);
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let rect = Rect::new(0.0, 0.0, self.size.width as f64, self.size.height as f64);
        let fill = self.background.map_or(Color::WHITE, |c| c.to_floem());
        cx.fill(&rect, fill, 0.0);
    }
}
