//! Standalone demo: opens a window with the swatch picker over a logging scene.

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_swatch::{
    swatch_picker, ColorPickerWidget, Crystal, Molecule, MoleculeScene, PickerConfig, Result,
};

/// Reports each drawing pass instead of drawing.
struct LoggingScene {
    crystal: Crystal,
}

impl MoleculeScene for LoggingScene {
    fn molecules(&mut self) -> Result<Vec<Molecule>> {
        Ok(vec![Molecule::new("crystal")])
    }
    fn crystals(&mut self) -> Result<Vec<Crystal>> {
        Ok(vec![self.crystal])
    }
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        log::info!("clear {width}x{height}");
        Ok(())
    }
    fn draw_molecule(&mut self) -> Result<()> {
        log::info!("draw molecule");
        Ok(())
    }
    fn draw_cube(&mut self) -> Result<()> {
        log::info!("draw cube");
        Ok(())
    }
    fn draw_axis(&mut self) -> Result<()> {
        log::info!("draw axis");
        Ok(())
    }
    fn draw_surface(&mut self) -> Result<()> {
        log::info!("draw surface");
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let state = RwSignal::new(ColorPickerWidget::new(PickerConfig::default()));
    let scene = Rc::new(RefCell::new(LoggingScene {
        crystal: Crystal {
            cleave: 0,
            preview: 1,
        },
    }));

    floem::Application::new()
        .window(
            move |_| {
                swatch_picker(state, scene.clone()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((520.0, 560.0))
                    .title("floem-swatch"),
            ),
        )
        .run();
}
