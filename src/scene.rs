//! The external molecule/crystal renderer the picker redraws after a color
//! change.
//!
//! The picker does not know how molecules are drawn. It only decides which
//! drawing passes run, from the first molecule and first crystal descriptor.

use crate::error::{PickerError, Result};

/// Molecule kind that marks a crystal structure.
pub const CRYSTAL_KIND: &str = "crystal";

/// A molecule descriptor as reported by the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Molecule {
    pub kind: String,
}

impl Molecule {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn is_crystal(&self) -> bool {
        self.kind == CRYSTAL_KIND
    }
}

/// A crystal descriptor. `cleave` and `preview` are integer flags; only the
/// exact values 0 and 1 are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Crystal {
    pub cleave: i32,
    pub preview: i32,
}

/// Drawing routines provided by the host.
///
/// All calls happen on the UI thread, in the order documented on
/// [`ColorPickerWidget::choose`](crate::ColorPickerWidget::choose). An error
/// aborts the remaining passes and is handed back to the caller.
pub trait MoleculeScene {
    /// Current molecule descriptors.
    fn molecules(&mut self) -> Result<Vec<Molecule>>;
    /// Current crystal descriptors.
    fn crystals(&mut self) -> Result<Vec<Crystal>>;
    /// Blank the full canvas area.
    fn clear(&mut self, width: f64, height: f64) -> Result<()>;
    fn draw_molecule(&mut self) -> Result<()>;
    fn draw_cube(&mut self) -> Result<()>;
    fn draw_axis(&mut self) -> Result<()>;
    fn draw_surface(&mut self) -> Result<()>;
}

/// Which optional passes a redraw runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawPlan {
    pub cube: bool,
    pub surface: bool,
}

impl RedrawPlan {
    pub fn new(molecules: &[Molecule], crystals: &[Crystal]) -> Result<Self> {
        let molecule = molecules.first().ok_or(PickerError::EmptyScene("molecule"))?;
        let crystal = crystals.first().ok_or(PickerError::EmptyScene("crystal"))?;
        Ok(Self {
            cube: (molecule.is_crystal() && crystal.cleave == 0) || crystal.preview == 1,
            surface: crystal.cleave == 1,
        })
    }
}

/// Clear the canvas and run every pass the current descriptors call for.
///
/// The molecule pass runs before the descriptors are inspected, so an empty
/// scene still gets its molecule drawn before the error is returned.
pub fn redraw(scene: &mut dyn MoleculeScene, width: f64, height: f64) -> Result<RedrawPlan> {
    scene.clear(width, height)?;
    let molecules = scene.molecules()?;
    let crystals = scene.crystals()?;

    scene.draw_molecule()?;
    let plan = RedrawPlan::new(&molecules, &crystals)?;
    log::debug!("redraw {width}x{height}: {plan:?}");
    if plan.cube {
        scene.draw_cube()?;
    }
    scene.draw_axis()?;
    if plan.surface {
        scene.draw_surface()?;
    }
    Ok(plan)
}
