//! Python bindings for the light cycle simulation.
//!
//! Lets a Python driver (pygame or similar) own the window and input while
//! the game rules run here.
//!
//! # Quick Start
//!
//! ```python
//! import light_cycle as lc
//!
//! sim = lc.Simulation()
//! sim.apply_turn(0, lc.Direction.UP)
//! while not sim.tick():
//!     draw(sim.trails, sim.positions, sim.alive)
//! print(sim.winner)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::SimulationError;

mod py_core;
mod py_sim;

pub use py_core::*;
pub use py_sim::*;

impl From<SimulationError> for PyErr {
    fn from(err: SimulationError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// light_cycle: two-player light cycle game core.
#[pymodule]
fn light_cycle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyDirection>()?;
    m.add_class::<PySimulation>()?;

    m.add("PLAYFIELD_WIDTH", crate::core::PLAYFIELD_WIDTH)?;
    m.add("PLAYFIELD_HEIGHT", crate::core::PLAYFIELD_HEIGHT)?;
    m.add("TICKS_PER_SECOND", crate::core::TICKS_PER_SECOND)?;

    Ok(())
}
