//! Simulation bindings for Python.

use pyo3::prelude::*;

use crate::core::PlayerId;
use crate::sim::Simulation;

use super::py_core::{parse_direction, PyPlayerId};

/// Python wrapper for Simulation.
///
/// Drive it from a game loop: `apply_turn` for key presses, `tick` once per
/// frame, then read `positions`/`trails`/`alive` to draw.
#[pyclass(name = "Simulation")]
pub struct PySimulation {
    inner: Simulation,
}

#[pymethods]
impl PySimulation {
    /// Create the classic two-player game.
    #[new]
    fn new() -> Self {
        Self {
            inner: Simulation::classic(),
        }
    }

    /// Advance one tick. Returns True once the game is finished.
    fn tick(&mut self) -> bool {
        self.inner.tick().is_finished()
    }

    /// Request a heading for cycle `index` ("up", "down", "left", "right").
    ///
    /// Returns whether the turn was accepted. Raises ValueError for an
    /// unknown index or direction name.
    fn apply_turn(&mut self, index: usize, direction: &str) -> PyResult<bool> {
        let direction = parse_direction(direction)?;
        Ok(self.inner.apply_turn(index, direction)?)
    }

    /// Start over from the initial layout.
    fn restart(&mut self) {
        self.inner = self.inner.fresh();
    }

    #[getter]
    fn finished(&self) -> bool {
        self.inner.finished()
    }

    /// Winner's name, "Draw", or None while running.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.inner.winner_name().map(str::to_owned)
    }

    /// Winning player, None for a draw or while running.
    #[getter]
    fn winner_id(&self) -> Option<PyPlayerId> {
        self.inner
            .winner()
            .and_then(|result| result.winner())
            .map(PyPlayerId)
    }

    #[getter]
    fn tick_count(&self) -> u64 {
        self.inner.tick_count()
    }

    #[getter]
    fn positions(&self) -> Vec<(f32, f32)> {
        self.inner.cycles().map(|(_, c)| c.position().into()).collect()
    }

    #[getter]
    fn trails(&self) -> Vec<Vec<(f32, f32)>> {
        self.inner.cycles().map(|(_, c)| c.trail().to_tuples()).collect()
    }

    #[getter]
    fn alive(&self) -> Vec<bool> {
        self.inner.cycles().map(|(_, c)| c.is_alive()).collect()
    }

    #[getter]
    fn names(&self) -> Vec<String> {
        self.inner.cycles().map(|(_, c)| c.name().to_owned()).collect()
    }

    #[getter]
    fn colors(&self) -> Vec<(u8, u8, u8)> {
        self.inner.cycles().map(|(_, c)| c.color().to_tuple()).collect()
    }

    /// Current heading name of one cycle.
    fn direction(&self, player: &PyPlayerId) -> &'static str {
        self.inner.cycle(player.0).direction().name()
    }

    fn __repr__(&self) -> String {
        let status = match self.inner.winner_name() {
            Some(winner) => format!("finished, winner={winner}"),
            None => "running".to_string(),
        };
        format!(
            "Simulation(tick={}, {}, P0={}, P1={})",
            self.inner.tick_count(),
            status,
            self.inner.cycle(PlayerId::FIRST).position(),
            self.inner.cycle(PlayerId::SECOND).position(),
        )
    }
}
