//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, PlayerId};

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a player ID from a 0-based index (0 or 1).
    #[new]
    fn new(index: usize) -> PyResult<Self> {
        Ok(Self(PlayerId::from_index(index)?))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// The other player.
    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.index())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Direction name constants, so Python code can write `Direction.UP`.
#[pyclass(name = "Direction")]
pub struct PyDirection;

#[pymethods]
impl PyDirection {
    #[classattr]
    const UP: &'static str = "up";
    #[classattr]
    const DOWN: &'static str = "down";
    #[classattr]
    const LEFT: &'static str = "left";
    #[classattr]
    const RIGHT: &'static str = "right";

    /// Unit `(dx, dy)` vector for a direction name.
    #[staticmethod]
    fn vector(name: &str) -> PyResult<(i8, i8)> {
        Ok(parse_direction(name)?.vector())
    }
}

pub(crate) fn parse_direction(name: &str) -> PyResult<Direction> {
    name.parse::<Direction>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}
