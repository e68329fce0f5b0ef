//! Frame sequencing between a platform driver and the simulation.

use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, info};

use super::input::{Command, Controls, InputEvent};
use crate::core::TICKS_PER_SECOND;
use crate::sim::{FrameSnapshot, Simulation};

/// Target time between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

/// One running game plus its controls.
///
/// Per frame the driver feeds every pending platform event to
/// [`handle_event`](Self::handle_event), then calls [`step`](Self::step) and
/// draws the returned snapshot. Restarting swaps in a brand-new
/// `Simulation`; the old one is dropped.
#[derive(Clone, Debug)]
pub struct Session {
    simulation: Simulation,
    controls: Controls,
    pending: SmallVec<[Command; 4]>,
    quit: bool,
}

impl Session {
    #[must_use]
    pub fn new(simulation: Simulation, controls: Controls) -> Self {
        Self {
            simulation,
            controls,
            pending: SmallVec::new(),
            quit: false,
        }
    }

    /// Classic game, classic controls.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(Simulation::classic(), Controls::classic())
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    #[must_use]
    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// True once a quit event has been processed by `step`.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Commands queued for the next `step`.
    #[must_use]
    pub fn pending(&self) -> &[Command] {
        &self.pending
    }

    /// Decode and queue an event. Returns the command it produced, if any.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<Command> {
        let command = self.controls.decode(&event, self.simulation.finished())?;
        self.pending.push(command);
        Some(command)
    }

    /// Queue a command directly, bypassing decoding.
    pub fn push_command(&mut self, command: Command) {
        self.pending.push(command);
    }

    /// Run one frame: apply queued commands in order, tick, snapshot.
    pub fn step(&mut self) -> FrameSnapshot {
        for command in self.pending.drain(..) {
            match command {
                Command::Turn { player, direction } => {
                    self.simulation.turn(player, direction);
                }
                Command::Restart => {
                    info!(tick = self.simulation.tick_count(), "session restart");
                    self.simulation = self.simulation.fresh();
                }
                Command::Quit => {
                    debug!("quit requested");
                    self.quit = true;
                }
            }
        }
        self.simulation.tick();
        self.simulation.snapshot()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::classic()
    }
}
