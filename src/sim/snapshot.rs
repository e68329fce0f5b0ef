//! Per-frame read-only view of a game.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Direction, PlayerId, PlayerMap, Point};
use crate::cycle::{Crash, Cycle, Trail};
use crate::rules::GameResult;

/// What the renderer sees of one cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CycleView {
    pub player: PlayerId,
    pub name: String,
    pub color: Color,
    pub position: Point,
    pub direction: Direction,
    pub trail: Trail,
    pub alive: bool,
    pub crash: Option<Crash>,
}

impl CycleView {
    pub(crate) fn of(player: PlayerId, cycle: &Cycle) -> Self {
        Self {
            player,
            name: cycle.name().to_owned(),
            color: cycle.color(),
            position: cycle.position(),
            direction: cycle.direction(),
            trail: cycle.trail().clone(),
            alive: cycle.is_alive(),
            crash: cycle.crash(),
        }
    }
}

/// Everything the driver reads once per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub finished: bool,
    pub result: Option<GameResult>,
    /// Winner's name, or `"Draw"`.
    pub winner: Option<String>,
    pub cycles: PlayerMap<CycleView>,
}

impl FrameSnapshot {
    pub fn cycle(&self, player: PlayerId) -> &CycleView {
        &self.cycles[player]
    }
}

#[cfg(test)]
mod tests {
    use crate::core::PlayerId;
    use crate::sim::Simulation;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut sim = Simulation::classic();
        sim.tick();
        let frame = sim.snapshot();

        assert_eq!(frame.tick, 1);
        assert!(!frame.finished);
        assert_eq!(frame.winner, None);

        let first = frame.cycle(PlayerId::FIRST);
        assert_eq!(first.name, "Player 1");
        assert_eq!(first.trail.len(), 2);
        assert_eq!(first.position, sim.cycle(PlayerId::FIRST).position());
        assert!(first.alive);
    }

    #[test]
    fn test_snapshot_is_detached_from_later_ticks() {
        let mut sim = Simulation::classic();
        let before = sim.snapshot();
        sim.tick();
        assert_eq!(before.cycle(PlayerId::SECOND).trail.len(), 1);
        assert_eq!(sim.snapshot().cycle(PlayerId::SECOND).trail.len(), 2);
    }

    #[test]
    fn test_snapshot_json() {
        let mut sim = Simulation::classic();
        while !sim.finished() {
            sim.tick();
        }
        let frame = sim.snapshot();
        let json = serde_json::to_string(&frame).unwrap();
        let back: super::FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
        assert_eq!(back.winner.as_deref(), Some("Draw"));
    }
}
