//! The two-cycle game core.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::snapshot::{CycleView, FrameSnapshot};
use crate::core::{Direction, GameConfig, PlayerId, PlayerMap, SimulationError};
use crate::cycle::Cycle;
use crate::rules::{GameResult, DRAW_LABEL};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Running,
    /// Terminal. The result never changes once set.
    Finished(GameResult),
}

impl Status {
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Status::Finished(_))
    }

    #[must_use]
    pub fn result(self) -> Option<GameResult> {
        match self {
            Status::Running => None,
            Status::Finished(result) => Some(result),
        }
    }
}

/// Owns both cycles and advances them one tick at a time.
///
/// ## Lifecycle
///
/// Starts `Running`. The first tick on which either cycle crashes decides the
/// result and moves to `Finished`; further ticks do nothing. `restart`
/// replaces the whole value with a fresh one built from the same config.
///
/// ```
/// use light_cycle::sim::Simulation;
///
/// let mut sim = Simulation::classic();
/// while !sim.finished() {
///     sim.tick();
/// }
/// // Head-on from (200, 300) and (600, 300): both reach x = 400 together
/// assert_eq!(sim.winner_name(), Some("Draw"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    config: GameConfig,
    cycles: PlayerMap<Cycle>,
    status: Status,
    tick_count: u64,
}

impl Simulation {
    /// Build a game from a validated config.
    pub fn new(config: GameConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// The classic two-player setup.
    #[must_use]
    pub fn classic() -> Self {
        Self::from_valid(GameConfig::classic())
    }

    fn from_valid(config: GameConfig) -> Self {
        let cycles = PlayerMap::new(|player| Cycle::from_spec(config.cycle(player)));
        Self {
            config,
            cycles,
            status: Status::Running,
            tick_count: 0,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.status.is_finished()
    }

    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.status.result()
    }

    /// Winning cycle's name, `"Draw"` for a tie, `None` while running.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner().map(|result| match result {
            GameResult::Winner(player) => self.cycles[player].name(),
            GameResult::Draw => DRAW_LABEL,
        })
    }

    /// Ticks that advanced the cycles. Stops counting once finished.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn cycle(&self, player: PlayerId) -> &Cycle {
        &self.cycles[player]
    }

    /// Checked lookup by raw index.
    pub fn cycle_at(&self, index: usize) -> Result<&Cycle, SimulationError> {
        PlayerId::from_index(index).map(|player| &self.cycles[player])
    }

    pub fn cycles(&self) -> impl Iterator<Item = (PlayerId, &Cycle)> {
        self.cycles.iter()
    }

    // === Commands ===

    /// Advance one tick: move both cycles, then check both for crashes.
    ///
    /// Both checks always run so a simultaneous crash is a draw. Does
    /// nothing once the game is finished.
    pub fn tick(&mut self) -> Status {
        if self.status.is_finished() {
            return self.status;
        }
        self.tick_count += 1;

        for (_, cycle) in self.cycles.iter_mut() {
            cycle.advance();
        }

        // Trails are persistent vectors; these clones share storage.
        let first_trail = self.cycles[PlayerId::FIRST].trail().clone();
        let second_trail = self.cycles[PlayerId::SECOND].trail().clone();
        let first_crashed = self.cycles[PlayerId::FIRST].check_collision(&second_trail);
        let second_crashed = self.cycles[PlayerId::SECOND].check_collision(&first_trail);

        if let Some(result) = GameResult::from_crashes(first_crashed, second_crashed) {
            self.status = Status::Finished(result);
            info!(
                tick = self.tick_count,
                winner = self.winner_name().unwrap_or(DRAW_LABEL),
                "game finished"
            );
        }
        self.status
    }

    /// Route a direction request to the cycle at `index`.
    ///
    /// Returns whether the cycle accepted the heading. Fails only for an
    /// index that names no cycle.
    pub fn apply_turn(
        &mut self,
        index: usize,
        direction: Direction,
    ) -> Result<bool, SimulationError> {
        let player = PlayerId::from_index(index)?;
        Ok(self.turn(player, direction))
    }

    /// Typed form of [`apply_turn`](Self::apply_turn).
    pub fn turn(&mut self, player: PlayerId, direction: Direction) -> bool {
        let accepted = self.cycles[player].turn(direction);
        debug!(%player, %direction, accepted, "turn requested");
        accepted
    }

    /// A fresh game from the same configuration.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Self::from_valid(self.config.clone())
    }

    /// Throw away this game and start over from the initial layout.
    pub fn restart(&mut self) {
        info!(tick = self.tick_count, "restarting game");
        *self = self.fresh();
    }

    /// Everything a renderer needs for one frame.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick_count,
            finished: self.finished(),
            result: self.winner(),
            winner: self.winner_name().map(str::to_owned),
            cycles: self.cycles.map(|player, cycle| CycleView::of(player, cycle)),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ConfigError, CycleSpec, Point};
    use crate::cycle::Crash;

    fn config(first: CycleSpec, second: CycleSpec) -> GameConfig {
        GameConfig::new(first, second)
    }

    #[test]
    fn test_initial_state() {
        let sim = Simulation::classic();
        assert_eq!(sim.status(), Status::Running);
        assert!(!sim.finished());
        assert_eq!(sim.winner(), None);
        assert_eq!(sim.winner_name(), None);
        assert_eq!(sim.tick_count(), 0);

        let first = sim.cycle(PlayerId::FIRST);
        assert_eq!(first.position(), Point::new(200.0, 300.0));
        assert_eq!(first.direction(), Direction::Right);
        let second = sim.cycle(PlayerId::SECOND);
        assert_eq!(second.position(), Point::new(600.0, 300.0));
        assert_eq!(second.direction(), Direction::Left);
    }

    #[test]
    fn test_tick_moves_both() {
        let mut sim = Simulation::classic();
        assert_eq!(sim.tick(), Status::Running);
        assert_eq!(sim.cycle(PlayerId::FIRST).position(), Point::new(205.0, 300.0));
        assert_eq!(sim.cycle(PlayerId::SECOND).position(), Point::new(595.0, 300.0));
        assert_eq!(sim.tick_count(), 1);
    }

    #[test]
    fn test_head_on_is_draw_at_tick_40() {
        let mut sim = Simulation::classic();
        for _ in 0..39 {
            assert_eq!(sim.tick(), Status::Running);
        }
        assert_eq!(sim.tick(), Status::Finished(GameResult::Draw));
        assert_eq!(sim.tick_count(), 40);
        assert_eq!(sim.cycle(PlayerId::FIRST).position(), Point::new(400.0, 300.0));
        assert_eq!(sim.winner_name(), Some("Draw"));
    }

    #[test]
    fn test_wall_crash_gives_opponent_the_win() {
        let mut sim = Simulation::new(config(
            CycleSpec::new("Runner", Color::CYAN, Point::new(795.0, 100.0), Direction::Right),
            CycleSpec::new("Stayer", Color::YELLOW, Point::new(100.0, 500.0), Direction::Up),
        ))
        .unwrap();

        assert_eq!(sim.tick(), Status::Running); // x = 800 is still inside
        assert_eq!(sim.tick(), Status::Finished(GameResult::Winner(PlayerId::SECOND)));
        assert_eq!(sim.cycle(PlayerId::FIRST).crash(), Some(Crash::OutOfBounds));
        assert!(sim.cycle(PlayerId::SECOND).is_alive());
        assert_eq!(sim.winner_name(), Some("Stayer"));
    }

    #[test]
    fn test_finished_tick_is_noop() {
        let mut sim = Simulation::classic();
        while !sim.finished() {
            sim.tick();
        }
        let frozen = sim.clone();
        for _ in 0..5 {
            sim.tick();
        }
        assert_eq!(sim, frozen);
    }

    #[test]
    fn test_apply_turn() {
        let mut sim = Simulation::classic();
        assert_eq!(sim.apply_turn(0, Direction::Up), Ok(true));
        assert_eq!(sim.apply_turn(1, Direction::Right), Ok(false));
        assert_eq!(
            sim.apply_turn(2, Direction::Up),
            Err(SimulationError::InvalidPlayer { index: 2, count: 2 })
        );
        assert_eq!(sim.cycle(PlayerId::FIRST).direction(), Direction::Up);
        assert_eq!(sim.cycle(PlayerId::SECOND).direction(), Direction::Left);
    }

    #[test]
    fn test_restart_restores_initial_layout() {
        let mut sim = Simulation::classic();
        sim.apply_turn(0, Direction::Down).unwrap();
        while !sim.finished() {
            sim.tick();
        }
        sim.restart();
        assert_eq!(sim, Simulation::classic());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let bad = config(
            CycleSpec::new("A", Color::CYAN, Point::new(10.0, 10.0), Direction::Right),
            CycleSpec::new("A", Color::YELLOW, Point::new(20.0, 20.0), Direction::Left),
        );
        assert!(matches!(
            Simulation::new(bad),
            Err(SimulationError::Config(_))
        ));
    }

    #[test]
    fn test_new_rejects_wrong_cycle_count() {
        let mut json = serde_json::to_value(GameConfig::classic()).unwrap();
        json["cycles"]["data"].as_array_mut().unwrap().pop();
        let lonely: GameConfig = serde_json::from_value(json).unwrap();

        assert_eq!(
            Simulation::new(lonely),
            Err(SimulationError::Config(ConfigError::PlayerCount {
                expected: 2,
                found: 1,
            }))
        );
    }
}
