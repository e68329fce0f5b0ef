//! Game outcomes and the rule that decides them.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Label used for a tied game wherever a winner name is expected.
pub const DRAW_LABEL: &str = "Draw";

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// The other cycle crashed first.
    Winner(PlayerId),
    /// Both cycles crashed on the same tick.
    Draw,
}

impl GameResult {
    /// Decide the outcome of a collision round.
    ///
    /// | first crashed | second crashed | result              |
    /// |---------------|----------------|---------------------|
    /// | yes           | yes            | `Draw`              |
    /// | yes           | no             | `Winner(second)`    |
    /// | no            | yes            | `Winner(first)`     |
    /// | no            | no             | `None`, keep racing |
    ///
    /// ```
    /// use light_cycle::core::PlayerId;
    /// use light_cycle::rules::GameResult;
    ///
    /// assert_eq!(
    ///     GameResult::from_crashes(true, false),
    ///     Some(GameResult::Winner(PlayerId::SECOND)),
    /// );
    /// assert_eq!(GameResult::from_crashes(false, false), None);
    /// ```
    #[must_use]
    pub fn from_crashes(first_crashed: bool, second_crashed: bool) -> Option<Self> {
        match (first_crashed, second_crashed) {
            (true, true) => Some(GameResult::Draw),
            (true, false) => Some(GameResult::Winner(PlayerId::SECOND)),
            (false, true) => Some(GameResult::Winner(PlayerId::FIRST)),
            (false, false) => None,
        }
    }

    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }

    /// The winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}
