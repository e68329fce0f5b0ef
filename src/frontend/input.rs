//! Abstract input events and their mapping to game commands.
//!
//! A platform driver translates its real key codes and mouse events into
//! `InputEvent`s; `Controls` turns those into `Command`s for the session.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, PlayerId, Point};

/// Keys the game cares about. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// A decoded platform event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    PointerDown { button: PointerButton, position: Point },
    /// Window closed or equivalent.
    Quit,
}

/// What the session should do in response to an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Turn { player: PlayerId, direction: Direction },
    Restart,
    Quit,
}

/// Axis-aligned screen rectangle with exclusive edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Strictly inside; a click on the border misses.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.min.x < p.x && p.x < self.max.x && self.min.y < p.y && p.y < self.max.y
    }
}

/// Clickable area under the "Click to Restart" text.
pub const RESTART_BUTTON: Rect = Rect::new(Point::new(300.0, 400.0), Point::new(500.0, 450.0));

/// Key bindings plus the restart and quit triggers.
#[derive(Clone, Debug)]
pub struct Controls {
    steering: FxHashMap<Key, (PlayerId, Direction)>,
    restart_key: Key,
    quit_key: Key,
    restart_button: Rect,
}

impl Controls {
    /// W/A/S/D steer the first cycle, arrow keys the second, Space restarts,
    /// Escape quits.
    #[must_use]
    pub fn classic() -> Self {
        let steering = [
            (Key::W, (PlayerId::FIRST, Direction::Up)),
            (Key::S, (PlayerId::FIRST, Direction::Down)),
            (Key::A, (PlayerId::FIRST, Direction::Left)),
            (Key::D, (PlayerId::FIRST, Direction::Right)),
            (Key::Up, (PlayerId::SECOND, Direction::Up)),
            (Key::Down, (PlayerId::SECOND, Direction::Down)),
            (Key::Left, (PlayerId::SECOND, Direction::Left)),
            (Key::Right, (PlayerId::SECOND, Direction::Right)),
        ]
        .into_iter()
        .collect();

        Self {
            steering,
            restart_key: Key::Space,
            quit_key: Key::Escape,
            restart_button: RESTART_BUTTON,
        }
    }

    /// Bind (or rebind) a key to steer `player` toward `direction`.
    #[must_use]
    pub fn with_binding(mut self, key: Key, player: PlayerId, direction: Direction) -> Self {
        self.steering.insert(key, (player, direction));
        self
    }

    #[must_use]
    pub fn restart_button(&self) -> Rect {
        self.restart_button
    }

    /// Look up what a key steers, if anything.
    #[must_use]
    pub fn binding(&self, key: Key) -> Option<(PlayerId, Direction)> {
        self.steering.get(&key).copied()
    }

    /// Decode one event.
    ///
    /// Restart requests only count while the game is `finished`; during play
    /// Space and clicks are ignored.
    #[must_use]
    pub fn decode(&self, event: &InputEvent, finished: bool) -> Option<Command> {
        match *event {
            InputEvent::Quit => Some(Command::Quit),
            InputEvent::KeyDown(key) if key == self.quit_key => Some(Command::Quit),
            InputEvent::KeyDown(key) if key == self.restart_key => {
                finished.then_some(Command::Restart)
            }
            InputEvent::KeyDown(key) => self
                .binding(key)
                .map(|(player, direction)| Command::Turn { player, direction }),
            InputEvent::PointerDown {
                button: PointerButton::Left,
                position,
            } if finished && self.restart_button.contains(position) => Some(Command::Restart),
            InputEvent::PointerDown { .. } => None,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::classic()
    }
}
