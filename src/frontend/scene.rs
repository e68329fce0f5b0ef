//! Display list for one frame.
//!
//! The renderer walks `Scene::commands` in order and maps each entry onto its
//! own drawing calls. Coordinates are playfield units.

use serde::{Deserialize, Serialize};

use super::input::RESTART_BUTTON;
use crate::core::{Color, Point};
use crate::cycle::Trail;
use crate::rules::GameResult;
use crate::sim::FrameSnapshot;

pub const BACKGROUND: Color = Color::BLACK;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const TRAIL_WIDTH: f32 = 3.0;
pub const HEAD_RADIUS: f32 = 5.0;
pub const BANNER_POSITION: Point = Point::new(300.0, 300.0);
pub const RESTART_HINT: &str = "Click to Restart";

/// A single drawing primitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    /// Connected line segments through consecutive points.
    Polyline { points: Trail, color: Color, width: f32 },
    Circle { center: Point, radius: f32, color: Color },
    Text { text: String, position: Point, color: Color },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Build the display list: background, live cycles, then the game-over
    /// banner when finished. Crashed cycles are not drawn.
    #[must_use]
    pub fn build(frame: &FrameSnapshot) -> Self {
        let mut commands = vec![DrawCommand::Clear(BACKGROUND)];

        for cycle in frame.cycles.values().filter(|c| c.alive) {
            if cycle.trail.len() > 1 {
                commands.push(DrawCommand::Polyline {
                    points: cycle.trail.clone(),
                    color: cycle.color,
                    width: TRAIL_WIDTH,
                });
            }
            commands.push(DrawCommand::Circle {
                center: cycle.position,
                radius: HEAD_RADIUS,
                color: cycle.color,
            });
        }

        if frame.finished {
            commands.push(DrawCommand::Text {
                text: banner(frame),
                position: BANNER_POSITION,
                color: TEXT_COLOR,
            });
            commands.push(DrawCommand::Text {
                text: RESTART_HINT.to_string(),
                position: RESTART_BUTTON.min,
                color: TEXT_COLOR,
            });
        }

        Self { commands }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

fn banner(frame: &FrameSnapshot) -> String {
    match (frame.result, frame.winner.as_deref()) {
        (Some(GameResult::Draw), _) | (_, None) => "Game Over! Draw!".to_string(),
        (_, Some(name)) => format!("Game Over! {name} Wins!"),
    }
}
