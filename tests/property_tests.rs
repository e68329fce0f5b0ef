//! Property tests for movement, turning, collisions and game lifecycle.

use proptest::prelude::*;

use light_cycle::core::{
    Color, CycleSpec, Direction, GameConfig, Point, GRACE_WINDOW, STEP_DISTANCE,
};
use light_cycle::cycle::{Crash, Cycle, Trail};
use light_cycle::sim::Simulation;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Grid-aligned points well inside the playfield.
fn inner_point() -> impl Strategy<Value = Point> {
    (20u16..140, 20u16..100).prop_map(|(x, y)| Point::new(f32::from(x) * 5.0, f32::from(y) * 5.0))
}

/// Points just past one of the four walls.
fn outside_point() -> impl Strategy<Value = Point> {
    prop_oneof![
        (-50.0f32..-0.01, 0.0f32..600.0).prop_map(|(x, y)| Point::new(x, y)),
        (800.01f32..850.0, 0.0f32..600.0).prop_map(|(x, y)| Point::new(x, y)),
        (0.0f32..800.0, -50.0f32..-0.01).prop_map(|(x, y)| Point::new(x, y)),
        (0.0f32..800.0, 600.01f32..650.0).prop_map(|(x, y)| Point::new(x, y)),
    ]
}

fn far_trail() -> Trail {
    Cycle::new("far", Color::WHITE, Point::new(-1000.0, -1000.0), Direction::Up)
        .trail()
        .clone()
}

proptest! {
    #[test]
    fn reversal_is_always_refused(heading in direction(), spawn in inner_point()) {
        let mut cycle = Cycle::new("p", Color::CYAN, spawn, heading);
        prop_assert!(!cycle.turn(heading.opposite()));
        prop_assert_eq!(cycle.direction(), heading);
    }

    #[test]
    fn non_reversal_is_always_accepted(heading in direction(), requested in direction()) {
        prop_assume!(!heading.is_opposite(requested));
        let mut cycle = Cycle::new("p", Color::CYAN, Point::new(400.0, 300.0), heading);
        prop_assert!(cycle.turn(requested));
        prop_assert_eq!(cycle.direction(), requested);
    }

    #[test]
    fn advance_appends_one_step(
        spawn in inner_point(),
        turns in prop::collection::vec(direction(), 1..40),
    ) {
        let mut cycle = Cycle::new("p", Color::CYAN, spawn, Direction::Right);
        for requested in turns {
            cycle.turn(requested);
            let before = cycle.position();
            let len = cycle.trail().len();
            cycle.advance();

            let expected = before.step(cycle.direction(), STEP_DISTANCE);
            prop_assert_eq!(cycle.position(), expected);
            prop_assert_eq!(cycle.trail().len(), len + 1);
            prop_assert_eq!(cycle.trail().head(), Some(expected));
        }
    }

    #[test]
    fn dead_cycles_stop_growing(extra in 1usize..20, heading in direction()) {
        let mut cycle = Cycle::new("p", Color::CYAN, Point::new(400.0, 600.0), Direction::Down);
        cycle.advance();
        prop_assert!(cycle.check_collision(&far_trail()));

        let len = cycle.trail().len();
        for _ in 0..extra {
            cycle.turn(heading);
            cycle.advance();
        }
        prop_assert_eq!(cycle.trail().len(), len);
        prop_assert_eq!(cycle.direction(), Direction::Down);
    }

    #[test]
    fn out_of_bounds_always_kills(outside in outside_point(), heading in direction()) {
        let mut cycle = Cycle::new("p", Color::CYAN, outside, heading);
        // Any trail at all: the wall check comes first
        let other = cycle.trail().clone();
        prop_assert!(cycle.check_collision(&other));
        prop_assert_eq!(cycle.crash(), Some(Crash::OutOfBounds));
    }

    #[test]
    fn short_trails_never_self_collide(
        spawn in inner_point(),
        turns in prop::collection::vec(direction(), 0..GRACE_WINDOW - 1),
    ) {
        let mut cycle = Cycle::new("p", Color::CYAN, spawn, Direction::Up);
        let far = far_trail();
        for requested in turns {
            cycle.turn(requested);
            cycle.advance();
            prop_assert!(cycle.trail().len() < GRACE_WINDOW);
            prop_assert!(!cycle.check_collision(&far));
        }
        prop_assert!(cycle.is_alive());
    }

    #[test]
    fn winner_is_never_overwritten(
        first in inner_point(),
        second in inner_point(),
        first_heading in direction(),
        second_heading in direction(),
        extra in 1usize..30,
    ) {
        prop_assume!(first != second);
        let config = GameConfig::new(
            CycleSpec::new("A", Color::CYAN, first, first_heading),
            CycleSpec::new("B", Color::YELLOW, second, second_heading),
        );
        let mut sim = Simulation::new(config).unwrap();
        while !sim.finished() {
            sim.tick();
            prop_assert!(sim.tick_count() < 500, "game never ended");
        }
        let decided = sim.clone();
        for _ in 0..extra {
            sim.tick();
        }
        prop_assert_eq!(sim, decided);
    }

    #[test]
    fn restart_always_matches_fresh_game(
        turns in prop::collection::vec((0usize..2, direction()), 0..60),
    ) {
        let mut sim = Simulation::classic();
        for (index, requested) in turns {
            sim.apply_turn(index, requested).unwrap();
            sim.tick();
        }
        sim.restart();
        prop_assert_eq!(sim, Simulation::classic());
    }
}
