//! Demo/soak autopilot
//!
//! Scores every steering combination by looking a few ticks ahead: keep clear
//! of cones, drift toward coins, prefer the middle of the road. Used by the
//! headless runner to exercise long sessions without a keyboard.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Rect, TickInput, rects_overlap};

/// How many ticks ahead candidate moves are projected
const LOOKAHEAD_TICKS: f32 = 12.0;
/// Extra clearance kept around the car when judging cones
const SAFETY_MARGIN: f32 = 10.0;

/// All nine horizontal x vertical steering combinations
fn candidates() -> impl Iterator<Item = TickInput> {
    [(false, false), (true, false), (false, true)]
        .into_iter()
        .flat_map(|(left, right)| {
            [(false, false), (true, false), (false, true)]
                .into_iter()
                .map(move |(up, down)| TickInput {
                    left,
                    right,
                    up,
                    down,
                })
        })
}

/// Pick the input for the next tick
pub fn next_input(state: &GameState) -> TickInput {
    if !state.running() {
        return TickInput::default();
    }

    let mut best = TickInput::default();
    let mut best_value = f32::NEG_INFINITY;
    for input in candidates() {
        let value = utility(state, &input);
        if value > best_value {
            best_value = value;
            best = input;
        }
    }
    best
}

fn projected_player(state: &GameState, input: &TickInput, ticks: f32) -> Vec2 {
    let (w, h) = (state.width(), state.height());
    let pos = state.player.pos + input.velocity(state.player.speed) * ticks;
    Vec2::new(
        pos.x.clamp(PLAYER_SIDE_MARGIN, w - PLAYER_SIDE_MARGIN),
        pos.y.clamp(PLAYER_TOP_MARGIN, h - PLAYER_BOTTOM_MARGIN),
    )
}

fn utility(state: &GameState, input: &TickInput) -> f32 {
    let mut value = 0.0;

    // Any projected overlap along the path is fatal
    for step in 1..=LOOKAHEAD_TICKS as u32 {
        let t = step as f32;
        let car = Rect::from_center(projected_player(state, input, t), state.player.size)
            .inset(-SAFETY_MARGIN);
        for cone in &state.obstacles {
            let future = cone.pos + Vec2::new(0.0, cone.vy * t);
            if rects_overlap(&car, &Rect::from_center(future, cone.size)) {
                // Sooner collisions are worse
                value -= 10_000.0 / t;
            }
        }
    }

    let end = projected_player(state, input, LOOKAHEAD_TICKS);

    // Stay away from cones in the car's column
    for cone in &state.obstacles {
        let future = cone.pos + Vec2::new(0.0, cone.vy * LOOKAHEAD_TICKS);
        let dx = (future.x - end.x).abs();
        if future.y < end.y + PLAYER_HEIGHT && dx < PLAYER_WIDTH + CONE_SIZE {
            value -= (PLAYER_WIDTH + CONE_SIZE - dx) * 2.0;
        }
    }

    // Drift toward the closest reachable coin
    if let Some(dist) = state
        .pickups
        .iter()
        .filter(|coin| coin.pos.y < end.y)
        .map(|coin| (coin.pos + Vec2::new(0.0, coin.vy * LOOKAHEAD_TICKS)).distance(end))
        .min_by(|a, b| a.total_cmp(b))
    {
        value -= dist * 0.2;
    }

    // Mild preference for the centre of the road
    value -= (end.x - state.width() / 2.0).abs() * 0.05;
    value
}
