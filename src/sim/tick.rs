//! Per-frame simulation tick
//!
//! One call advances the session by exactly one frame. Movement is in pixels
//! per tick, so game speed follows the display rate just like the browser loop
//! this replaces; `dt` is accepted for pacing diagnostics only.

use glam::Vec2;

use super::geometry::{circle_rect_overlap, rects_overlap};
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Held directions sampled once at the top of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Velocity for a car of the given speed. Right wins over left and down
    /// over up when both are held; axes combine without normalisation.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let mut vel = Vec2::ZERO;
        if self.left {
            vel.x = -speed;
        }
        if self.right {
            vel.x = speed;
        }
        if self.up {
            vel.y = -speed * PLAYER_UP_FACTOR;
        }
        if self.down {
            vel.y = speed * PLAYER_DOWN_FACTOR;
        }
        vel
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Frozen after a crash until reset
    if !state.running() {
        return;
    }
    log::trace!("tick {} (dt {:.1} ms)", state.time_ticks, dt);
    state.time_ticks += 1;

    steer_player(state, input);

    let height = state.height();
    for marker in &mut state.lane_markers {
        marker.scroll(LANE_SCROLL_SPEED, height);
    }

    state.spawn_objects();

    if advance_obstacles(state) {
        log::info!("Crashed after {} ticks, score {}", state.time_ticks, state.display_score());
        state.end_game();
        return;
    }

    collect_pickups(state);

    state.score += SURVIVAL_SCORE_PER_TICK;
}

/// Apply input to the car and keep it on the road
fn steer_player(state: &mut GameState, input: &TickInput) {
    let (width, height) = (state.width(), state.height());
    let player = &mut state.player;

    player.vel = input.velocity(player.speed);
    player.pos += player.vel;
    player.pos.x = player
        .pos
        .x
        .clamp(PLAYER_SIDE_MARGIN, width - PLAYER_SIDE_MARGIN);
    player.pos.y = player
        .pos
        .y
        .clamp(PLAYER_TOP_MARGIN, height - PLAYER_BOTTOM_MARGIN);
}

/// Move cones, dropping the ones that left the screen.
/// Returns true on the first cone touching the car; cones after it keep
/// their position for this tick.
fn advance_obstacles(state: &mut GameState) -> bool {
    let height = state.height();
    let hitbox = state.player_hitbox();
    let mut crashed = false;

    state.obstacles.retain_mut(|cone| {
        if crashed {
            return true;
        }
        cone.pos.y += cone.vy;
        if cone.is_below(height) {
            return false;
        }
        if rects_overlap(&hitbox, &cone.hitbox()) {
            crashed = true;
        }
        true
    });

    crashed
}

/// Move coins, dropping off-screen ones and banking the ones the car touches
fn collect_pickups(state: &mut GameState) {
    let height = state.height();
    let hitbox = state.player_hitbox();
    let mut collected = Vec::new();

    state.pickups.retain_mut(|coin| {
        if coin.taken {
            return false;
        }
        coin.pos.y += coin.vy;
        if coin.is_below(height) {
            return false;
        }
        if circle_rect_overlap(coin.pos, coin.radius, &hitbox) {
            coin.taken = true;
            collected.push(coin.id);
            return false;
        }
        true
    });

    for id in collected {
        state.score += COIN_REWARD;
        state.events.push(GameEvent::PickupCollected { id });
    }
}
