//! Lacetti Run - an endless lane-dodge driving mini-game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, spawning, tick, collisions)
//! - `game`: Controller owning the session and the best-score bridge
//! - `renderer`: Display-list projection of the state, painted onto a 2D canvas
//! - `platform`: Browser/native platform abstraction (input, storage, time)
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Look-ahead steering for demos and headless soak runs

pub mod autopilot;
pub mod best_score;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use best_score::{BestScore, BestScoreStore, MemoryStore};
pub use game::Game;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Default playfield (canvas) dimensions
    pub const DEFAULT_WIDTH: f32 = 480.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Player car visual box
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 78.0;
    /// Player speed in pixels per tick
    pub const PLAYER_SPEED: f32 = 4.2;
    /// Vertical sensitivity is asymmetric: accelerating up is slower than braking down
    pub const PLAYER_UP_FACTOR: f32 = 0.6;
    pub const PLAYER_DOWN_FACTOR: f32 = 0.8;
    /// Spawn offset from the bottom edge (also the lower clamp margin)
    pub const PLAYER_BOTTOM_MARGIN: f32 = 90.0;
    /// Horizontal clamp margin on both sides
    pub const PLAYER_SIDE_MARGIN: f32 = 80.0;
    /// Upper clamp margin
    pub const PLAYER_TOP_MARGIN: f32 = 60.0;

    /// Lane markers
    pub const LANE_MARKER_COUNT: usize = 10;
    pub const LANE_MARKER_SPACING: f32 = 60.0;
    /// Full scroll cycle of the marker strip
    pub const LANE_MARKER_CYCLE: f32 = LANE_MARKER_COUNT as f32 * LANE_MARKER_SPACING;
    /// Background scroll speed in pixels per tick
    pub const LANE_SCROLL_SPEED: f32 = 5.0;

    /// Cone (obstacle) defaults
    pub const CONE_SIZE: f32 = 32.0;
    pub const CONE_SPAWN_Y: f32 = -60.0;

    /// Coin (pickup) defaults
    pub const COIN_RADIUS: f32 = 10.0;
    pub const COIN_SPAWN_Y: f32 = -40.0;

    /// Objects never spawn closer than this to the side edges
    pub const SPAWN_SIDE_MARGIN: f32 = 120.0;

    /// Score reward per coin
    pub const COIN_REWARD: f64 = 10.0;
    /// Distance score added on every completed tick
    pub const SURVIVAL_SCORE_PER_TICK: f64 = 0.1;

    /// Upper bound on a frame delta handed to the simulation (milliseconds)
    pub const MAX_FRAME_DT_MS: f64 = 32.0;
}
