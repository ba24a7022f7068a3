//! Game state and core simulation types
//!
//! The entity store (car, cones, coins, lane markers) plus session scalars.
//! Everything here is plain data; `tick` is the only writer during play.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::spawn::Spawner;
use crate::best_score::BestScore;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Crashed into a cone; only `reset` leaves this phase
    GameOver,
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PickupCollected { id: u32 },
    Crashed { score: f64 },
    /// A new best score was reached and must be persisted
    NewBest { best: u64 },
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the car
    pub pos: Vec2,
    pub size: Vec2,
    /// Recomputed from input every tick
    pub vel: Vec2,
    pub speed: f32,
}

impl Player {
    /// Car parked at the spawn point for a playfield
    pub fn spawn(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(width * 0.5, height - PLAYER_BOTTOM_MARGIN),
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            speed: PLAYER_SPEED,
        }
    }

    /// Visual bounding box
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Collision box: the visual box shrunk by `inset`
    pub fn hitbox(&self, inset: f32) -> Rect {
        self.bounds().inset(inset)
    }
}

/// A cone to dodge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Centre of the cone
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward speed (pixels per tick)
    pub vy: f32,
}

impl Obstacle {
    pub fn new(id: u32, pos: Vec2, vy: f32) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(CONE_SIZE),
            vy,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Fully scrolled past the bottom edge
    pub fn is_below(&self, height: f32) -> bool {
        self.pos.y - self.size.y > height
    }
}

/// A coin to collect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: u32,
    /// Centre of the coin
    pub pos: Vec2,
    pub radius: f32,
    /// Downward speed (pixels per tick)
    pub vy: f32,
    pub taken: bool,
}

impl Pickup {
    pub fn new(id: u32, pos: Vec2, vy: f32) -> Self {
        Self {
            id,
            pos,
            radius: COIN_RADIUS,
            vy,
            taken: false,
        }
    }

    pub fn is_below(&self, height: f32) -> bool {
        self.pos.y - self.radius > height
    }
}

/// A background stripe used for the scrolling effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneMarker {
    pub y: f32,
}

impl LaneMarker {
    /// Scroll down by `speed`, wrapping by a full cycle once past `height`
    pub fn scroll(&mut self, speed: f32, height: f32) {
        self.y += speed;
        if self.y > height {
            self.y -= LANE_MARKER_CYCLE;
        }
    }
}

/// Evenly spaced marker strip at its initial offsets
pub fn initial_lane_markers() -> Vec<LaneMarker> {
    (0..LANE_MARKER_COUNT)
        .map(|i| LaneMarker {
            y: i as f32 * LANE_MARKER_SPACING,
        })
        .collect()
}

/// Complete game session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance knobs (playfield size, speeds, hitbox inset)
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Continuous score accumulator (coins + distance)
    pub score: f64,
    /// Best floored score across sessions; never decreases
    pub best: BestScore,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Player car
    pub player: Player,
    /// Active cones
    pub obstacles: Vec<Obstacle>,
    /// Active coins
    pub pickups: Vec<Pickup>,
    /// Scrolling background stripes
    pub lane_markers: Vec<LaneMarker>,
    /// Cone/coin generator
    pub spawner: Spawner,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a running session with the given tuning, spawner seed and prior best
    pub fn new(tuning: Tuning, seed: u64, best: u64) -> Self {
        let tuning = tuning.sanitized();
        let spawner = Spawner::new(&tuning, seed);
        let mut state = Self {
            player: Player::spawn(tuning.width, tuning.height),
            tuning,
            phase: GamePhase::Running,
            score: 0.0,
            best: BestScore::new(best),
            time_ticks: 0,
            obstacles: Vec::new(),
            pickups: Vec::new(),
            lane_markers: Vec::new(),
            spawner,
            events: Vec::new(),
            next_id: 1,
        };
        state.reset();
        state
    }

    /// Return to the canonical initial state. The best score and the spawner's
    /// RNG stream carry over.
    pub fn reset(&mut self) {
        self.score = 0.0;
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
        self.player = Player::spawn(self.width(), self.height());
        self.obstacles.clear();
        self.pickups.clear();
        self.lane_markers = initial_lane_markers();
        self.events.clear();
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.tuning.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.tuning.height
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.score.floor().max(0.0) as u64
    }

    /// Player collision box for the current tuning
    pub fn player_hitbox(&self) -> Rect {
        self.player.hitbox(self.tuning.hitbox_inset)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Place a cone (tests and scripted scenarios)
    pub fn add_obstacle(&mut self, pos: Vec2, vy: f32) -> u32 {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle::new(id, pos, vy));
        id
    }

    /// Place a coin (tests and scripted scenarios)
    pub fn add_pickup(&mut self, pos: Vec2, vy: f32) -> u32 {
        let id = self.next_entity_id();
        self.pickups.push(Pickup::new(id, pos, vy));
        id
    }

    /// Terminal transition: freeze the session and update the best score.
    /// Calling it again after game over changes nothing.
    pub fn end_game(&mut self) {
        if self.game_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::Crashed { score: self.score });

        let final_score = self.display_score();
        if self.best.submit(final_score) {
            self.events.push(GameEvent::NewBest { best: final_score });
        }
    }

    /// Take the events raised since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
