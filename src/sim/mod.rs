//! Simulation module
//!
//! All gameplay logic lives here. This module must be pure:
//! - One call to `tick` advances exactly one frame, regardless of wall time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Rect, circle_rect_overlap, rects_overlap};
pub use spawn::Spawner;
pub use state::{GameEvent, GamePhase, GameState, LaneMarker, Obstacle, Pickup, Player};
pub use tick::{TickInput, tick};
