//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (held-key set sampled once per tick)
//! - Storage (LocalStorage on web, a text file natively)
//! - Time (frame delta pacing)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{KeyState, LogicalKey};
pub use time::FrameClock;
