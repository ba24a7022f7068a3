//! Frame pacing
//!
//! Turns host animation-frame timestamps (milliseconds) into per-frame deltas,
//! capped so a backgrounded tab doesn't report a huge jump on return.

use crate::consts::MAX_FRAME_DT_MS;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start measuring from `now` (ms)
    pub fn starting_at(now: f64) -> Self {
        Self { last: Some(now) }
    }

    /// Delta since the previous frame in ms, clamped to [0, MAX_FRAME_DT_MS].
    /// The very first call yields 0.
    pub fn advance(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last).clamp(0.0, MAX_FRAME_DT_MS),
            None => 0.0,
        };
        self.last = Some(now);
        dt as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(1234.0), 0.0);
        assert_eq!(clock.advance(1250.0), 16.0);
    }

    #[test]
    fn test_large_gaps_are_capped() {
        let mut clock = FrameClock::starting_at(0.0);
        assert_eq!(clock.advance(5_000.0), 32.0);
        assert_eq!(clock.advance(5_010.0), 10.0);
    }

    #[test]
    fn test_time_going_backwards_is_zero() {
        let mut clock = FrameClock::starting_at(100.0);
        assert_eq!(clock.advance(90.0), 0.0);
    }
}
