//! Data-driven game balance
//!
//! Persisted as JSON (LocalStorage on web, a file natively). Every field has a
//! default, so partial documents are accepted.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Slowest per-tick speed a spawned entity may have; anything slower would
/// never leave the road
pub const MIN_SPAWN_SPEED: f32 = 0.1;

/// Inclusive-exclusive range of per-tick speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Force a positive, non-inverted range
    pub fn sanitized(self) -> Self {
        let min = self.min.max(MIN_SPAWN_SPEED);
        Self {
            min,
            max: self.max.max(min),
        }
    }

    /// Map a unit sample in [0, 1) onto the range
    #[inline]
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Per-tick probability of spawning a cone
    pub obstacle_chance: f32,
    /// Per-tick probability of spawning a coin
    pub pickup_chance: f32,
    /// Cone fall speed range (pixels per tick)
    pub obstacle_speed: SpeedRange,
    /// Coin fall speed range (pixels per tick)
    pub pickup_speed: SpeedRange,
    /// Margin shaved off the car's visual box for collision tests
    pub hitbox_inset: f32,
    /// Spawner seed; `None` lets the host pick one (wall clock)
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            obstacle_chance: 0.035,
            pickup_chance: 0.025,
            obstacle_speed: SpeedRange::new(3.2, 4.6),
            pickup_speed: SpeedRange::new(3.0, 4.2),
            hitbox_inset: 0.0,
            seed: None,
        }
    }
}

impl Tuning {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "lacetti_tuning";

    /// Tuning with spawning switched off (deterministic scenarios)
    pub fn without_spawns() -> Self {
        Self {
            obstacle_chance: 0.0,
            pickup_chance: 0.0,
            ..Self::default()
        }
    }

    /// Parse a JSON document, filling gaps with defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Clamp values into ranges the simulation can work with
    pub fn sanitized(mut self) -> Self {
        self.obstacle_chance = self.obstacle_chance.clamp(0.0, 1.0);
        self.pickup_chance = self.pickup_chance.clamp(0.0, 1.0);
        // The player clamp band must stay non-empty
        self.width = self.width.max(2.0 * PLAYER_SIDE_MARGIN);
        self.height = self.height.max(PLAYER_TOP_MARGIN + PLAYER_BOTTOM_MARGIN);
        // Spawns need a non-empty lane as well
        self.width = self.width.max(2.0 * SPAWN_SIDE_MARGIN);
        self.obstacle_speed = self.obstacle_speed.sanitized();
        self.pickup_speed = self.pickup_speed.sanitized();
        // Keep a sliver of the car collidable
        self.hitbox_inset = self.hitbox_inset.clamp(0.0, PLAYER_WIDTH / 2.0 - 1.0);
        self
    }

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring malformed tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from a JSON file, defaults if no path is given
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: Option<&std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let Some(path) = path else {
            log::info!("Using default tuning");
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Self::from_json(&json)
            .with_context(|| format!("parsing tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "obstacle_chance": 0.1 }"#).unwrap();
        assert_eq!(tuning.obstacle_chance, 0.1);
        assert_eq!(tuning.pickup_chance, 0.025);
        assert_eq!(tuning.width, DEFAULT_WIDTH);
        assert_eq!(tuning.seed, None);
    }

    #[test]
    fn test_sanitize_clamps_chances_and_ranges() {
        let tuning = Tuning::from_json(
            r#"{
                "obstacle_chance": 4.0,
                "pickup_chance": -1.0,
                "pickup_speed": { "min": 5.0, "max": 1.0 },
                "width": 10.0
            }"#,
        )
        .unwrap();
        assert_eq!(tuning.obstacle_chance, 1.0);
        assert_eq!(tuning.pickup_chance, 0.0);
        assert_eq!(tuning.pickup_speed.max, 5.0);
        assert_eq!(tuning.width, 2.0 * SPAWN_SIDE_MARGIN);
    }

    #[test]
    fn test_sanitize_forces_positive_speeds() {
        let tuning = Tuning::from_json(
            r#"{
                "obstacle_speed": { "min": -2.0, "max": -1.0 },
                "pickup_speed": { "min": 0.0, "max": 0.0 }
            }"#,
        )
        .unwrap();
        for range in [tuning.obstacle_speed, tuning.pickup_speed] {
            assert_eq!(range.min, MIN_SPAWN_SPEED);
            assert_eq!(range.max, MIN_SPAWN_SPEED);
        }

        // Everything spawned at the slowest speed still drives off the road
        let mut tuning = tuning;
        tuning.obstacle_chance = 0.0;
        tuning.pickup_chance = 0.0;
        let cone_vy = tuning.obstacle_speed.lerp(0.5);
        let coin_vy = tuning.pickup_speed.lerp(0.5);
        let mut state = crate::sim::GameState::new(tuning, 3, 0);
        state.add_obstacle(glam::Vec2::new(120.0, CONE_SPAWN_Y), cone_vy);
        state.add_pickup(glam::Vec2::new(120.0, COIN_SPAWN_Y), coin_vy);
        for _ in 0..8000 {
            crate::sim::tick(&mut state, &crate::sim::TickInput::default(), 16.0);
        }
        assert!(state.running());
        assert!(state.obstacles.is_empty());
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn test_inset_larger_than_car_is_capped() {
        let tuning = Tuning::from_json(r#"{ "hitbox_inset": 100.0 }"#).unwrap();
        assert!(tuning.hitbox_inset < PLAYER_WIDTH / 2.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_speed_range_lerp() {
        let range = SpeedRange::new(3.2, 4.6);
        assert_eq!(range.lerp(0.0), 3.2);
        assert!((range.lerp(0.5) - 3.9).abs() < 1e-6);
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_load_file_without_path_is_default() {
        let tuning = Tuning::load_file(None).unwrap();
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_load_file_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");
        std::fs::write(&path, r#"{ "seed": 42, "hitbox_inset": 3.0 }"#).unwrap();
        let tuning = Tuning::load_file(Some(&path)).unwrap();
        assert_eq!(tuning.seed, Some(42));
        assert_eq!(tuning.hitbox_inset, 3.0);
    }
}
