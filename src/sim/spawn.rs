//! Cone and coin spawning
//!
//! Two independent Bernoulli trials per tick, no cooldown. Spawn x is uniform
//! across the lane between the side margins so nothing appears off-road.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::*;
use crate::tuning::{SpeedRange, Tuning};

/// Where and how fast a freshly rolled object enters the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnDraft {
    pub pos: Vec2,
    pub vy: f32,
}

/// Outcome of one tick's rolls
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnRoll {
    pub obstacle: Option<SpawnDraft>,
    pub pickup: Option<SpawnDraft>,
}

/// Seeded generator for cones and coins
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub obstacle_chance: f32,
    pub pickup_chance: f32,
    pub obstacle_speed: SpeedRange,
    pub pickup_speed: SpeedRange,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            obstacle_chance: tuning.obstacle_chance,
            pickup_chance: tuning.pickup_chance,
            obstacle_speed: tuning.obstacle_speed,
            pickup_speed: tuning.pickup_speed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Switch both trials off
    pub fn disable(&mut self) {
        self.obstacle_chance = 0.0;
        self.pickup_chance = 0.0;
    }

    /// Roll both trials for a playfield of the given width
    pub fn roll(&mut self, width: f32) -> SpawnRoll {
        let obstacle = self.trial(self.obstacle_chance, width, CONE_SPAWN_Y, self.obstacle_speed);
        let pickup = self.trial(self.pickup_chance, width, COIN_SPAWN_Y, self.pickup_speed);
        SpawnRoll { obstacle, pickup }
    }

    fn trial(&mut self, chance: f32, width: f32, y: f32, speed: SpeedRange) -> Option<SpawnDraft> {
        if self.rng.random::<f32>() >= chance {
            return None;
        }
        let lane = (width - 2.0 * SPAWN_SIDE_MARGIN).max(0.0);
        let x = SPAWN_SIDE_MARGIN + self.rng.random::<f32>() * lane;
        let vy = speed.lerp(self.rng.random::<f32>());
        Some(SpawnDraft {
            pos: Vec2::new(x, y),
            vy,
        })
    }
}

impl GameState {
    /// Run the spawner for this tick and insert whatever it produced
    pub fn spawn_objects(&mut self) {
        let roll = self.spawner.roll(self.width());
        if let Some(draft) = roll.obstacle {
            let id = self.add_obstacle(draft.pos, draft.vy);
            log::trace!("Cone {} spawned at x={:.1}", id, draft.pos.x);
        }
        if let Some(draft) = roll.pickup {
            let id = self.add_pickup(draft.pos, draft.vy);
            log::trace!("Coin {} spawned at x={:.1}", id, draft.pos.x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_chance_never_spawns() {
        let mut spawner = Spawner::new(&Tuning::without_spawns(), 1);
        for _ in 0..10_000 {
            assert_eq!(spawner.roll(DEFAULT_WIDTH), SpawnRoll::default());
        }
    }

    #[test]
    fn test_certain_chance_always_spawns_in_lane() {
        let tuning = Tuning {
            obstacle_chance: 1.0,
            pickup_chance: 1.0,
            ..Tuning::default()
        };
        let mut spawner = Spawner::new(&tuning, 99);
        for _ in 0..1_000 {
            let roll = spawner.roll(DEFAULT_WIDTH);
            let cone = roll.obstacle.expect("cone should spawn");
            let coin = roll.pickup.expect("coin should spawn");

            assert!(cone.pos.x >= SPAWN_SIDE_MARGIN);
            assert!(cone.pos.x <= DEFAULT_WIDTH - SPAWN_SIDE_MARGIN);
            assert_eq!(cone.pos.y, CONE_SPAWN_Y);
            assert!(cone.vy >= 3.2 && cone.vy <= 4.6);

            assert!(coin.pos.x >= SPAWN_SIDE_MARGIN);
            assert!(coin.pos.x <= DEFAULT_WIDTH - SPAWN_SIDE_MARGIN);
            assert_eq!(coin.pos.y, COIN_SPAWN_Y);
            assert!(coin.vy >= 3.0 && coin.vy <= 4.2);
        }
    }

    #[test]
    fn test_default_rates_are_roughly_respected() {
        let mut spawner = Spawner::new(&Tuning::default(), 2024);
        let rolls = 100_000;
        let (mut cones, mut coins) = (0u32, 0u32);
        for _ in 0..rolls {
            let roll = spawner.roll(DEFAULT_WIDTH);
            cones += roll.obstacle.is_some() as u32;
            coins += roll.pickup.is_some() as u32;
        }
        let cone_rate = cones as f32 / rolls as f32;
        let coin_rate = coins as f32 / rolls as f32;
        assert!((cone_rate - 0.035).abs() < 0.005, "cone rate {}", cone_rate);
        assert!((coin_rate - 0.025).abs() < 0.005, "coin rate {}", coin_rate);
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = Spawner::new(&Tuning::default(), 5);
        let mut b = Spawner::new(&Tuning::default(), 5);
        for _ in 0..500 {
            assert_eq!(a.roll(DEFAULT_WIDTH), b.roll(DEFAULT_WIDTH));
        }
    }

    #[test]
    fn test_spawn_objects_inserts_into_state() {
        let tuning = Tuning {
            obstacle_chance: 1.0,
            pickup_chance: 1.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(tuning, 3, 0);
        state.spawn_objects();
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.pickups.len(), 1);
        assert_ne!(state.obstacles[0].id, state.pickups[0].id);

        state.spawner.disable();
        state.spawn_objects();
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.pickups.len(), 1);
    }
}
