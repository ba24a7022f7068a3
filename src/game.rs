//! Game controller
//!
//! Owns the session state, the held-key set and the best-score store. Hosts
//! call `frame` once per animation frame and `reset` from the restart button;
//! nothing else writes gameplay state.

use crate::best_score::{BestScore, BestScoreStore};
use crate::platform::{FrameClock, KeyState};
use crate::renderer::{DrawCmd, build_frame};
use crate::sim::{GameEvent, GameState, tick};
use crate::tuning::Tuning;

/// Summary of what changed during one frame, for HUD updates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Floored score after the frame
    pub score: u64,
    /// Set when a new best was reached this frame
    pub new_best: Option<u64>,
    /// Set on the frame the car crashed
    pub crashed: bool,
    /// Coins collected this frame
    pub coins: u32,
}

pub struct Game<S: BestScoreStore> {
    state: GameState,
    store: S,
    /// Held keys; updated by input events between frames
    pub keys: KeyState,
    clock: FrameClock,
}

impl<S: BestScoreStore> Game<S> {
    /// Start a session, reading the stored best once
    pub fn new(tuning: Tuning, seed: u64, store: S) -> Self {
        let best = BestScore::load(&store);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(tuning, seed, best.value()),
            store,
            keys: KeyState::new(),
            clock: FrameClock::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for scripted scenarios and tools
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Floored current score
    pub fn score_display(&self) -> u64 {
        self.state.display_score()
    }

    pub fn best(&self) -> u64 {
        self.state.best.value()
    }

    /// Restart trigger: back to the canonical initial state
    pub fn reset(&mut self) {
        self.state.reset();
        log::info!("Game restarted (best {})", self.best());
    }

    /// Run one tick from a host timestamp (ms), then handle its events
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let dt = self.clock.advance(now_ms);
        self.step(dt)
    }

    /// Run one tick with an explicit delta (ms)
    pub fn step(&mut self, dt: f32) -> FrameReport {
        let input = self.keys.snapshot();
        tick(&mut self.state, &input, dt);
        self.handle_events()
    }

    /// Paint list for the current state
    pub fn draw(&self) -> Vec<DrawCmd> {
        build_frame(&self.state)
    }

    fn handle_events(&mut self) -> FrameReport {
        let mut report = FrameReport {
            score: self.state.display_score(),
            ..Default::default()
        };

        for event in self.state.drain_events() {
            match event {
                GameEvent::PickupCollected { id } => {
                    log::debug!("Coin {} collected", id);
                    report.coins += 1;
                }
                GameEvent::Crashed { score } => {
                    log::info!("Game over with score {:.1}", score);
                    report.crashed = true;
                }
                GameEvent::NewBest { best } => {
                    report.new_best = Some(best);
                    // Storage trouble must not interrupt play
                    match self.store.save_best(best) {
                        Ok(()) => log::info!("New best score saved: {}", best),
                        Err(e) => log::warn!("Could not save best score {}: {:#}", best, e),
                    }
                }
            }
        }

        report
    }
}
