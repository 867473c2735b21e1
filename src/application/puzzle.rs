use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{AnimationFrame, AnimationScheduler, EngineConfig, Tick};
use crate::domain::{CubeletRegistry, DEMO_SEQUENCE, MoveId, Result};

/// PuzzleEngine is the composition root.
/// It owns the scheduler (and through it the cube state) and exposes the
/// operations the UI triggers.
pub struct PuzzleEngine {
    scheduler: AnimationScheduler,
    config: EngineConfig,
    /// Moves committed since the last reset, oldest first
    history: Vec<MoveId>,
}

impl PuzzleEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            scheduler: AnimationScheduler::new(config.turn_duration_ms),
            config,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Authoritative cube state
    pub fn registry(&self) -> &CubeletRegistry {
        self.scheduler.registry()
    }

    pub fn history(&self) -> &[MoveId] {
        &self.history
    }

    pub fn queued_len(&self) -> usize {
        self.scheduler.queued_len()
    }

    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    pub fn is_solved(&self) -> bool {
        self.registry().is_solved()
    }

    pub fn current_animation(&self) -> Option<AnimationFrame<'_>> {
        self.scheduler.current_animation()
    }

    pub fn enqueue(&mut self, move_id: MoveId) -> Result<()> {
        self.scheduler.enqueue(move_id)
    }

    pub fn enqueue_named(&mut self, move_id: &str) -> Result<()> {
        self.scheduler.enqueue_named(move_id)
    }

    /// Queue the configured number of random moves
    pub fn scramble(&mut self) -> Result<()> {
        self.scramble_with(&mut rand::rng(), self.config.scramble_length)
    }

    /// Queue `move_count` moves drawn uniformly, with replacement
    pub fn scramble_with<R: Rng + ?Sized>(&mut self, rng: &mut R, move_count: usize) -> Result<()> {
        info!("scrambling with {move_count} moves");
        for _ in 0..move_count {
            if let Some(&m) = MoveId::ALL.choose(rng) {
                self.scheduler.enqueue(m)?;
            }
        }
        Ok(())
    }

    /// Queue the fixed demo pattern. This does not solve the cube.
    pub fn demo_solve(&mut self) -> Result<()> {
        info!("queueing demo sequence");
        DEMO_SEQUENCE
            .iter()
            .try_for_each(|&m| self.scheduler.enqueue(m))
    }

    pub fn set_paused(&mut self, paused: bool) {
        info!("{}", if paused { "paused" } else { "resumed" });
        self.scheduler.set_paused(paused);
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.is_paused());
    }

    pub fn step(&mut self) {
        self.scheduler.step();
    }

    pub fn step_once(&mut self) {
        self.scheduler.step_once();
    }

    pub fn reset(&mut self) {
        info!("reset ({} queued moves dropped)", self.queued_len());
        self.scheduler.reset();
        self.history.clear();
    }

    /// Change the turn duration by `delta_ms`, within the configured bounds
    pub fn adjust_turn_duration(&mut self, delta_ms: f32) {
        self.config = self
            .config
            .with_turn_duration_ms(self.config.turn_duration_ms + delta_ms);
        self.scheduler.set_turn_duration_ms(self.config.turn_duration_ms);
    }

    /// Per-frame entry point for the render loop
    pub fn advance(&mut self, elapsed_ms: f32) -> Result<Tick> {
        let tick = self.scheduler.advance(elapsed_ms)?;
        if let Tick::Committed(m) = tick {
            self.history.push(m);
        }
        Ok(tick)
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::CubeError;

    fn run_until_idle(engine: &mut PuzzleEngine) {
        for _ in 0..100_000 {
            if engine.queued_len() == 0 && !engine.is_animating() {
                return;
            }
            engine.advance(16.0).unwrap();
        }
        panic!("queue never drained");
    }

    #[test]
    fn test_scramble_queues_requested_moves() {
        let mut engine = PuzzleEngine::default();
        engine.scramble_with(&mut StdRng::seed_from_u64(7), 20).unwrap();
        assert_eq!(engine.queued_len(), 20);
        assert!(engine.is_solved());

        run_until_idle(&mut engine);
        assert_eq!(engine.history().len(), 20);
        assert!(engine.registry().validate().is_ok());
    }

    #[test]
    fn test_scramble_uses_config_length() {
        let config = EngineConfig::default().with_scramble_length(5);
        let mut engine = PuzzleEngine::new(config);
        engine.scramble().unwrap();
        assert_eq!(engine.queued_len(), 5);
    }

    #[test]
    fn test_scramble_then_reset() {
        let mut engine = PuzzleEngine::default();
        engine.scramble_with(&mut StdRng::seed_from_u64(1), 20).unwrap();
        for _ in 0..100 {
            engine.advance(16.0).unwrap();
        }
        assert!(!engine.history().is_empty());

        engine.reset();
        assert_eq!(engine.queued_len(), 0);
        assert!(!engine.is_animating());
        assert!(engine.history().is_empty());
        assert!(
            engine
                .registry()
                .all_cubelets()
                .iter()
                .all(|c| c.position == c.home())
        );
    }

    #[test]
    fn test_demo_solve_order_and_result() {
        let mut engine = PuzzleEngine::default();
        engine.demo_solve().unwrap();
        assert_eq!(engine.queued_len(), 8);

        run_until_idle(&mut engine);
        assert_eq!(engine.history(), &DEMO_SEQUENCE);
        assert!(!engine.is_solved());

        // Two more rounds complete the order-6 cycle
        engine.demo_solve().unwrap();
        engine.demo_solve().unwrap();
        run_until_idle(&mut engine);
        assert!(engine.is_solved());
    }

    #[test]
    fn test_toggle_pause_and_step() {
        let mut engine = PuzzleEngine::default();
        engine.toggle_paused();
        engine.enqueue_named("R").unwrap();
        for _ in 0..50 {
            engine.advance(16.0).unwrap();
        }
        assert!(engine.history().is_empty());

        engine.step();
        assert!(!engine.is_paused());
        run_until_idle(&mut engine);
        assert_eq!(engine.history(), &[MoveId::R]);
    }

    #[test]
    fn test_enqueue_unknown_move() {
        let mut engine = PuzzleEngine::default();
        assert_eq!(
            engine.enqueue_named("X"),
            Err(CubeError::UnknownMove("X".to_owned()))
        );
        assert_eq!(engine.queued_len(), 0);
    }

    #[test]
    fn test_adjust_turn_duration_is_clamped() {
        let mut engine = PuzzleEngine::default();
        engine.adjust_turn_duration(-10_000.0);
        assert_eq!(engine.config().turn_duration_ms, 50.0);
        engine.adjust_turn_duration(100.0);
        assert_eq!(engine.config().turn_duration_ms, 150.0);
    }
}
