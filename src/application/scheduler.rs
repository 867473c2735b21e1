//! Queue-driven turn animation.
//!
//! Moves wait in a FIFO queue and are animated one at a time. The scheduler is
//! driven by [`AnimationScheduler::advance`], which the frame loop calls with
//! the time elapsed since the previous frame; it never blocks. A move only
//! reaches the cube state once its animation has run to completion.
//!
//! Two registries are kept: `committed`, which is what the renderer shows, and
//! `projected`, which already includes every queued move. New moves resolve
//! against `projected` so the layer snapshot taken at enqueue time is the set
//! of cubelets that will occupy that layer when the move finally commits.

use std::collections::VecDeque;

use log::{debug, error};

use crate::domain::{
    Axis, CubeletId, CubeletRegistry, MoveId, ResolvedMove, Result, engine,
};

/// Outcome of a single `advance` call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Nothing animating and nothing allowed to start
    Idle,
    /// A queued move was dequeued and began animating
    Started(MoveId),
    /// The current move is still in progress
    Animating(MoveId),
    /// The current move finished and was written to the cube state
    Committed(MoveId),
}

/// What the renderer needs to draw the in-flight turn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame<'a> {
    pub move_id: MoveId,
    pub cubelets: &'a [CubeletId],
    pub axis: Axis,
    /// Interpolated angle in degrees, same sign convention as
    /// [`QuarterTurn::degrees`](crate::domain::QuarterTurn::degrees)
    pub angle_degrees: f32,
    /// 0.0 to 1.0
    pub progress: f32,
}

#[derive(Clone, Debug)]
struct ActiveTurn {
    entry: ResolvedMove,
    elapsed_ms: f32,
    /// Re-pause once this turn commits (single step)
    pause_after: bool,
}

impl ActiveTurn {
    fn progress(&self, duration_ms: f32) -> f32 {
        if duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / duration_ms).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct AnimationScheduler {
    committed: CubeletRegistry,
    projected: CubeletRegistry,
    queue: VecDeque<ResolvedMove>,
    active: Option<ActiveTurn>,
    paused: bool,
    single_step: bool,
    turn_duration_ms: f32,
}

impl AnimationScheduler {
    pub fn new(turn_duration_ms: f32) -> Self {
        Self {
            committed: CubeletRegistry::new(),
            projected: CubeletRegistry::new(),
            queue: VecDeque::new(),
            active: None,
            paused: false,
            single_step: false,
            turn_duration_ms,
        }
    }

    /// The authoritative cube state
    pub fn registry(&self) -> &CubeletRegistry {
        &self.committed
    }

    /// Cube state once every queued move has committed
    #[cfg(test)]
    fn projected(&self) -> &CubeletRegistry {
        &self.projected
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn turn_duration_ms(&self) -> f32 {
        self.turn_duration_ms
    }

    /// Takes effect from the next frame, including for the in-flight turn
    pub fn set_turn_duration_ms(&mut self, ms: f32) {
        self.turn_duration_ms = ms;
    }

    /// Resolve `move_id` now and queue it behind everything already pending
    pub fn enqueue(&mut self, move_id: MoveId) -> Result<()> {
        let resolved = engine::resolve_move(&self.projected, move_id)?;
        resolved.apply_to(&mut self.projected)?;
        debug!("queued {move_id} ({} pending)", self.queue.len() + 1);
        self.queue.push_back(resolved);
        Ok(())
    }

    /// Like [`enqueue`](Self::enqueue), by name. Unknown names are rejected
    /// before anything is queued.
    pub fn enqueue_named(&mut self, move_id: &str) -> Result<()> {
        self.enqueue(move_id.parse()?)
    }

    /// Advance the animation clock by `elapsed_ms`.
    pub fn advance(&mut self, elapsed_ms: f32) -> Result<Tick> {
        let Some(active) = self.active.as_mut() else {
            return Ok(self.start_next());
        };

        active.elapsed_ms += elapsed_ms.max(0.0);
        let move_id = active.entry.move_id;
        if active.progress(self.turn_duration_ms) < 1.0 {
            return Ok(Tick::Animating(move_id));
        }

        self.commit_active()?;
        Ok(Tick::Committed(move_id))
    }

    fn start_next(&mut self) -> Tick {
        if self.paused {
            return Tick::Idle;
        }
        let Some(entry) = self.queue.pop_front() else {
            return Tick::Idle;
        };

        let move_id = entry.move_id;
        debug!("animating {move_id}");
        self.active = Some(ActiveTurn {
            entry,
            elapsed_ms: 0.0,
            pause_after: std::mem::take(&mut self.single_step),
        });
        Tick::Started(move_id)
    }

    fn commit_active(&mut self) -> Result<()> {
        let Some(finished) = self.active.take() else {
            return Ok(());
        };

        if finished.pause_after {
            self.paused = true;
        }
        if let Err(e) = finished.entry.apply_to(&mut self.committed) {
            // Queued entries were resolved against a state that can no longer
            // be reached, drop them
            error!("failed to commit {}: {e}", finished.entry.move_id);
            self.queue.clear();
            self.projected = self.committed.clone();
            return Err(e);
        }

        debug!("committed {}", finished.entry.move_id);
        Ok(())
    }

    /// Gates starting new turns. An in-flight turn always runs to completion.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if !paused {
            self.single_step = false;
        }
    }

    /// Resume draining the queue if anything is waiting
    pub fn step(&mut self) {
        if !self.queue.is_empty() {
            self.set_paused(false);
        }
    }

    /// Animate exactly the next queued move, then pause again
    pub fn step_once(&mut self) {
        if !self.queue.is_empty() {
            self.paused = false;
            self.single_step = true;
        }
    }

    /// Drop every queued and in-flight move and return the cube to its
    /// solved state. The paused flag is left alone.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.active = None;
        self.single_step = false;
        self.committed.reset_to_home();
        self.projected.reset_to_home();
    }

    /// The in-flight turn, if any
    pub fn current_animation(&self) -> Option<AnimationFrame<'_>> {
        self.active.as_ref().map(|active| {
            let progress = active.progress(self.turn_duration_ms);
            AnimationFrame {
                move_id: active.entry.move_id,
                cubelets: &active.entry.cubelets,
                axis: active.entry.axis,
                angle_degrees: active.entry.turn.degrees() * progress,
                progress,
            }
        })
    }

    /// Turn direction of the in-flight move
    #[cfg(test)]
    fn current_turn(&self) -> Option<crate::domain::QuarterTurn> {
        self.active.as_ref().map(|active| active.entry.turn)
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new(500.0)
    }
}
