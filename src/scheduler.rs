//! Frame-driven move scheduler.
//!
//! The animation is a small state machine: `Idle` until a tick arrives, then
//! `Animating` one slice from 0 to its end angle in fixed steps, then back to
//! `Idle` once the turn is committed. The transition itself is a pure
//! function on a `Copy` value ([`Animation::advance`]); [`MoveScheduler`]
//! owns the cube and the RNG and feeds each resulting [`Frame`] into the
//! engine.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::config::AnimationConfig;
use crate::engine::{PermutationEngine, RenderSnapshot};
use crate::slices::Slice;

/// Coarse state of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
}

/// A turn in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveMove {
    pub slice: Slice,
    pub current_angle: f32,
    pub end_angle: f32,
    pub increment: f32,
}

impl ActiveMove {
    /// Starts a turn of `slice` at angle zero.
    pub fn start(slice: Slice, config: &AnimationConfig) -> Self {
        Self {
            slice,
            current_angle: 0.0,
            end_angle: config.end_angle(),
            increment: config.angle_increment(),
        }
    }

    /// Whether the angle has reached or passed the end angle in the
    /// direction of travel.
    ///
    /// Allows a tiny overshoot tolerance so that accumulated rounding never
    /// costs an extra tick.
    fn has_reached_end(&self) -> bool {
        let tolerance = self.increment.abs() * 1e-3;
        (self.increment > 0.0 && self.current_angle >= self.end_angle - tolerance)
            || (self.increment < 0.0 && self.current_angle <= self.end_angle + tolerance)
    }
}

/// What a tick did to the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// `slice` is now rotated by `angle` and still moving.
    Turning { slice: Slice, angle: f32 },
    /// `slice` reached `angle` and its permutation must be committed.
    Completed { slice: Slice, angle: f32 },
}

impl Frame {
    pub fn slice(&self) -> Slice {
        match *self {
            Frame::Turning { slice, .. } | Frame::Completed { slice, .. } => slice,
        }
    }
}

/// Animation state value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Animation {
    #[default]
    Idle,
    Animating(ActiveMove),
}

impl Animation {
    pub fn phase(&self) -> Phase {
        match self {
            Animation::Idle => Phase::Idle,
            Animation::Animating(_) => Phase::Animating,
        }
    }

    pub fn active_slice(&self) -> Option<Slice> {
        match self {
            Animation::Idle => None,
            Animation::Animating(active) => Some(active.slice),
        }
    }

    /// Advances one tick.
    ///
    /// `pick_slice` is called only when a new move starts. Returns the next
    /// state and the frame to apply to the cube.
    pub fn advance(
        self,
        config: &AnimationConfig,
        pick_slice: impl FnOnce() -> Slice,
    ) -> (Animation, Frame) {
        let mut active = match self {
            Animation::Idle => ActiveMove::start(pick_slice(), config),
            Animation::Animating(active) => active,
        };

        active.current_angle += active.increment;

        if active.has_reached_end() {
            let frame = Frame::Completed {
                slice: active.slice,
                angle: active.end_angle,
            };
            (Animation::Idle, frame)
        } else {
            let frame = Frame::Turning {
                slice: active.slice,
                angle: active.current_angle,
            };
            (Animation::Animating(active), frame)
        }
    }
}

/// Drives random slice turns on a cube, one tick per rendered frame.
pub struct MoveScheduler<R = ChaCha12Rng> {
    engine: PermutationEngine,
    animation: Animation,
    config: AnimationConfig,
    rng: R,
    paused: bool,
    completed_moves: u64,
    history: Vec<Slice>,
}

impl MoveScheduler<ChaCha12Rng> {
    /// Creates a scheduler over a solved cube.
    ///
    /// Uses `config.seed` when present so runs can be replayed.
    pub fn new(config: AnimationConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!("move scheduler seeded with {seed}");
        Self::with_rng(config, ChaCha12Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveScheduler<R> {
    pub fn with_rng(config: AnimationConfig, rng: R) -> Self {
        Self {
            engine: PermutationEngine::new(),
            animation: Animation::Idle,
            config,
            rng,
            paused: false,
            completed_moves: 0,
            history: Vec::new(),
        }
    }

    /// Advances the animation by one frame.
    ///
    /// Returns `None` while paused.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.paused {
            return None;
        }
        Some(self.step())
    }

    /// Advances one frame regardless of pause state.
    pub fn step(&mut self) -> Frame {
        let rng = &mut self.rng;
        let (animation, frame) = self
            .animation
            .advance(&self.config, || Slice::ALL[rng.random_range(0..Slice::ALL.len())]);
        self.animation = animation;

        match frame {
            Frame::Turning { slice, angle } => {
                trace!("turning {slice} to {angle:.4}");
                self.engine.turn_slice(slice, angle);
            }
            Frame::Completed { slice, angle } => {
                self.engine.finish_slice(slice, angle);
                self.completed_moves += 1;
                if self.config.record_history {
                    self.history.push(slice);
                }
                debug!("move {} complete: {slice}", self.completed_moves);
            }
        }
        frame
    }

    /// Stops advancing on [`MoveScheduler::tick`]. Idempotent.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes from exactly where the animation stopped. Idempotent.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        self.animation.phase()
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn engine(&self) -> &PermutationEngine {
        &self.engine
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn completed_moves(&self) -> u64 {
        self.completed_moves
    }

    /// Completed moves in order; empty unless history recording is enabled.
    pub fn history(&self) -> &[Slice] {
        &self.history
    }

    pub fn snapshot_for_render(&self) -> RenderSnapshot {
        self.engine.snapshot_for_render()
    }

    /// Returns to a solved, idle cube. The RNG keeps its position.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.animation = Animation::Idle;
        self.completed_moves = 0;
        self.history.clear();
    }
}
