//! Animation settings.

use std::f32::consts::FRAC_PI_2;

use crate::error::{KubeError, Result};

/// Ticks per quarter turn when nothing else is configured: pi/50 per tick.
pub const DEFAULT_QUARTER_TURN_TICKS: u32 = 25;

/// Degrees the whole cube spins about Y per rendered frame.
pub const DEFAULT_VIEW_SPIN_DEGREES: f32 = 1.2;

/// Parameters for the move scheduler and viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Number of ticks one quarter turn takes.
    quarter_turn_ticks: u32,
    /// Seed for slice selection; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Whole-cube spin per frame in the viewer.
    pub view_spin_degrees: f32,
    /// Whether the scheduler keeps a history of completed moves.
    pub record_history: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            quarter_turn_ticks: DEFAULT_QUARTER_TURN_TICKS,
            seed: None,
            view_spin_degrees: DEFAULT_VIEW_SPIN_DEGREES,
            record_history: false,
        }
    }
}

impl AnimationConfig {
    pub fn new(quarter_turn_ticks: u32, seed: Option<u64>) -> Result<Self> {
        if quarter_turn_ticks == 0 {
            return Err(KubeError::InvalidTicks(quarter_turn_ticks));
        }
        Ok(Self {
            quarter_turn_ticks,
            seed,
            ..Self::default()
        })
    }

    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    pub fn quarter_turn_ticks(&self) -> u32 {
        self.quarter_turn_ticks
    }

    /// Final angle of every move. Turns always go in the negative direction.
    pub fn end_angle(&self) -> f32 {
        -FRAC_PI_2
    }

    /// Angle added per tick.
    pub fn angle_increment(&self) -> f32 {
        self.end_angle() / self.quarter_turn_ticks as f32
    }
}
