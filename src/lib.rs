//! Rubik's cube permutation engine.
//!
//! Models a 3x3x3 cube as 27 slots (the hidden core included), tracks which
//! cell sits in which slot as slices are turned, and animates random quarter
//! turns one tick at a time.

pub mod cells;
pub mod config;
pub mod engine;
pub mod error;
pub mod notation;
pub mod permutation;
pub mod scheduler;
pub mod slices;

pub use config::AnimationConfig;
pub use engine::{PermutationEngine, RenderSnapshot};
pub use error::{KubeError, Result};
pub use permutation::Permutation;
pub use scheduler::{Frame, MoveScheduler, Phase};
pub use slices::{apply_move, Slice};

/// Outcome of checking one slice table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableCheck {
    pub slice: Slice,
    /// Bijection on the 27 slots with the core left in place.
    pub is_permutation: bool,
    /// Four quarter turns return to the identity.
    pub has_period_four: bool,
    /// A finished turn carries every cell onto the slot the table puts it in.
    pub matches_geometry: bool,
}

impl TableCheck {
    pub fn passed(&self) -> bool {
        self.is_permutation && self.has_period_four && self.matches_geometry
    }
}

/// Verifies every slice table against the invariants the engine relies on.
pub fn check_tables() -> Vec<TableCheck> {
    use cgmath::InnerSpace;

    Slice::ALL
        .into_iter()
        .map(|slice| {
            let is_permutation = permutation::is_valid_table(slice.quarter_turn());

            let has_period_four = (0..4)
                .fold(Permutation::IDENTITY, |p, _| apply_move(&p, slice))
                .is_identity();

            let mut engine = PermutationEngine::new();
            engine.finish_slice(slice, AnimationConfig::default().end_angle());
            let matches_geometry = slice.slots().iter().all(|&slot| {
                let slot = slot as usize;
                let id = engine.permutation().cell_at(slot);
                engine.cells().get(id).map_or(true, |cell| {
                    (cell.world_center() - cells::slot_center(slot)).magnitude() < 1e-5
                })
            });

            TableCheck {
                slice,
                is_permutation,
                has_period_four,
                matches_geometry,
            }
        })
        .collect()
}
