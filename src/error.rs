//! Error type shared by the cube model, notation parser, and configuration.

use thiserror::Error;

/// Errors reported when constructing cube state from external input.
///
/// None of these can occur while the animation is running: slice choices are
/// generated internally and every table is a compile-time constant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KubeError {
    #[error("cell index {0} is out of range (expected 0..27)")]
    CellOutOfRange(usize),
    #[error("cell {0} is the hidden core and cannot be constructed")]
    AbsentCell(usize),
    #[error("cell {0} is missing from the cell set")]
    MissingCell(usize),
    #[error("cell {0} appears more than once in the cell set")]
    DuplicateCell(usize),
    #[error("cell box has min {min:?} not strictly below max {max:?}")]
    InvalidBounds { min: [f32; 3], max: [f32; 3] },
    #[error("array is not a permutation of 0..27 with the centre fixed")]
    NotAPermutation,
    #[error("unknown move {0:?}")]
    UnknownMove(String),
    #[error("move sequence is empty")]
    EmptySequence,
    #[error("a quarter turn needs at least one tick, got {0}")]
    InvalidTicks(u32),
}

/// Result alias for fallible kube operations.
pub type Result<T, E = KubeError> = std::result::Result<T, E>;
