//! Permutation of cube cells over spatial slots.
//!
//! Slots are numbered layer-major: `slot = layer * 9 + row * 3 + column`,
//! where layer 0 is the top, row 0 is the back, and column 0 is the left.
//! A permutation maps each slot to the cell currently sitting in it.

use std::fmt;

use crate::error::{KubeError, Result};

/// Cells per axis.
pub const DIM: usize = 3;

/// Total number of slots (and cells, including the hidden core).
pub const CELL_COUNT: usize = DIM * DIM * DIM;

/// Slot of the hidden core cell. It is never moved by any slice.
pub const CENTRE: usize = 13;

/// Grid position of a slot as `(layer, row, column)`.
pub type GridCoord = (usize, usize, usize);

/// Converts a grid position to a slot index.
#[inline(always)]
pub const fn coord_to_slot((layer, row, column): GridCoord) -> usize {
    layer * DIM * DIM + row * DIM + column
}

/// Converts a slot index to a grid position.
#[inline(always)]
pub const fn slot_to_coord(slot: usize) -> GridCoord {
    (slot / (DIM * DIM), (slot / DIM) % DIM, slot % DIM)
}

/// Returns whether `table` is a permutation of `0..27` that leaves the centre in place.
///
/// Usable in const context so slice tables can be checked at compile time.
pub const fn is_valid_table(table: &[u8; CELL_COUNT]) -> bool {
    let mut seen = [false; CELL_COUNT];
    let mut i = 0;
    while i < CELL_COUNT {
        let target = table[i] as usize;
        if target >= CELL_COUNT || seen[target] {
            return false;
        }
        seen[target] = true;
        i += 1;
    }
    table[CENTRE] as usize == CENTRE
}

/// Bijection from slot to the cell occupying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Permutation([u8; CELL_COUNT]);

impl Default for Permutation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Permutation {
    /// The solved state: every cell in its home slot.
    pub const IDENTITY: Self = {
        let mut slots = [0u8; CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            slots[i] = i as u8;
            i += 1;
        }
        Self(slots)
    };

    /// Builds a permutation from raw slot contents, rejecting anything that is
    /// not a bijection with the centre fixed.
    pub fn from_slots(slots: [u8; CELL_COUNT]) -> Result<Self> {
        if is_valid_table(&slots) {
            Ok(Self(slots))
        } else {
            Err(KubeError::NotAPermutation)
        }
    }

    /// Raw slot contents.
    pub fn as_slots(&self) -> &[u8; CELL_COUNT] {
        &self.0
    }

    /// Cell occupying `slot`.
    #[inline]
    pub fn cell_at(&self, slot: usize) -> usize {
        self.0[slot] as usize
    }

    /// Slot currently holding `cell`.
    pub fn slot_of(&self, cell: usize) -> Option<usize> {
        self.0.iter().position(|&c| c as usize == cell)
    }

    /// Composes with a quarter-turn table: `new[i] = self[table[i]]`.
    #[inline]
    pub fn then(&self, table: &[u8; CELL_COUNT]) -> Self {
        let mut slots = [0u8; CELL_COUNT];
        for (slot, &source) in slots.iter_mut().zip(table) {
            *slot = self.0[source as usize];
        }
        Self(slots)
    }

    /// Returns whether every cell is in its home slot.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Number of cells away from their home slot.
    pub fn displaced(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .filter(|&(slot, &cell)| slot != cell as usize)
            .count()
    }

    /// Lengths of the non-trivial cycles, in order of their smallest slot.
    pub fn cycle_lengths(&self) -> Vec<usize> {
        let mut visited = [false; CELL_COUNT];
        let mut lengths = Vec::new();
        for start in 0..CELL_COUNT {
            if visited[start] {
                continue;
            }
            let mut length = 0;
            let mut slot = start;
            while !visited[slot] {
                visited[slot] = true;
                slot = self.cell_at(slot);
                length += 1;
            }
            if length > 1 {
                lengths.push(length);
            }
        }
        lengths
    }

    /// Smallest `n > 0` such that composing this permutation with itself `n`
    /// times gives the identity.
    pub fn order(&self) -> u64 {
        self.cycle_lengths()
            .into_iter()
            .fold(1, |acc, length| lcm(acc, length as u64))
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

/// Shows the three horizontal layers side by side, top to bottom, each as a
/// 3x3 block with the back row first. The hidden core shows as `.`.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<9}  {:<9}  {}", "up", "equator", "down")?;
        for row in 0..DIM {
            for layer in 0..DIM {
                if layer > 0 {
                    f.write_str("  ")?;
                }
                for column in 0..DIM {
                    let slot = coord_to_slot((layer, row, column));
                    if slot == CENTRE {
                        write!(f, "{:>3}", ".")?;
                    } else {
                        write!(f, "{:>3}", self.0[slot])?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
