//! The nine turnable slices and their quarter-turn tables.
//!
//! Slice names follow standard cube notation: the six outer faces plus the
//! three middle slices (M between left and right, E between up and down, S
//! between front and back).

use std::fmt;

use cgmath::{Matrix3, Rad};

use crate::error::{KubeError, Result};
use crate::permutation::{is_valid_table, Permutation, CELL_COUNT};

/// Axis a slice turns about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Rotation matrix for a slice on this axis turned by `angle`.
    ///
    /// The Y rotation has the opposite handedness of X and Z, so that a
    /// negative quarter turn on any axis moves cells the same way the slice's
    /// permutation table does.
    pub fn rotation(self, angle: f32) -> Matrix3<f32> {
        match self {
            Axis::X => Matrix3::from_angle_x(Rad(angle)),
            Axis::Y => Matrix3::from_angle_y(Rad(-angle)),
            Axis::Z => Matrix3::from_angle_z(Rad(angle)),
        }
    }
}

/// One of the nine slices of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slice {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
    Middle,
    Equator,
    Side,
}

impl Slice {
    /// All slices in table order.
    pub const ALL: [Slice; 9] = [
        Slice::Up,
        Slice::Down,
        Slice::Left,
        Slice::Right,
        Slice::Front,
        Slice::Back,
        Slice::Middle,
        Slice::Equator,
        Slice::Side,
    ];

    /// Position of this slice in [`Slice::ALL`] and the constant tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a slice by its table index.
    pub fn from_index(index: usize) -> Option<Slice> {
        Self::ALL.get(index).copied()
    }

    pub const fn axis(self) -> Axis {
        match self {
            Slice::Up | Slice::Down | Slice::Equator => Axis::Y,
            Slice::Left | Slice::Right | Slice::Middle => Axis::X,
            Slice::Front | Slice::Back | Slice::Side => Axis::Z,
        }
    }

    /// Member slots in canonical order.
    #[inline]
    pub fn slots(self) -> &'static [u8; 9] {
        &SLICE_SLOTS[self.index()]
    }

    /// Quarter-turn table: after the turn, slot `i` holds what was in `table[i]`.
    #[inline]
    pub fn quarter_turn(self) -> &'static [u8; CELL_COUNT] {
        &QUARTER_TURNS[self.index()]
    }

    /// Single-letter notation for this slice.
    pub const fn letter(self) -> char {
        match self {
            Slice::Up => 'U',
            Slice::Down => 'D',
            Slice::Left => 'L',
            Slice::Right => 'R',
            Slice::Front => 'F',
            Slice::Back => 'B',
            Slice::Middle => 'M',
            Slice::Equator => 'E',
            Slice::Side => 'S',
        }
    }

    /// Parses a single notation letter (case-sensitive).
    pub fn from_letter(letter: char) -> Result<Slice> {
        Self::ALL
            .into_iter()
            .find(|slice| slice.letter() == letter)
            .ok_or_else(|| KubeError::UnknownMove(letter.to_string()))
    }

    /// Returns whether this slice passes through the hidden core.
    pub const fn is_middle(self) -> bool {
        matches!(self, Slice::Middle | Slice::Equator | Slice::Side)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Applies one quarter turn of `slice` to `permutation`.
#[inline]
pub fn apply_move(permutation: &Permutation, slice: Slice) -> Permutation {
    permutation.then(slice.quarter_turn())
}

/// Member slots of each slice, indexed like [`Slice::ALL`].
pub const SLICE_SLOTS: [[u8; 9]; 9] = [
    // up: top layer, back to front
    [0, 1, 2, 3, 4, 5, 6, 7, 8],
    // down: bottom layer
    [18, 19, 20, 21, 22, 23, 24, 25, 26],
    // left: left column of every layer
    [0, 3, 6, 9, 12, 15, 18, 21, 24],
    // right
    [2, 5, 8, 11, 14, 17, 20, 23, 26],
    // front: front row of every layer
    [6, 7, 8, 15, 16, 17, 24, 25, 26],
    // back
    [0, 1, 2, 9, 10, 11, 18, 19, 20],
    // middle: centre column, contains the core
    [1, 4, 7, 10, 13, 16, 19, 22, 25],
    // equator: centre layer, contains the core
    [9, 10, 11, 12, 13, 14, 15, 16, 17],
    // side: centre row, contains the core
    [3, 4, 5, 12, 13, 14, 21, 22, 23],
];

/// Quarter-turn tables, indexed like [`Slice::ALL`].
pub const QUARTER_TURNS: [[u8; CELL_COUNT]; 9] = [
    // up
    [
        2, 5, 8, 1, 4, 7, 0, 3, 6, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26,
    ],
    // down
    [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 20, 23, 26, 19, 22, 25, 18,
        21, 24,
    ],
    // left
    [
        6, 1, 2, 15, 4, 5, 24, 7, 8, 3, 10, 11, 12, 13, 14, 21, 16, 17, 0, 19, 20, 9, 22, 23, 18,
        25, 26,
    ],
    // right
    [
        0, 1, 8, 3, 4, 17, 6, 7, 26, 9, 10, 5, 12, 13, 14, 15, 16, 23, 18, 19, 2, 21, 22, 11, 24,
        25, 20,
    ],
    // front
    [
        0, 1, 2, 3, 4, 5, 24, 15, 6, 9, 10, 11, 12, 13, 14, 25, 16, 7, 18, 19, 20, 21, 22, 23, 26,
        17, 8,
    ],
    // back
    [
        18, 9, 0, 3, 4, 5, 6, 7, 8, 19, 10, 1, 12, 13, 14, 15, 16, 17, 20, 11, 2, 21, 22, 23, 24,
        25, 26,
    ],
    // middle
    [
        0, 7, 2, 3, 16, 5, 6, 25, 8, 9, 4, 11, 12, 13, 14, 15, 22, 17, 18, 1, 20, 21, 10, 23, 24,
        19, 26,
    ],
    // equator
    [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 11, 14, 17, 10, 13, 16, 9, 12, 15, 18, 19, 20, 21, 22, 23, 24,
        25, 26,
    ],
    // side
    [
        0, 1, 2, 21, 12, 3, 6, 7, 8, 9, 10, 11, 22, 13, 4, 15, 16, 17, 18, 19, 20, 23, 14, 5, 24,
        25, 26,
    ],
];

/// Checks that every table is a bijection with the centre fixed and only
/// moves its own slice's slots.
const fn tables_are_consistent() -> bool {
    let mut s = 0;
    while s < QUARTER_TURNS.len() {
        let table = &QUARTER_TURNS[s];
        if !is_valid_table(table) {
            return false;
        }
        let mut slot = 0;
        while slot < CELL_COUNT {
            if table[slot] as usize != slot {
                let mut member = false;
                let mut k = 0;
                while k < 9 {
                    if SLICE_SLOTS[s][k] as usize == slot {
                        member = true;
                    }
                    k += 1;
                }
                if !member {
                    return false;
                }
            }
            slot += 1;
        }
        s += 1;
    }
    true
}

const _: () = assert!(
    tables_are_consistent(),
    "quarter-turn tables must be permutations confined to their slice"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::CENTRE;

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for slice in Slice::ALL {
            let mut permutation = Permutation::IDENTITY;
            for turn in 1..=4 {
                permutation = apply_move(&permutation, slice);
                if turn < 4 {
                    assert!(
                        !permutation.is_identity(),
                        "{slice} returned to identity after {turn} turns"
                    );
                }
            }
            assert!(permutation.is_identity(), "{slice} is not period 4");
        }
    }

    #[test]
    fn test_tables_are_bijections_fixing_centre() {
        for slice in Slice::ALL {
            let table = slice.quarter_turn();
            let mut seen = [false; CELL_COUNT];
            for (slot, &source) in table.iter().enumerate() {
                let source = source as usize;
                assert!(!seen[source], "{slice} maps two slots from {source}");
                seen[source] = true;
                if slot == CENTRE || source == CENTRE {
                    assert_eq!(slot, source, "{slice} touches the centre");
                }
            }
        }
    }

    #[test]
    fn test_turns_move_eight_slots() {
        for slice in Slice::ALL {
            let moved = apply_move(&Permutation::IDENTITY, slice).displaced();
            assert_eq!(moved, 8, "{slice} should move all members but its centre");
        }
    }

    #[test]
    fn test_up_table_literal() {
        let turned = apply_move(&Permutation::IDENTITY, Slice::Up);
        let mut expected = [0u8; CELL_COUNT];
        expected[..9].copy_from_slice(&[2, 5, 8, 1, 4, 7, 0, 3, 6]);
        for (slot, value) in expected.iter_mut().enumerate().skip(9) {
            *value = slot as u8;
        }
        assert_eq!(turned.as_slots(), &expected);
    }

    #[test]
    fn test_middle_slices_contain_core() {
        for slice in Slice::ALL {
            let has_core = slice.slots().contains(&(CENTRE as u8));
            assert_eq!(has_core, slice.is_middle(), "{slice}");
            if has_core {
                assert_eq!(slice.slots()[4] as usize, CENTRE);
            }
        }
    }

    #[test]
    fn test_axes_match_slots() {
        use crate::permutation::slot_to_coord;
        for slice in Slice::ALL {
            let coords: Vec<_> = slice.slots().iter().map(|&s| slot_to_coord(s as usize)).collect();
            let constant = match slice.axis() {
                Axis::Y => coords.iter().all(|c| c.0 == coords[0].0),
                Axis::Z => coords.iter().all(|c| c.1 == coords[0].1),
                Axis::X => coords.iter().all(|c| c.2 == coords[0].2),
            };
            assert!(constant, "{slice} slots do not share a plane on its axis");
        }
    }

    #[test]
    fn test_letters_roundtrip() {
        for slice in Slice::ALL {
            assert_eq!(Slice::from_letter(slice.letter()), Ok(slice));
            assert_eq!(Slice::from_index(slice.index()), Some(slice));
        }
        assert_eq!(
            Slice::from_letter('X'),
            Err(KubeError::UnknownMove("X".to_string()))
        );
        assert_eq!(Slice::from_index(9), None);
    }
}
