//! Permutation engine: which cell sits in which slot, and how each cell is
//! currently rotated.

use cgmath::{Matrix3, Vector3};

use crate::cells::{Cell, CellSet, FaceColor};
use crate::permutation::Permutation;
use crate::slices::{apply_move, Slice};

/// Cells of one slice in canonical slot order.
///
/// Middle slices pass through the hidden core, so their centre position is
/// `None`; face slices are always fully populated.
pub type SliceMembers<'a> = [Option<&'a Cell>; 9];

/// Authoritative cube state.
#[derive(Clone, Debug, Default)]
pub struct PermutationEngine {
    cells: CellSet,
    permutation: Permutation,
}

impl PermutationEngine {
    /// A solved cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine over a custom cell set, starting solved.
    ///
    /// [`CellSet::from_cells`] guarantees the set is complete.
    pub fn with_cells(cells: CellSet) -> Self {
        Self {
            cells,
            permutation: Permutation::IDENTITY,
        }
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Ids of the cells currently occupying `slice`'s slots.
    fn member_ids(&self, slice: Slice) -> [usize; 9] {
        slice.slots().map(|slot| self.permutation.cell_at(slot as usize))
    }

    /// Cells currently in `slice`, in the slice's canonical slot order.
    pub fn current_members(&self, slice: Slice) -> SliceMembers<'_> {
        self.member_ids(slice).map(|id| self.cells.get(id))
    }

    /// Replaces the permutation with the result of one quarter turn of `slice`.
    ///
    /// Does not touch cell transforms; see [`PermutationEngine::finish_slice`].
    pub fn commit_move(&mut self, slice: Slice) {
        self.permutation = apply_move(&self.permutation, slice);
    }

    /// Rotates the members of `slice` by `angle` on top of their committed
    /// transforms.
    pub fn turn_slice(&mut self, slice: Slice, angle: f32) {
        let rotation = slice.axis().rotation(angle);
        for id in self.member_ids(slice) {
            if let Some(cell) = self.cells.get_mut(id) {
                cell.set_turn(rotation);
            }
        }
    }

    /// Applies the final angle of a turn, folds it into the members'
    /// committed transforms, and commits the permutation.
    ///
    /// `angle` must be a whole number of quarter turns.
    pub fn finish_slice(&mut self, slice: Slice, angle: f32) {
        let rotation = slice.axis().rotation(angle);
        for id in self.member_ids(slice) {
            if let Some(cell) = self.cells.get_mut(id) {
                cell.set_turn(rotation);
                cell.end_turn();
            }
        }
        self.commit_move(slice);
    }

    /// Back to the solved state with identity transforms.
    pub fn reset(&mut self) {
        self.permutation = Permutation::IDENTITY;
        self.cells.reset_transforms();
    }

    /// Read-only view of every live cell for drawing.
    pub fn snapshot_for_render(&self) -> RenderSnapshot {
        RenderSnapshot {
            cells: self
                .cells
                .live()
                .map(|cell| {
                    let (min, max) = cell.bounds();
                    CellView {
                        id: cell.id(),
                        min,
                        max,
                        faces: cell.faces(),
                        transform: cell.transform(),
                    }
                })
                .collect(),
        }
    }
}

/// Draw data for one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView {
    pub id: usize,
    /// Model-space box corners, before `transform` is applied.
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
    /// Face colors in [`crate::cells::Face::ALL`] order.
    pub faces: [FaceColor; 6],
    pub transform: Matrix3<f32>,
}

impl CellView {
    pub fn center(&self) -> Vector3<f32> {
        self.transform * ((self.min + self.max) / 2.0)
    }
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub cells: Vec<CellView>,
}
