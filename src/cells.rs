//! Cube cells: geometry, face colors, and per-cell transforms.
//!
//! Each cell is a small box inside a 2x2x2 cube centred on the origin, with
//! +Y up, +Z toward the viewer, and +X to the right. Cells never change
//! identity; turning a slice only rotates their transforms and relabels which
//! slot they occupy.

use cgmath::{Matrix3, SquareMatrix, Vector3};

use crate::error::{KubeError, Result};
use crate::permutation::{slot_to_coord, CELL_COUNT, CENTRE};

/// Box edges along one axis, from the negative side to the positive side.
///
/// Inner edges sit slightly apart so the cells read as separate pieces.
const EDGES: [(f32, f32); 3] = [(-1.0, -0.38), (-0.32, 0.32), (0.38, 1.0)];

/// One face of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Bottom,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Outward unit normal in model space.
    pub fn normal(self) -> Vector3<f32> {
        match self {
            Face::Top => Vector3::unit_y(),
            Face::Bottom => -Vector3::unit_y(),
            Face::Left => -Vector3::unit_x(),
            Face::Right => Vector3::unit_x(),
            Face::Front => Vector3::unit_z(),
            Face::Back => -Vector3::unit_z(),
        }
    }
}

/// Sticker color of a cell face. Faces inside the cube stay black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceColor {
    Black,
    Orange,
    Red,
    Yellow,
    White,
    Blue,
    Green,
}

impl FaceColor {
    /// Linear RGB components in `0.0..=1.0`.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            FaceColor::Black => [0.0, 0.0, 0.0],
            FaceColor::Orange => [1.0, 0.5, 0.0],
            FaceColor::Red => [1.0, 0.0, 0.0],
            FaceColor::Yellow => [1.0, 1.0, 0.0],
            FaceColor::White => [1.0, 1.0, 1.0],
            FaceColor::Blue => [0.0, 0.0, 1.0],
            FaceColor::Green => [0.0, 1.0, 0.0],
        }
    }
}

/// Model-space centre of a slot.
pub fn slot_center(slot: usize) -> Vector3<f32> {
    let (layer, row, column) = slot_to_coord(slot);
    let mid = |(lo, hi): (f32, f32)| (lo + hi) / 2.0;
    Vector3::new(
        mid(EDGES[column]),
        mid(EDGES[2 - layer]),
        mid(EDGES[row]),
    )
}

/// A single piece of the cube.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    id: usize,
    min: Vector3<f32>,
    max: Vector3<f32>,
    faces: [FaceColor; 6],
    /// Rotation accumulated over all completed turns.
    committed: Matrix3<f32>,
    /// Rotation including the in-flight turn, if any.
    current: Matrix3<f32>,
}

impl Cell {
    /// Creates a black cell with the given model-space box.
    ///
    /// Rejects indices outside `0..27`, the hidden core, and degenerate boxes.
    pub fn new(id: usize, min: [f32; 3], max: [f32; 3]) -> Result<Self> {
        if id >= CELL_COUNT {
            return Err(KubeError::CellOutOfRange(id));
        }
        if id == CENTRE {
            return Err(KubeError::AbsentCell(id));
        }
        if (0..3).any(|axis| !(min[axis] < max[axis])) {
            return Err(KubeError::InvalidBounds { min, max });
        }
        Ok(Self {
            id,
            min: min.into(),
            max: max.into(),
            faces: [FaceColor::Black; 6],
            committed: Matrix3::identity(),
            current: Matrix3::identity(),
        })
    }

    /// Builds the cell whose home is `slot`, painted the way a solved cube is.
    fn solved(slot: usize) -> Self {
        let (layer, row, column) = slot_to_coord(slot);
        let (x0, x1) = EDGES[column];
        let (y0, y1) = EDGES[2 - layer];
        let (z0, z1) = EDGES[row];

        let mut cell = Self {
            id: slot,
            min: Vector3::new(x0, y0, z0),
            max: Vector3::new(x1, y1, z1),
            faces: [FaceColor::Black; 6],
            committed: Matrix3::identity(),
            current: Matrix3::identity(),
        };

        if layer == 0 {
            cell.set_face_color(Face::Top, FaceColor::Orange);
        }
        if layer == 2 {
            cell.set_face_color(Face::Bottom, FaceColor::Red);
        }
        if column == 0 {
            cell.set_face_color(Face::Left, FaceColor::Yellow);
        }
        if column == 2 {
            cell.set_face_color(Face::Right, FaceColor::White);
        }
        if row == 0 {
            cell.set_face_color(Face::Back, FaceColor::Blue);
        }
        if row == 2 {
            cell.set_face_color(Face::Front, FaceColor::Green);
        }
        cell
    }

    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Model-space box corners.
    pub fn bounds(&self) -> (Vector3<f32>, Vector3<f32>) {
        (self.min, self.max)
    }

    /// Model-space centre, before any rotation.
    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) / 2.0
    }

    pub fn face_color(&self, face: Face) -> FaceColor {
        self.faces[face as usize]
    }

    pub fn set_face_color(&mut self, face: Face, color: FaceColor) {
        self.faces[face as usize] = color;
    }

    /// Colors of all six faces, in [`Face::ALL`] order.
    pub fn faces(&self) -> [FaceColor; 6] {
        self.faces
    }

    /// Current rotation, including any turn in progress.
    pub fn transform(&self) -> Matrix3<f32> {
        self.current
    }

    /// Rotation as of the last completed turn.
    pub fn committed_transform(&self) -> Matrix3<f32> {
        self.committed
    }

    /// Centre after applying the current rotation.
    pub fn world_center(&self) -> Vector3<f32> {
        self.current * self.center()
    }

    /// Sets the in-flight rotation on top of the committed one.
    pub(crate) fn set_turn(&mut self, rotation: Matrix3<f32>) {
        self.current = rotation * self.committed;
    }

    /// Folds the in-flight rotation into the committed one.
    ///
    /// Completed turns are whole quarter turns, so the product is a signed
    /// permutation matrix and rounding removes accumulated float error.
    pub(crate) fn end_turn(&mut self) {
        let snap = |v: Vector3<f32>| v.map(f32::round);
        self.committed = Matrix3::from_cols(
            snap(self.current.x),
            snap(self.current.y),
            snap(self.current.z),
        );
        self.current = self.committed;
    }

    pub(crate) fn reset_transform(&mut self) {
        self.committed = Matrix3::identity();
        self.current = Matrix3::identity();
    }
}

/// All 27 cell positions; the hidden core is `None`.
#[derive(Clone, Debug)]
pub struct CellSet {
    cells: [Option<Cell>; CELL_COUNT],
}

impl Default for CellSet {
    fn default() -> Self {
        Self::solved()
    }
}

impl CellSet {
    /// A freshly painted cube with every cell at home.
    pub fn solved() -> Self {
        Self {
            cells: std::array::from_fn(|slot| (slot != CENTRE).then(|| Cell::solved(slot))),
        }
    }

    /// Builds a cell set from explicitly constructed cells.
    ///
    /// Each cell is stored at its own id. Every id in `0..27` except the core
    /// must appear exactly once.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Result<Self> {
        let mut set = Self {
            cells: std::array::from_fn(|_| None),
        };
        for cell in cells {
            let id = cell.id;
            if set.cells[id].is_some() {
                return Err(KubeError::DuplicateCell(id));
            }
            set.cells[id] = Some(cell);
        }
        if let Some(id) = (0..CELL_COUNT).find(|&id| id != CENTRE && set.cells[id].is_none()) {
            return Err(KubeError::MissingCell(id));
        }
        Ok(set)
    }

    pub fn get(&self, id: usize) -> Option<&Cell> {
        self.cells.get(id)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: usize) -> Option<&mut Cell> {
        self.cells.get_mut(id)?.as_mut()
    }

    /// Present cells in id order.
    pub fn live(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    pub(crate) fn reset_transforms(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.reset_transform();
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::InnerSpace;

    use super::*;

    #[test]
    fn test_solved_set_has_26_cells() {
        let cells = CellSet::solved();
        assert_eq!(cells.live_count(), 26);
        assert!(cells.get(CENTRE).is_none());
        assert!(cells.get(CELL_COUNT).is_none());
        for (expected, cell) in (0..CELL_COUNT).filter(|&i| i != CENTRE).zip(cells.live()) {
            assert_eq!(cell.id(), expected);
        }
    }

    #[test]
    fn test_constructor_rejects_bad_input() {
        assert_eq!(
            Cell::new(27, [0.0; 3], [1.0; 3]),
            Err(KubeError::CellOutOfRange(27))
        );
        assert_eq!(
            Cell::new(CENTRE, [0.0; 3], [1.0; 3]),
            Err(KubeError::AbsentCell(CENTRE))
        );
        assert!(matches!(
            Cell::new(0, [0.0, 0.0, 0.0], [1.0, 0.0, 1.0]),
            Err(KubeError::InvalidBounds { .. })
        ));
        assert!(Cell::new(0, [-1.0; 3], [-0.38; 3]).is_ok());
    }

    #[test]
    fn test_cell_set_requires_every_cell() {
        let unit = |id| Cell::new(id, [-0.1; 3], [0.1; 3]).unwrap();
        let all = || (0..CELL_COUNT).filter(|&id| id != CENTRE).map(unit);

        let cells = CellSet::from_cells(all()).unwrap();
        assert_eq!(cells.live_count(), 26);
        assert!(cells.get(CENTRE).is_none());

        assert_eq!(
            CellSet::from_cells([unit(0)]).unwrap_err(),
            KubeError::MissingCell(1)
        );
        assert_eq!(
            CellSet::from_cells(all().filter(|cell| cell.id() != 20)).unwrap_err(),
            KubeError::MissingCell(20)
        );
        assert_eq!(
            CellSet::from_cells(all().chain([unit(5)])).unwrap_err(),
            KubeError::DuplicateCell(5)
        );
    }

    #[test]
    fn test_surface_colors() {
        let cells = CellSet::solved();
        // top-back-left corner
        let corner = cells.get(0).unwrap();
        assert_eq!(corner.face_color(Face::Top), FaceColor::Orange);
        assert_eq!(corner.face_color(Face::Left), FaceColor::Yellow);
        assert_eq!(corner.face_color(Face::Back), FaceColor::Blue);
        assert_eq!(corner.face_color(Face::Bottom), FaceColor::Black);

        // bottom-front-right corner
        let corner = cells.get(26).unwrap();
        assert_eq!(corner.face_color(Face::Bottom), FaceColor::Red);
        assert_eq!(corner.face_color(Face::Right), FaceColor::White);
        assert_eq!(corner.face_color(Face::Front), FaceColor::Green);

        // face centre on the front has exactly one sticker
        let front = cells.get(16).unwrap();
        let painted = front.faces().iter().filter(|&&c| c != FaceColor::Black).count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn test_every_sticker_faces_outward() {
        let cells = CellSet::solved();
        for cell in cells.live() {
            for face in Face::ALL {
                if cell.face_color(face) != FaceColor::Black {
                    let outward = cell.center().dot(face.normal());
                    assert!(outward > 0.5, "cell {} face {face:?} is inside", cell.id());
                }
            }
        }
    }

    #[test]
    fn test_slot_centers_match_cells() {
        let cells = CellSet::solved();
        for cell in cells.live() {
            assert_eq!(cell.center(), slot_center(cell.id()));
        }
        assert_eq!(slot_center(CENTRE), Vector3::new(0.0, 0.0, 0.0));
        assert!(slot_center(0).y > 0.0 && slot_center(0).z < 0.0 && slot_center(0).x < 0.0);
    }
}
