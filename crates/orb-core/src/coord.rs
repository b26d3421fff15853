//! Face-local cell coordinates and the id layout arithmetic.

use crate::id::{CellId, FaceId};
use std::fmt;

/// Position of a cell: owning face plus face-local row and column.
///
/// Rows grow downward (row 0 is the face's top edge) and columns grow
/// rightward (column 0 is the left edge). Both range over `0..side`,
/// where `side = 2n + 1` for subdivision `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// The face this cell belongs to.
    pub face: FaceId,
    /// Face-local row, `0..side`.
    pub row: u32,
    /// Face-local column, `0..side`.
    pub col: u32,
}

impl CellCoord {
    /// Create a coordinate.
    pub fn new(face: FaceId, row: u32, col: u32) -> Self {
        Self { face, row, col }
    }

    /// The id this coordinate maps to on a grid with the given side
    /// length: `face * side² + row * side + col`.
    pub fn cell_id(self, side: u32) -> CellId {
        let per_face = side * side;
        CellId(self.face.0 as u32 * per_face + self.row * side + self.col)
    }

    /// Inverse of [`CellCoord::cell_id`]: recover the coordinate of an id
    /// on a grid with the given side length.
    pub fn from_cell_id(id: CellId, side: u32) -> Self {
        let per_face = side * side;
        let face = FaceId((id.0 / per_face) as u8);
        let rem = id.0 % per_face;
        Self {
            face,
            row: rem / side,
            col: rem % side,
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.face, self.row, self.col)
    }
}
