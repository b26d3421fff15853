//! Allocation of the six faces and their cells.

use crate::error::GridError;
use crate::face::Face;
use orb_core::{Cell, CellCoord, CellId, FaceId};

/// Allocates the cell arena and the six faces for a given subdivision.
///
/// Side length is `2n + 1`, so a grid has `6·(2n+1)²` cells. Id and
/// coordinate assignment is deterministic: the same `n` always produces
/// the same layout. Neighbour slots are left unset; filling them is the
/// [`AdjacencyResolver`](crate::resolver::AdjacencyResolver)'s job.
#[derive(Clone, Copy, Debug)]
pub struct GridBuilder {
    subdivision: u32,
    side: u32,
}

impl GridBuilder {
    /// Largest accepted subdivision.
    ///
    /// At `n = 13_376` the side is 26 753 and the grid holds
    /// `6 · 26 753²` cells, the largest such count that still fits the
    /// `u32` id space. One step further overflows it.
    pub const MAX_SUBDIVISION: i64 = 13_376;

    /// Validate `n` and create a builder.
    ///
    /// Negative `n` is rejected with [`GridError::InvalidSubdivision`]
    /// before anything is allocated; `n` past
    /// [`MAX_SUBDIVISION`](Self::MAX_SUBDIVISION) with
    /// [`GridError::SubdivisionTooLarge`].
    pub fn new(n: i64) -> Result<Self, GridError> {
        if n < 0 {
            return Err(GridError::InvalidSubdivision { n });
        }
        if n > Self::MAX_SUBDIVISION {
            return Err(GridError::SubdivisionTooLarge {
                n,
                max: Self::MAX_SUBDIVISION,
            });
        }
        Ok(Self {
            subdivision: n as u32,
            side: 2 * n as u32 + 1,
        })
    }

    /// Subdivision parameter `n`.
    pub fn subdivision(&self) -> u32 {
        self.subdivision
    }

    /// Side length, `2n + 1`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total cells across all six faces, `6 · side²`.
    pub fn cell_count(&self) -> usize {
        FaceId::COUNT * (self.side as usize) * (self.side as usize)
    }

    /// Allocate the arena and the six faces.
    ///
    /// Cells come back in id order with coordinates assigned face-major
    /// then row-major; each face holds the matching arena indices.
    pub fn build(&self) -> (Vec<Cell>, [Face; FaceId::COUNT]) {
        let side = self.side;
        let per_face = (side as usize) * (side as usize);

        let mut cells = Vec::with_capacity(self.cell_count());
        for face in 0..FaceId::COUNT as u8 {
            for row in 0..side {
                for col in 0..side {
                    let coord = CellCoord::new(FaceId(face), row, col);
                    let id = coord.cell_id(side);
                    debug_assert_eq!(id.index(), cells.len());
                    cells.push(Cell::new(id, coord));
                }
            }
        }

        let faces = std::array::from_fn(|face| {
            let base = face * per_face;
            let ids = (base..base + per_face).map(|i| CellId(i as u32)).collect();
            Face::new(FaceId(face as u8), side, ids)
        });

        (cells, faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_subdivision() {
        assert_eq!(
            GridBuilder::new(-1).unwrap_err(),
            GridError::InvalidSubdivision { n: -1 }
        );
    }

    #[test]
    fn rejects_oversized_subdivision() {
        let n = GridBuilder::MAX_SUBDIVISION + 1;
        assert_eq!(
            GridBuilder::new(n).unwrap_err(),
            GridError::SubdivisionTooLarge {
                n,
                max: GridBuilder::MAX_SUBDIVISION,
            }
        );
        assert!(GridBuilder::new(GridBuilder::MAX_SUBDIVISION).is_ok());
    }

    #[test]
    fn side_is_odd_for_every_subdivision() {
        for n in 0..5 {
            assert_eq!(GridBuilder::new(n).unwrap().side(), 2 * n as u32 + 1);
        }
    }

    #[test]
    fn build_assigns_contiguous_ids_in_layout_order() {
        let builder = GridBuilder::new(1).unwrap();
        let (cells, faces) = builder.build();
        assert_eq!(cells.len(), 54);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.id(), CellId(i as u32));
            assert_eq!(cell.coord().cell_id(builder.side()), cell.id());
            assert!(!cell.fully_resolved());
        }
        for (f, face) in faces.iter().enumerate() {
            assert_eq!(face.id(), FaceId(f as u8));
            assert_eq!(face.side(), 3);
            assert_eq!(face.cell_at(0, 0), CellId((f * 9) as u32));
        }
    }

    #[test]
    fn zero_subdivision_is_one_cell_per_face() {
        let (cells, faces) = GridBuilder::new(0).unwrap().build();
        assert_eq!(cells.len(), 6);
        for face in &faces {
            assert_eq!(face.cell_count(), 1);
        }
    }
}
