//! Table-driven resolution of every cell's cardinal neighbour links.

use crate::error::GridError;
use crate::face::Face;
use crate::topology::{edge_cell, edge_index, CubeTopology};
use orb_core::{Cell, CellCoord, CellId, Direction, FaceId};

/// Resolves the four cardinal links of every cell against a seam table.
///
/// An interior step is a unit offset within the owning face. A boundary
/// step goes through the table: the seam names the target face and edge,
/// and the orientation maps the along-edge index across. The procedure is
/// identical for every face and direction — a corner cell is simply on
/// two boundaries and takes two independent seam lookups.
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyResolver<'t> {
    topology: &'t CubeTopology,
}

impl<'t> AdjacencyResolver<'t> {
    /// A resolver over the given seam table.
    pub fn new(topology: &'t CubeTopology) -> Self {
        Self { topology }
    }

    /// Fill every neighbour slot of every cell, then verify none is left
    /// unset.
    ///
    /// With a validated table this cannot fail; an
    /// [`GridError::UnresolvedNeighbour`] after a full pass means the
    /// table or the builder is defective, and is surfaced rather than
    /// left for a query to trip over.
    pub fn resolve(
        &self,
        cells: &mut [Cell],
        faces: &[Face; FaceId::COUNT],
    ) -> Result<(), GridError> {
        for cell in cells.iter_mut() {
            let coord = cell.coord();
            for direction in Direction::ALL {
                let target = self.step(coord, direction, faces);
                cell.set_neighbour(direction, target);
            }
        }

        for cell in cells.iter() {
            for direction in Direction::ALL {
                if cell.neighbour(direction).is_none() {
                    return Err(GridError::UnresolvedNeighbour {
                        id: cell.id(),
                        direction,
                    });
                }
            }
        }
        Ok(())
    }

    /// The id one step from `coord` in `direction`.
    fn step(&self, coord: CellCoord, direction: Direction, faces: &[Face; FaceId::COUNT]) -> CellId {
        let face = &faces[coord.face.index()];
        let side = face.side();

        if let Some((row, col)) = interior_step(coord.row, coord.col, direction, side) {
            return face.cell_at(row, col);
        }

        let seam = self.topology.link(coord.face, direction);
        let index = edge_index(direction, coord.row, coord.col);
        let across = seam.orientation.apply(index, side);
        let (row, col) = edge_cell(seam.edge, across, side);
        faces[seam.face.index()].cell_at(row, col)
    }
}

/// Unit offset within the face, or `None` when the step crosses the edge
/// named by `direction`.
fn interior_step(row: u32, col: u32, direction: Direction, side: u32) -> Option<(u32, u32)> {
    match direction {
        Direction::Top => row.checked_sub(1).map(|row| (row, col)),
        Direction::Bottom => (row + 1 < side).then_some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|col| (row, col)),
        Direction::Right => (col + 1 < side).then_some((row, col + 1)),
    }
}
