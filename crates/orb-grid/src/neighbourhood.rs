//! First- and second-order neighbourhood queries.

use crate::error::GridError;
use crate::grid::Grid;
use orb_core::{Cell, CellId, Direction, Indirect};
use smallvec::SmallVec;

/// A cell plus its 4 direct and 8 indirect neighbours, by id.
///
/// Indirect entries are two-hop compositions (see [`Indirect::hops`]).
/// Near the three-face cube corners that composition is a heuristic
/// approximation of diagonal adjacency: entries there are not guaranteed
/// distinct or symmetric. This is a known property of the query, kept
/// as-is; [`Neighbourhood::distinct_ids`] exists for callers that want
/// the duplicates folded away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbourhood {
    centre: CellId,
    direct: [CellId; 4],
    indirect: [CellId; 8],
}

impl Neighbourhood {
    pub(crate) fn new(centre: CellId, direct: [CellId; 4], indirect: [CellId; 8]) -> Self {
        Self {
            centre,
            direct,
            indirect,
        }
    }

    /// The queried cell.
    pub fn centre(&self) -> CellId {
        self.centre
    }

    /// The direct neighbour in `direction`.
    pub fn direct(&self, direction: Direction) -> CellId {
        self.direct[direction.index()]
    }

    /// All four direct neighbours in [`Direction::ALL`] order.
    pub fn direct_ids(&self) -> &[CellId; 4] {
        &self.direct
    }

    /// The indirect neighbour for `lookup`.
    pub fn indirect(&self, lookup: Indirect) -> CellId {
        self.indirect[lookup.index()]
    }

    /// All eight indirect neighbours in [`Indirect::ALL`] order.
    pub fn indirect_ids(&self) -> &[CellId; 8] {
        &self.indirect
    }

    /// Every id in the neighbourhood — centre, direct, indirect — with
    /// duplicates removed, preserving first-seen order.
    ///
    /// Away from cube corners this is all thirteen ids; near a corner
    /// the two-hop compositions can land on the same cell twice and the
    /// list shrinks.
    pub fn distinct_ids(&self) -> SmallVec<[CellId; 13]> {
        let mut ids: SmallVec<[CellId; 13]> = SmallVec::new();
        for id in std::iter::once(self.centre)
            .chain(self.direct)
            .chain(self.indirect)
        {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Resolve the ids to cell references against the grid they came
    /// from.
    pub fn cells<'g>(&self, grid: &'g Grid) -> Result<NeighbourhoodCells<'g>, GridError> {
        Ok(NeighbourhoodCells {
            centre: grid.cell(self.centre)?,
            direct: [
                grid.cell(self.direct[0])?,
                grid.cell(self.direct[1])?,
                grid.cell(self.direct[2])?,
                grid.cell(self.direct[3])?,
            ],
            indirect: [
                grid.cell(self.indirect[0])?,
                grid.cell(self.indirect[1])?,
                grid.cell(self.indirect[2])?,
                grid.cell(self.indirect[3])?,
                grid.cell(self.indirect[4])?,
                grid.cell(self.indirect[5])?,
                grid.cell(self.indirect[6])?,
                grid.cell(self.indirect[7])?,
            ],
        })
    }
}

/// Borrowed view of a neighbourhood with full cells.
///
/// This is the shape serialization-facing callers hand outward: cells
/// serialize flat, with neighbour ids rather than nested cells, so the
/// cyclic neighbour graph never expands unboundedly.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NeighbourhoodCells<'g> {
    /// The queried cell.
    pub centre: &'g Cell,
    /// Direct neighbours in [`Direction::ALL`] order.
    pub direct: [&'g Cell; 4],
    /// Indirect neighbours in [`Indirect::ALL`] order.
    pub indirect: [&'g Cell; 8],
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use orb_core::{CellCoord, FaceId};

    // ── Composition ─────────────────────────────────────────────

    #[test]
    fn indirects_compose_two_direct_hops() {
        let grid = Grid::generate(2).unwrap();
        for id in [0u32, 12, 60, 149] {
            let hood = grid.neighbourhood(CellId(id)).unwrap();
            for lookup in Indirect::ALL {
                let (first, second) = lookup.hops();
                let via = hood.direct(first);
                let expected = grid.neighbour(via, second).unwrap();
                assert_eq!(hood.indirect(lookup), expected);
            }
        }
    }

    #[test]
    fn interior_neighbourhood_is_pairwise_distinct() {
        // Centre of face 0 at n = 2: two steps from every boundary, so
        // even the two-hop lookups stay on-face and distinct.
        let grid = Grid::generate(2).unwrap();
        let centre = grid
            .cell_at(CellCoord::new(FaceId(0), 2, 2))
            .unwrap()
            .id();
        let hood = grid.neighbourhood(centre).unwrap();

        let mut seen = IndexSet::new();
        seen.insert(hood.centre());
        for &id in hood.direct_ids() {
            assert!(seen.insert(id), "direct {id} repeats");
        }
        for &id in hood.indirect_ids() {
            assert!(seen.insert(id), "indirect {id} repeats");
        }
        assert_eq!(seen.len(), 13);
        assert_eq!(hood.distinct_ids().len(), 13);
    }

    #[test]
    fn corner_neighbourhood_may_collapse_but_never_fails() {
        // At n = 0 every cell sits on a cube corner; the heuristic
        // composition still resolves, it just repeats cells.
        let grid = Grid::generate(0).unwrap();
        for cell in grid.cells() {
            let hood = grid.neighbourhood(cell.id()).unwrap();
            let distinct = hood.distinct_ids();
            assert!(distinct.len() <= 13);
            assert_eq!(distinct[0], cell.id());
        }
    }

    // ── Failure paths ───────────────────────────────────────────

    #[test]
    fn missing_centre_is_cell_not_found() {
        let grid = Grid::generate(1).unwrap();
        assert_eq!(
            grid.neighbourhood(CellId(54)).unwrap_err(),
            GridError::CellNotFound { id: CellId(54) }
        );
    }

    // ── Cell resolution ─────────────────────────────────────────

    #[test]
    fn cells_view_borrows_matching_cells() {
        let grid = Grid::generate(1).unwrap();
        let hood = grid.neighbourhood(CellId(4)).unwrap();
        let view = hood.cells(&grid).unwrap();
        assert_eq!(view.centre.id(), CellId(4));
        for (direction, cell) in Direction::ALL.into_iter().zip(view.direct) {
            assert_eq!(cell.id(), hood.direct(direction));
        }
        for (lookup, cell) in Indirect::ALL.into_iter().zip(view.indirect) {
            assert_eq!(cell.id(), hood.indirect(lookup));
        }
    }
}
