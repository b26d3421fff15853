//! Grid invariant compliance helpers.
//!
//! These functions verify the invariants every generated grid must
//! satisfy, and are reused across the builder, resolver, grid, and
//! property tests.

use crate::grid::Grid;
use crate::topology::CUBE;
use indexmap::IndexSet;
use orb_core::{CellCoord, Direction};

/// Assert ids are contiguous over `[0, 6·side²)` in arena order.
pub fn assert_ids_contiguous(grid: &Grid) {
    let mut unique = IndexSet::new();
    for (index, cell) in grid.cells().iter().enumerate() {
        assert_eq!(
            cell.id().index(),
            index,
            "cell at arena slot {index} carries id {}",
            cell.id()
        );
        assert!(unique.insert(cell.id()), "duplicate id {}", cell.id());
    }
    assert_eq!(unique.len(), grid.cell_count());
}

/// Assert the coordinate ↔ id layout arithmetic holds for every cell,
/// both through the faces and through the arena.
pub fn assert_coord_id_layout(grid: &Grid) {
    for cell in grid.cells() {
        let coord = cell.coord();
        assert_eq!(coord.cell_id(grid.side()), cell.id());
        assert_eq!(CellCoord::from_cell_id(cell.id(), grid.side()), coord);
        assert_eq!(grid.face(coord.face).cell_at(coord.row, coord.col), cell.id());
    }
}

/// Assert every neighbour slot of every cell is set.
pub fn assert_fully_resolved(grid: &Grid) {
    for cell in grid.cells() {
        for direction in Direction::ALL {
            assert!(
                cell.neighbour(direction).is_some(),
                "cell {} has no {direction} link",
                cell.id()
            );
        }
    }
}

/// Assert link symmetry: if B is A's neighbour in some direction, then A
/// is B's neighbour in the corresponding return direction.
///
/// On-face the return direction is the plain opposite. Across a seam the
/// faces rotate, and the return direction is the target edge named by
/// the seam table.
pub fn assert_links_symmetric(grid: &Grid) {
    let side = grid.side();
    for cell in grid.cells() {
        let coord = cell.coord();
        for direction in Direction::ALL {
            let target = match cell.neighbour(direction) {
                Some(id) => id,
                None => continue,
            };
            let crosses = match direction {
                Direction::Top => coord.row == 0,
                Direction::Bottom => coord.row + 1 == side,
                Direction::Left => coord.col == 0,
                Direction::Right => coord.col + 1 == side,
            };
            let back_direction = if crosses {
                CUBE.link(coord.face, direction).edge
            } else {
                direction.opposite()
            };
            assert_eq!(
                grid.cells()[target.index()].neighbour(back_direction),
                Some(cell.id()),
                "link {} -[{direction}]-> {target} does not return via {back_direction}",
                cell.id()
            );
        }
    }
}

/// Assert no cell links to itself.
pub fn assert_no_self_links(grid: &Grid) {
    for cell in grid.cells() {
        for direction in Direction::ALL {
            assert_ne!(
                cell.neighbour(direction),
                Some(cell.id()),
                "cell {} links to itself via {direction}",
                cell.id()
            );
        }
    }
}

/// Run the full compliance suite on a grid.
pub fn run_full_compliance(grid: &Grid) {
    assert_ids_contiguous(grid);
    assert_coord_id_layout(grid);
    assert_fully_resolved(grid);
    assert_links_symmetric(grid);
    assert_no_self_links(grid);
}
