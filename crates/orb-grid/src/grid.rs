//! The immutable generated grid: cell arena plus six faces.

use crate::builder::GridBuilder;
use crate::error::GridError;
use crate::face::Face;
use crate::neighbourhood::Neighbourhood;
use crate::resolver::AdjacencyResolver;
use crate::topology::CUBE;
use orb_core::{Cell, CellCoord, CellId, Direction, FaceId, Indirect};

/// A fully generated, fully resolved cubed-sphere grid.
///
/// The grid owns its cells in a flat arena indexed by id; faces hold
/// arena indices. Once [`Grid::generate`] returns, the topology is
/// frozen — only the payload fields remain mutable, through
/// [`Grid::cell_mut`], for collaborators that layer their own state on
/// top. Treat a grid as a value: wrap it in `Arc` to share it, generate
/// a new one to change resolution.
///
/// Memory is linear in the cell count: `6·(2n+1)²` cells and four links
/// each. At `n = 500` that is ~6.01M cells in one contiguous arena, so
/// budget accordingly before reaching for large subdivisions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    subdivision: u32,
    side: u32,
    cells: Vec<Cell>,
    faces: [Face; FaceId::COUNT],
}

impl Grid {
    /// Build and fully resolve a grid with side `2n + 1`.
    ///
    /// A synchronous batch computation: allocation, id assignment, and
    /// adjacency resolution all complete before this returns, and the
    /// result never changes afterwards. Two calls with the same `n`
    /// produce identical grids.
    ///
    /// # Examples
    ///
    /// ```
    /// use orb_grid::Grid;
    ///
    /// let grid = Grid::generate(1).unwrap();
    /// assert_eq!(grid.side(), 3);
    /// assert_eq!(grid.cell_count(), 54);
    ///
    /// assert!(Grid::generate(-1).is_err());
    /// ```
    pub fn generate(n: i64) -> Result<Self, GridError> {
        let builder = GridBuilder::new(n)?;
        debug_assert_eq!(CUBE.validate(), Ok(()));
        let (mut cells, faces) = builder.build();
        AdjacencyResolver::new(&CUBE).resolve(&mut cells, &faces)?;
        Ok(Self {
            subdivision: builder.subdivision(),
            side: builder.side(),
            cells,
            faces,
        })
    }

    /// Subdivision parameter `n` this grid was generated with.
    pub fn subdivision(&self) -> u32 {
        self.subdivision
    }

    /// Side length of every face, `2n + 1`.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Total number of cells, `6 · side²`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in id order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The six faces.
    pub fn faces(&self) -> &[Face; FaceId::COUNT] {
        &self.faces
    }

    /// One face.
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Cell by id, if present.
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Cell by id.
    pub fn cell(&self, id: CellId) -> Result<&Cell, GridError> {
        self.get(id).ok_or(GridError::CellNotFound { id })
    }

    /// Cell at a face-local coordinate, if in range.
    pub fn cell_at(&self, coord: CellCoord) -> Option<&Cell> {
        if coord.face.index() >= FaceId::COUNT || coord.row >= self.side || coord.col >= self.side
        {
            return None;
        }
        self.get(coord.cell_id(self.side))
    }

    /// Mutable cell access, for payload updates.
    ///
    /// Requires unique access to the grid, so shared (`Arc`-wrapped)
    /// grids stay read-only. Neighbour links are already frozen by the
    /// time a caller can see the grid; only payload is meant to change.
    pub fn cell_mut(&mut self, id: CellId) -> Result<&mut Cell, GridError> {
        self.cells
            .get_mut(id.index())
            .ok_or(GridError::CellNotFound { id })
    }

    /// The resolved link of `id` in `direction`.
    pub fn neighbour(&self, id: CellId, direction: Direction) -> Result<CellId, GridError> {
        self.cell(id)?
            .neighbour(direction)
            .ok_or(GridError::UnresolvedNeighbour { id, direction })
    }

    /// A cell plus its 4 direct and 8 indirect neighbours.
    ///
    /// Each indirect entry composes the two hops of its [`Indirect`]
    /// variant out of direct links. Fails with
    /// [`GridError::CellNotFound`] for an absent id and
    /// [`GridError::UnresolvedNeighbour`] if a hop's slot is unset.
    pub fn neighbourhood(&self, id: CellId) -> Result<Neighbourhood, GridError> {
        let centre = self.cell(id)?.id();

        let mut direct = [centre; 4];
        for direction in Direction::ALL {
            direct[direction.index()] = self.neighbour(centre, direction)?;
        }

        let mut indirect = [centre; 8];
        for lookup in Indirect::ALL {
            let (first, second) = lookup.hops();
            let via = direct[first.index()];
            indirect[lookup.index()] = self.neighbour(via, second)?;
        }

        Ok(Neighbourhood::new(centre, direct, indirect))
    }
}
