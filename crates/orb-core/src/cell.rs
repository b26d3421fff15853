//! The cell data model: payload plus cardinal neighbour slots.

use crate::coord::CellCoord;
use crate::direction::Direction;
use crate::id::{CellId, OwnerId};

/// One grid unit of the cubed sphere.
///
/// A cell's identity (`id`, `coord`) is assigned by the grid builder and
/// never changes. The payload fields (`lat`, `height`, `attrs`, `owner`)
/// are opaque to the grid core; collaborators mutate them under their own
/// discipline. The four neighbour slots are written during adjacency
/// resolution and hold ids, never owning references — a link's validity
/// is tied to the grid it was resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    id: CellId,
    coord: CellCoord,
    /// Latitude band in degrees, `-90..=90`. Payload; not computed here.
    pub lat: i32,
    /// Height band. Payload; not computed here.
    pub height: i32,
    neighbours: [Option<CellId>; 4],
    /// Freeform attributes attached by collaborators.
    pub attrs: Vec<String>,
    /// Owning agent, if any.
    pub owner: Option<OwnerId>,
}

impl Cell {
    /// A fresh cell with zeroed payload and all four slots unset.
    pub fn new(id: CellId, coord: CellCoord) -> Self {
        Self {
            id,
            coord,
            lat: 0,
            height: 0,
            neighbours: [None; 4],
            attrs: Vec::new(),
            owner: None,
        }
    }

    /// Stable global id.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Owning face plus face-local row and column.
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// The neighbour link in `direction`, if resolved.
    pub fn neighbour(&self, direction: Direction) -> Option<CellId> {
        self.neighbours[direction.index()]
    }

    /// All four slots in [`Direction::ALL`] order.
    pub fn neighbours(&self) -> &[Option<CellId>; 4] {
        &self.neighbours
    }

    /// Write the link in `direction`.
    ///
    /// Called by the adjacency resolver while a grid is being generated;
    /// links are frozen once resolution completes.
    pub fn set_neighbour(&mut self, direction: Direction, id: CellId) {
        self.neighbours[direction.index()] = Some(id);
    }

    /// True once all four slots are set.
    pub fn fully_resolved(&self) -> bool {
        self.neighbours.iter().all(Option::is_some)
    }
}
