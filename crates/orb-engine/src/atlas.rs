//! Atomic publication of generated grids.

use orb_core::{CellId, GridGenerationId};
use orb_grid::{Grid, GridError, Neighbourhood};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// A grid published by the atlas, stamped with its generation.
#[derive(Clone, Debug)]
pub struct Published {
    /// Monotonic stamp; later publications carry larger stamps.
    pub generation: GridGenerationId,
    /// The immutable grid.
    pub grid: Arc<Grid>,
}

/// Holds the most recently generated grid and swaps in replacements
/// atomically.
///
/// A new grid is fully built and resolved before the swap, outside the
/// lock, so readers observe either the previous publication or the
/// complete new one — never a partial state. Readers keep their `Arc`
/// across swaps: a query running against an old grid finishes against
/// that grid, and the old allocation is freed when its last holder
/// drops.
///
/// # Examples
///
/// ```
/// use orb_core::CellId;
/// use orb_engine::Atlas;
///
/// let atlas = Atlas::new();
/// assert!(atlas.current().is_none());
///
/// atlas.generate(1).unwrap();
/// let hood = atlas.get(CellId(4)).unwrap();
/// assert_eq!(hood.centre(), CellId(4));
/// ```
#[derive(Debug, Default)]
pub struct Atlas {
    current: RwLock<Option<Published>>,
    generations: AtomicU64,
}

impl Atlas {
    /// An empty atlas; nothing published yet.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            generations: AtomicU64::new(0),
        }
    }

    /// Generate a fresh grid and publish it.
    ///
    /// Concurrent calls each build an independent grid; whichever swaps
    /// last holds the `current` slot. Returns the grid this call built,
    /// whether or not it is still current by the time the caller looks.
    pub fn generate(&self, n: i64) -> Result<Arc<Grid>, GridError> {
        let grid = Arc::new(Grid::generate(n)?);
        let generation = GridGenerationId(self.generations.fetch_add(1, Ordering::Relaxed) + 1);
        let published = Published {
            generation,
            grid: Arc::clone(&grid),
        };
        // Lock holders only assign or clone; poisoning cannot leave
        // torn state, so recover the guard rather than propagate.
        let mut slot = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = Some(published);
        Ok(grid)
    }

    /// The current publication, if any.
    pub fn current(&self) -> Option<Published> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The currently published grid, if any.
    pub fn grid(&self) -> Option<Arc<Grid>> {
        self.current().map(|published| published.grid)
    }

    /// Neighbourhood query against the currently published grid.
    ///
    /// Fails with [`GridError::CellNotFound`] when nothing has been
    /// published yet, or when the id is absent from the current grid.
    pub fn get(&self, id: CellId) -> Result<Neighbourhood, GridError> {
        match self.grid() {
            Some(grid) => grid.neighbourhood(id),
            None => Err(GridError::CellNotFound { id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_atlas_reports_cell_not_found() {
        let atlas = Atlas::new();
        assert_eq!(
            atlas.get(CellId(0)).unwrap_err(),
            GridError::CellNotFound { id: CellId(0) }
        );
    }

    #[test]
    fn generate_publishes_and_get_queries_it() {
        let atlas = Atlas::new();
        let grid = atlas.generate(1).unwrap();
        assert_eq!(grid.cell_count(), 54);

        let hood = atlas.get(CellId(0)).unwrap();
        assert_eq!(hood.centre(), CellId(0));
        assert_eq!(
            atlas.get(CellId(54)).unwrap_err(),
            GridError::CellNotFound { id: CellId(54) }
        );
    }

    #[test]
    fn generation_stamps_are_strictly_increasing() {
        let atlas = Atlas::new();
        atlas.generate(0).unwrap();
        let first = atlas.current().unwrap().generation;
        atlas.generate(0).unwrap();
        let second = atlas.current().unwrap().generation;
        assert!(second > first);
    }

    #[test]
    fn readers_keep_the_old_grid_across_a_swap() {
        let atlas = Atlas::new();
        atlas.generate(1).unwrap();
        let held = atlas.grid().unwrap();

        atlas.generate(2).unwrap();
        assert_eq!(held.side(), 3);
        assert_eq!(atlas.grid().unwrap().side(), 5);
        // The held grid still answers queries consistently.
        assert!(held.neighbourhood(CellId(53)).is_ok());
    }

    #[test]
    fn failed_generation_leaves_the_current_grid_in_place() {
        let atlas = Atlas::new();
        atlas.generate(1).unwrap();
        let before = atlas.current().unwrap().generation;

        assert!(atlas.generate(-3).is_err());
        let after = atlas.current().unwrap();
        assert_eq!(after.generation, before);
        assert_eq!(after.grid.side(), 3);
    }
}
