//! Orb: a cubed-sphere world grid.
//!
//! Six square faces, each a `(2n+1)×(2n+1)` lattice of cells, every cell
//! linked to its cardinal neighbours across face seams. This is the
//! top-level facade crate re-exporting the public API from the orb
//! sub-crates; for most users, depending on `orb` alone is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use orb::prelude::*;
//!
//! // A service that owns the current world.
//! let atlas = Atlas::new();
//! let grid = atlas.generate(1).unwrap();
//! assert_eq!(grid.cell_count(), 54);
//!
//! // The centre cell of face 0 and its twelve neighbours.
//! let hood = atlas.get(CellId(4)).unwrap();
//! assert_eq!(hood.centre(), CellId(4));
//! assert_eq!(hood.direct(Direction::Top), CellId(1));
//! assert_eq!(hood.indirect(Indirect::FarTop), grid.neighbour(CellId(1), Direction::Top).unwrap());
//!
//! // Or skip the service and treat grids as plain values.
//! let fine = Grid::generate(4).unwrap();
//! assert_eq!(fine.side(), 9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `orb-core` | Ids, coordinates, directions, the cell model |
//! | [`grid`] | `orb-grid` | Builder, seam table, resolver, neighbourhood queries |
//! | [`engine`] | `orb-engine` | The atlas publication service |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core ids, coordinates, directions, and the cell model (`orb-core`).
pub use orb_core as types;

/// Grid construction, seam topology, and queries (`orb-grid`).
pub use orb_grid as grid;

/// The atlas publication service (`orb-engine`).
pub use orb_engine as engine;

pub mod prelude {
    //! Everything most callers need, in one import.

    pub use orb_core::{Cell, CellCoord, CellId, Direction, FaceId, Indirect, OwnerId};
    pub use orb_engine::Atlas;
    pub use orb_grid::{Grid, GridError, Neighbourhood};
}
