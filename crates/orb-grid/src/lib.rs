//! Cubed-sphere grid construction and neighbourhood queries.
//!
//! This crate builds the globe: six square faces, each a `(2n+1)×(2n+1)`
//! lattice of cells, with every cell linked to its four cardinal
//! neighbours — including across face boundaries, where the seam may
//! reverse the along-edge index. Cube topology lives in one declarative
//! seam table ([`CUBE`]); the resolution algorithm applies it uniformly
//! to every boundary cell with no face-specific branching.
//!
//! # Pipeline
//!
//! - [`GridBuilder`]: allocate the cell arena and the six faces,
//!   assigning every cell a stable id and face-local coordinate.
//! - [`AdjacencyResolver`]: fill every cell's four neighbour slots,
//!   interior cells by unit offset, boundary cells through the seam
//!   table.
//! - [`Grid::neighbourhood`]: a cell plus its 4 direct and 8 indirect
//!   (two-hop) neighbours.
//!
//! [`Grid::generate`] runs the whole pipeline and is the entry point for
//! most callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod face;
pub mod grid;
pub mod neighbourhood;
pub mod resolver;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use builder::GridBuilder;
pub use error::{GridError, TopologyError};
pub use face::Face;
pub use grid::Grid;
pub use neighbourhood::{Neighbourhood, NeighbourhoodCells};
pub use resolver::AdjacencyResolver;
pub use topology::{CubeTopology, EdgeLink, Orientation, CUBE};
