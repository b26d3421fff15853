//! Error types for grid generation and queries.

use orb_core::{CellId, Direction, FaceId};
use std::fmt;

/// Errors arising from grid generation or neighbourhood queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The subdivision parameter is negative.
    ///
    /// Rejected before any allocation happens.
    InvalidSubdivision {
        /// The rejected parameter.
        n: i64,
    },
    /// The subdivision parameter would overflow the `u32` cell id space.
    SubdivisionTooLarge {
        /// The rejected parameter.
        n: i64,
        /// Largest accepted subdivision.
        max: i64,
    },
    /// The requested cell id is not present in the grid.
    CellNotFound {
        /// The missing id.
        id: CellId,
    },
    /// A neighbour slot needed for a lookup is unset.
    ///
    /// A fully resolved grid has no unset slots, so this indicates a
    /// defect in the seam table or the builder. It is surfaced instead of
    /// silently producing a wrong answer; it is never caused by bad
    /// caller input.
    UnresolvedNeighbour {
        /// The cell whose slot is unset.
        id: CellId,
        /// The direction of the unset slot.
        direction: Direction,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSubdivision { n } => {
                write!(f, "subdivision must be non-negative, got {n}")
            }
            Self::SubdivisionTooLarge { n, max } => {
                write!(f, "subdivision {n} exceeds maximum {max}")
            }
            Self::CellNotFound { id } => write!(f, "cell {id} not found"),
            Self::UnresolvedNeighbour { id, direction } => {
                write!(f, "cell {id} has no resolved {direction} neighbour")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors reported by seam table validation.
///
/// Returned by [`CubeTopology::validate`](crate::topology::CubeTopology::validate)
/// only; the shipped [`CUBE`](crate::topology::CUBE) table validates
/// cleanly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// An edge maps back onto its own face.
    SelfLink {
        /// The face whose edge self-links.
        face: FaceId,
        /// The offending edge.
        edge: Direction,
    },
    /// An edge's target does not map back to it with the same
    /// orientation.
    AsymmetricLink {
        /// The face whose edge is one-sided.
        face: FaceId,
        /// The offending edge.
        edge: Direction,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLink { face, edge } => {
                write!(f, "face {face} edge {edge} links to its own face")
            }
            Self::AsymmetricLink { face, edge } => {
                write!(f, "face {face} edge {edge} is not matched by its target edge")
            }
        }
    }
}

impl std::error::Error for TopologyError {}
