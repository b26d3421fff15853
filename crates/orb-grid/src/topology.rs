//! Declarative cube seam topology: which face edge meets which, and how.
//!
//! The whole cube is described by one static table, [`CUBE`]. The
//! resolver consults it for every boundary step; nothing else in the
//! workspace knows which face touches which.

use crate::error::TopologyError;
use orb_core::{Direction, FaceId};

/// Whether a seam preserves or reverses the along-edge index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Index `i` on the source edge meets index `i` on the target edge.
    Ascending,
    /// Index `i` meets index `side - 1 - i`.
    Descending,
}

impl Orientation {
    /// Map an along-edge index across the seam.
    pub const fn apply(self, index: u32, side: u32) -> u32 {
        match self {
            Orientation::Ascending => index,
            Orientation::Descending => side - 1 - index,
        }
    }
}

/// One side of a seam: where a step off a face edge lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeLink {
    /// The face the step lands on.
    pub face: FaceId,
    /// The edge of that face the step arrives through.
    pub edge: Direction,
    /// How the along-edge index maps across the seam.
    pub orientation: Orientation,
}

const fn link(face: u8, edge: Direction, orientation: Orientation) -> EdgeLink {
    EdgeLink {
        face: FaceId(face),
        edge,
        orientation,
    }
}

/// The seam table: for every `(face, edge)`, where a step off that edge
/// lands.
///
/// The array shape encodes two of the table invariants — exactly one
/// entry per edge and four edges per face. The remaining invariant, that
/// the entries describe a physical cube (no self-links, every seam
/// matched symmetrically by its target), is checked by
/// [`CubeTopology::validate`]. Validation happens once, when a table is
/// defined; the resolver trusts the table at run time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeTopology {
    links: [[EdgeLink; 4]; FaceId::COUNT],
}

/// Seam table of the cubed sphere.
///
/// Faces 0–3 form a vertical ring — each face's bottom edge meets the
/// next face's top edge, wrapping from 3 back to 0 — while faces 4 and 5
/// cap the ring on the left and right. Ring-to-cap seams rotate, so some
/// carry a descending orientation.
#[rustfmt::skip]
pub static CUBE: CubeTopology = CubeTopology {
    links: [
        // face 0:        top                                             right                                          bottom                                         left
        [link(3, Direction::Bottom, Orientation::Ascending), link(5, Direction::Left, Orientation::Ascending),   link(1, Direction::Top, Orientation::Ascending), link(4, Direction::Right, Orientation::Ascending)],
        // face 1
        [link(0, Direction::Bottom, Orientation::Ascending), link(5, Direction::Bottom, Orientation::Ascending), link(2, Direction::Top, Orientation::Ascending), link(4, Direction::Bottom, Orientation::Descending)],
        // face 2
        [link(1, Direction::Bottom, Orientation::Ascending), link(5, Direction::Right, Orientation::Descending), link(3, Direction::Top, Orientation::Ascending), link(4, Direction::Left, Orientation::Descending)],
        // face 3
        [link(2, Direction::Bottom, Orientation::Ascending), link(5, Direction::Top, Orientation::Descending),   link(0, Direction::Top, Orientation::Ascending), link(4, Direction::Top, Orientation::Ascending)],
        // face 4 (left cap)
        [link(3, Direction::Left, Orientation::Ascending),   link(0, Direction::Left, Orientation::Ascending),   link(1, Direction::Left, Orientation::Descending), link(2, Direction::Left, Orientation::Descending)],
        // face 5 (right cap)
        [link(3, Direction::Right, Orientation::Descending), link(2, Direction::Right, Orientation::Descending), link(1, Direction::Right, Orientation::Ascending), link(0, Direction::Right, Orientation::Ascending)],
    ],
};

impl CubeTopology {
    /// The seam link for stepping off `edge` of `face`.
    pub fn link(&self, face: FaceId, edge: Direction) -> EdgeLink {
        self.links[face.index()][edge.index()]
    }

    /// Check that the table describes a physical cube.
    ///
    /// No edge may map to its own face, and every seam must be symmetric:
    /// following a link and looking back along the target edge must land
    /// on the source edge with the same orientation. (Descending is an
    /// involution, so one orientation per seam serves both directions.)
    pub fn validate(&self) -> Result<(), TopologyError> {
        for face in 0..FaceId::COUNT as u8 {
            let face = FaceId(face);
            for edge in Direction::ALL {
                let out = self.link(face, edge);
                if out.face == face {
                    return Err(TopologyError::SelfLink { face, edge });
                }
                let back = self.link(out.face, out.edge);
                if back.face != face || back.edge != edge || back.orientation != out.orientation {
                    return Err(TopologyError::AsymmetricLink { face, edge });
                }
            }
        }
        Ok(())
    }
}

/// Along-edge index of a boundary cell: the row for lateral edges, the
/// column for top and bottom edges.
pub(crate) const fn edge_index(edge: Direction, row: u32, col: u32) -> u32 {
    match edge {
        Direction::Top | Direction::Bottom => col,
        Direction::Left | Direction::Right => row,
    }
}

/// `(row, col)` of the cell at `index` along `edge` of a face with the
/// given side length.
pub(crate) const fn edge_cell(edge: Direction, index: u32, side: u32) -> (u32, u32) {
    match edge {
        Direction::Top => (0, index),
        Direction::Bottom => (side - 1, index),
        Direction::Left => (index, 0),
        Direction::Right => (index, side - 1),
    }
}
