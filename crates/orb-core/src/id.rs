//! Strongly-typed identifiers used across the orb workspace.

use std::fmt;

/// Identifies a single cell within a generated grid.
///
/// Ids are assigned contiguously at generation time, face-major then
/// row-major: `id = face * side² + row * side + col`. `CellId(n)` is the
/// index of the n-th cell in the grid's arena, so a cell id is also a
/// direct arena index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellId(pub u32);

impl CellId {
    /// Arena index of this id.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// One of the six cube faces, numbered 0–5.
///
/// Faces 0–3 form a ring (each face's bottom edge meets the next face's
/// top edge); faces 4 and 5 cap the ring on the left and right. The seam
/// table in the grid crate is the authority on which edge meets which.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FaceId(pub u8);

impl FaceId {
    /// Number of faces on the cube.
    pub const COUNT: usize = 6;

    /// Face index as an array index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for FaceId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Identifies the owner of a cell.
///
/// Opaque payload: the grid core assigns no meaning to owners and never
/// reads them back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OwnerId(pub u32);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OwnerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonic stamp for grids published by the atlas.
///
/// Each publication gets a fresh, strictly larger stamp. Two grids with
/// the same subdivision but different stamps are distinct publications;
/// readers can use the stamp to detect that a swap happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GridGenerationId(pub u64);

impl fmt::Display for GridGenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GridGenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
