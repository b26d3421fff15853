//! Benchmark profiles for the orb cubed-sphere grid.
//!
//! Two fixed subdivisions keep runs comparable across machines and
//! revisions:
//!
//! - [`REFERENCE_SUBDIVISION`]: n = 20 (side 41, ~10K cells)
//! - [`STRESS_SUBDIVISION`]: n = 64 (side 129, ~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use orb_grid::{Grid, GridError};

/// Reference profile: side 41, 10 086 cells.
pub const REFERENCE_SUBDIVISION: i64 = 20;

/// Stress profile: side 129, 99 846 cells.
pub const STRESS_SUBDIVISION: i64 = 64;

/// Generate the reference grid.
pub fn reference_grid() -> Result<Grid, GridError> {
    Grid::generate(REFERENCE_SUBDIVISION)
}

/// Generate the stress grid.
pub fn stress_grid() -> Result<Grid, GridError> {
    Grid::generate(STRESS_SUBDIVISION)
}
