//! Grid publication for the orb workspace.
//!
//! Generation is a pure batch computation in `orb-grid`; this crate adds
//! the service piece — an [`Atlas`] that holds the most recently
//! generated grid and swaps replacements in atomically, so queries in
//! flight never observe a partially built world.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod atlas;

pub use atlas::{Atlas, Published};
