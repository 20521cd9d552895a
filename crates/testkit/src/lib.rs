#![warn(missing_docs)]
//! Determinism testing surfaces: canonical JSON, golden snapshots and digests.

mod digest;
mod snapshot;

pub use digest::*;
pub use snapshot::*;
