//! Position-indexed entity lookup.

pub mod index;

pub use index::SpatialIndex;
