//! Derived indexes over the record collections.

mod adjacency;

pub use adjacency::AdjacencyIndex;
