//! Louvain community detection algorithm
#![deny(missing_docs)]
#![deny(warnings)]

/// Errors from graph validation and coarsening
pub mod error;

/// Data structure for storing a weighted, undirected graph
pub mod network;

/// Mutable community assignment over a graph, with the per-community
/// aggregates the optimization reads
pub mod partition;

/// Multi-level Louvain driver
pub mod louvain;

/// Clustering objective functions
pub mod objective;

mod coarsen;
mod graph;
mod local_moving;


pub use error::Error;
pub use louvain::{Louvain, DEFAULT_MIN_IMPROVEMENT};
pub use network::Graph;
pub use partition::Partition;
