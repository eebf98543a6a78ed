use std::collections::TryReserveError;
use thiserror::Error;

/// Errors from graph validation and coarsening
#[derive(Debug, Error)]
pub enum Error {
    /// The offset table was empty; it must hold at least the leading zero
    #[error("offset table is empty")]
    EmptyOffsets,
    /// The offset table did not start at zero
    #[error("offset table must start at 0, found {found}")]
    FirstOffset {
        /// Value found at position 0
        found: usize,
    },
    /// The offset table decreased between two consecutive entries
    #[error("offset table decreases at index {index}")]
    NonMonotonicOffsets {
        /// Index of the first offending entry
        index: usize,
    },
    /// The final offset did not match the adjacency length
    #[error("final offset expects {expected} adjacency entries, found {found}")]
    NeighborRangeMismatch {
        /// Entry count announced by the final offset
        expected: usize,
        /// Actual adjacency length
        found: usize,
    },
    /// An adjacency entry referenced a node outside the graph
    #[error("adjacency entry {position} references node {neighbor}, graph has {nodes} nodes")]
    NeighborOutOfRange {
        /// Position of the entry in the adjacency sequence
        position: usize,
        /// Referenced node id
        neighbor: usize,
        /// Number of nodes in the graph
        nodes: usize,
    },
    /// The weight sequence length did not match the adjacency length
    #[error("weight sequence holds {weights} entries, adjacency holds {neighbors}")]
    WeightLengthMismatch {
        /// Weight sequence length
        weights: usize,
        /// Adjacency length
        neighbors: usize,
    },
    /// The node count was not representable in the graph's index type
    #[error("node count {nodes} exceeds the index type's capacity")]
    TooManyNodes {
        /// Requested node count
        nodes: usize,
    },
    /// Growing the coarse graph's edge buffers failed
    #[error("coarse edge buffer allocation failed: {source}")]
    EdgeCapacity {
        /// Underlying reservation failure
        #[from]
        source: TryReserveError,
    },
}
