use crate::graph::Csr;

/// Weighted undirected graph in compressed sparse row form with `u32`
/// neighbor ids. Immutable once validated: node count, per-node neighbor
/// ranges, optional per-edge weights and the precomputed total weight.
///
/// Build one with `Graph::from_parts` from a finalized offset table,
/// neighbor sequence and optional weight sequence, or with
/// `Louvain::build_network` from a list of adjacencies.
pub type Graph = Csr<u32>;
