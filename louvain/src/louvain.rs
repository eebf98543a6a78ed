use crate::error::Error;
use crate::local_moving::LocalMoving;
use crate::network::Graph;
use crate::partition::Partition;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

/// Multi-level Louvain driver: repeated local moving and coarsening,
/// flattening each level's communities back onto the original node ids.
pub struct Louvain {
    rng: ChaCha20Rng,
    local_moving: LocalMoving,
    min_improvement: f64,
}

/// Modularity gain below which a level or sweep is considered converged.
pub const DEFAULT_MIN_IMPROVEMENT: f64 = 1e-6;

impl Louvain {
    /// Initialize the algorithm with the given convergence threshold.
    /// An optional random seed can be supplied, otherwise a seed of 0 will
    /// be used; the seed fixes the node visiting order, so runs with the
    /// same seed produce the same partition.
    pub fn new(min_improvement: f64, seed: Option<usize>) -> Louvain {
        let seed = seed.unwrap_or_default() as u64;

        Louvain {
            rng: ChaCha20Rng::seed_from_u64(seed),
            local_moving: LocalMoving::new(min_improvement),
            min_improvement,
        }
    }

    /// Run a single level of local moving over `graph` and write each
    /// node's community into `labels` (ids contiguous from 0). Returns the
    /// number of communities.
    ///
    /// `labels` must hold one entry per node; its prior contents are
    /// ignored.
    pub fn run_one_level(&mut self, graph: &Graph, labels: &mut [usize]) -> usize {
        assert_eq!(labels.len(), graph.nodes());
        for (node, label) in labels.iter_mut().enumerate() {
            *label = node;
        }

        let mut partition = Partition::new(graph);
        let improvement = self.local_moving.iterate(&mut partition, &mut self.rng);
        let communities = partition.renumber_communities();
        for label in labels.iter_mut() {
            *label = partition.community(*label);
        }
        debug!("single level: {} communities, improvement {:.6}", communities, improvement);
        communities
    }

    /// Run levels of local moving and coarsening until a level's
    /// modularity gain falls below the threshold, writing each original
    /// node's final community into `labels` (ids contiguous from 0).
    /// Returns the number of communities.
    ///
    /// `labels` must hold one entry per node of the input graph; its prior
    /// contents are ignored.
    pub fn run_complete(&mut self, graph: &Graph, labels: &mut [usize]) -> Result<usize, Error> {
        assert_eq!(labels.len(), graph.nodes());
        for (node, label) in labels.iter_mut().enumerate() {
            *label = node;
        }

        let (mut communities, mut next) = self.run_level(0, graph, labels)?;
        let mut levels = 1;
        while let Some(coarse) = next {
            let (count, coarser) = self.run_level(levels, &coarse, labels)?;
            communities = count;
            next = coarser;
            levels += 1;
        }
        debug!("complete: {} communities after {} levels", communities, levels);
        Ok(communities)
    }

    /// One level over the current graph: optimize, fold the communities
    /// onto `labels`, and coarsen unless the gain fell below the
    /// threshold.
    fn run_level(
        &mut self,
        level: usize,
        graph: &Graph,
        labels: &mut [usize],
    ) -> Result<(usize, Option<Graph>), Error> {
        let mut partition = Partition::new(graph);
        let improvement = self.local_moving.iterate(&mut partition, &mut self.rng);
        let communities = partition.renumber_communities();
        for label in labels.iter_mut() {
            *label = partition.community(*label);
        }
        debug!(
            "level {}: {} communities, modularity {:.6}, improvement {:.6}",
            level,
            communities,
            partition.modularity(),
            improvement
        );

        if improvement < self.min_improvement {
            return Ok((communities, None));
        }
        Ok((communities, Some(partition.coarsen()?)))
    }

    /// Build a graph from a list of adjacencies. Edges are undirected and
    /// unweighted; duplicate pairs are dropped, self-loops are kept with a
    /// single adjacency entry.
    pub fn build_network<I: Iterator<Item = (u32, u32)>>(
        n_nodes: usize,
        n_edges: usize,
        adjacency: I,
    ) -> Result<Graph, Error> {
        let mut seen = vec![HashSet::<u32>::new(); n_nodes];
        let mut edges = Vec::with_capacity(n_edges);
        for (a, b) in adjacency {
            let (i, j) = if a < b { (a, b) } else { (b, a) };
            if j as usize >= n_nodes {
                return Err(Error::NeighborOutOfRange {
                    position: edges.len(),
                    neighbor: j as usize,
                    nodes: n_nodes,
                });
            }
            if seen[i as usize].insert(j) {
                edges.push((i, j));
            }
        }

        let mut degrees = vec![0usize; n_nodes];
        for &(i, j) in &edges {
            degrees[i as usize] += 1;
            if i != j {
                degrees[j as usize] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(n_nodes + 1);
        let mut running = 0;
        offsets.push(0);
        for &degree in &degrees {
            running += degree;
            offsets.push(running);
        }

        let mut cursor = offsets[..n_nodes].to_vec();
        let mut neighbors = vec![0u32; running];
        for &(i, j) in &edges {
            neighbors[cursor[i as usize]] = j;
            cursor[i as usize] += 1;
            if i != j {
                neighbors[cursor[j as usize]] = i;
                cursor[j as usize] += 1;
            }
        }

        Graph::from_parts(offsets, neighbors, None)
    }
}
