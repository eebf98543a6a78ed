use crate::error::Error;
use crate::network::Graph;
use crate::partition::Partition;

const INITIAL_EDGE_CAPACITY: usize = 8;

impl Partition<'_> {
    /// Folds the current communities into the next-level graph: one node
    /// per community, one edge per pair of communities with any edges
    /// between them, weight-summed. Intra-community weight becomes the
    /// meta node's self-loop, so the produced graph's total weight equals
    /// this graph's. Renumbers the communities as a side effect.
    ///
    /// Fails only if growing the edge buffers runs out of memory; no
    /// partially built graph is returned.
    pub fn coarsen(&mut self) -> Result<Graph, Error> {
        let communities = self.renumber_communities();

        let mut offsets = Vec::with_capacity(communities + 1);
        offsets.push(0);

        if communities == 0 {
            return Ok(Graph {
                offsets,
                neighbors: Vec::new(),
                weights: Some(Vec::new()),
                total_weight: 0.0,
            });
        }

        let mut order: Vec<usize> = (0..self.size()).collect();
        order.sort_unstable_by_key(|&node| self.community(node));

        let mut neighbors: Vec<u32> = Vec::with_capacity(INITIAL_EDGE_CAPACITY);
        let mut weights: Vec<f64> = Vec::with_capacity(INITIAL_EDGE_CAPACITY);
        let mut total_weight = 0.0;

        // Walk the nodes community by community, pooling each community's
        // edges in the cache, and emit one adjacency run per community.
        self.reset_neighbor_communities();
        let mut current = self.community(order[0]);
        for &node in &order {
            let community = self.community(node);
            if community != current {
                self.flush_community(&mut offsets, &mut neighbors, &mut weights, &mut total_weight)?;
                current = community;
            }
            self.neighbor_communities_all(node);
        }
        self.flush_community(&mut offsets, &mut neighbors, &mut weights, &mut total_weight)?;

        neighbors.shrink_to_fit();
        weights.shrink_to_fit();

        Ok(Graph {
            offsets,
            neighbors,
            weights: Some(weights),
            total_weight,
        })
    }

    /// Emits the pooled cache as the adjacency run of the community just
    /// walked, growing the edge buffers by doubling, and leaves the cache
    /// reset for the next community.
    fn flush_community(
        &mut self,
        offsets: &mut Vec<usize>,
        neighbors: &mut Vec<u32>,
        weights: &mut Vec<f64>,
        total_weight: &mut f64,
    ) -> Result<(), Error> {
        for &community in &self.touched {
            let weight = self.neighbor_weights[community];
            if neighbors.len() == neighbors.capacity() {
                let additional = neighbors.capacity();
                neighbors.try_reserve_exact(additional)?;
                weights.try_reserve_exact(additional)?;
            }
            neighbors.push(community as u32);
            weights.push(weight);
            *total_weight += weight;
        }
        offsets.push(neighbors.len());
        self.reset_neighbor_communities();
        Ok(())
    }
}
