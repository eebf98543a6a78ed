use crate::network::Graph;

/// Mutable community assignment over a borrowed graph.
///
/// Tracks, per community, the internal weight (twice the intra-community
/// edge weight plus self-loops) and the total weighted degree of members.
/// Community ids are drawn from the node id space and go non-contiguous as
/// nodes move; `renumber_communities` compacts them again.
pub struct Partition<'g> {
    pub(crate) graph: &'g Graph,
    node_to_community: Vec<usize>,
    internal: Vec<f64>,
    total: Vec<f64>,
    /// Edge weight from the node under consideration to each community,
    /// indexed by community id. -1 marks a slot untouched since the last
    /// reset; `touched` lists the live slots so a reset is O(degree).
    pub(crate) neighbor_weights: Vec<f64>,
    pub(crate) touched: Vec<usize>,
}

impl<'g> Partition<'g> {
    /// Singleton partition: every node in its own community.
    pub fn new(graph: &'g Graph) -> Partition<'g> {
        let size = graph.nodes();
        let mut internal = Vec::with_capacity(size);
        let mut total = Vec::with_capacity(size);
        for node in 0..size {
            internal.push(graph.self_loop_weight(node));
            total.push(graph.weighted_degree(node));
        }

        Partition {
            graph,
            node_to_community: (0..size).collect(),
            internal,
            total,
            neighbor_weights: vec![-1.0; size],
            touched: Vec::with_capacity(size),
        }
    }

    /// Number of nodes in the underlying graph.
    pub fn size(&self) -> usize {
        self.node_to_community.len()
    }

    /// Community currently holding `node`.
    pub fn community(&self, node: usize) -> usize {
        self.node_to_community[node]
    }

    /// Twice the intra-community edge weight of `community`, self-loops
    /// counted once.
    pub fn internal_weight(&self, community: usize) -> f64 {
        self.internal[community]
    }

    /// Summed weighted degree of the members of `community`.
    pub fn total_degree(&self, community: usize) -> f64 {
        self.total[community]
    }

    /// Modularity of the current assignment, 0 for a graph without edges.
    pub fn modularity(&self) -> f64 {
        let m2 = self.graph.total_weight();
        if m2 <= 0.0 {
            return 0.0;
        }

        let mut q = 0.0;
        for community in 0..self.size() {
            if self.total[community] > 0.0 {
                q += self.internal[community] - self.total[community] * self.total[community] / m2;
            }
        }
        q / m2
    }

    /// Takes `node` out of `community`'s aggregates. `weight_to_community`
    /// is the edge weight from `node` to the other members, self-loops
    /// excluded. The node's own assignment is left untouched until the
    /// following insert.
    pub(crate) fn remove_node(&mut self, node: usize, community: usize, weight_to_community: f64) {
        self.internal[community] -= 2.0 * weight_to_community + self.graph.self_loop_weight(node);
        self.total[community] -= self.graph.weighted_degree(node);
    }

    /// Adds `node` to `community`'s aggregates and records the assignment.
    pub(crate) fn insert_node(&mut self, node: usize, community: usize, weight_to_community: f64) {
        self.internal[community] += 2.0 * weight_to_community + self.graph.self_loop_weight(node);
        self.total[community] += self.graph.weighted_degree(node);

        self.node_to_community[node] = community;
    }

    /// Modularity delta of inserting a node with degree `node_degree` and
    /// edge weight `weight_to_community` into `community`, up to the
    /// normalization shared by all candidates.
    pub(crate) fn gain(&self, community: usize, weight_to_community: f64, node_degree: f64) -> f64 {
        weight_to_community - self.total[community] * node_degree / self.graph.total_weight()
    }

    /// Accumulates the edge weight from `node` to each neighboring
    /// community, self-loops excluded. Resets the cache first and seeds the
    /// node's own community with weight 0 so it is always a candidate.
    pub(crate) fn neighbor_communities(&mut self, node: usize) {
        self.reset_neighbor_communities();

        let own = self.node_to_community[node];
        self.neighbor_weights[own] = 0.0;
        self.touched.push(own);

        let graph = self.graph;
        for (neighbor, weight) in graph.neighbors(node) {
            if neighbor == node {
                continue;
            }
            let community = self.node_to_community[neighbor];
            if self.neighbor_weights[community] == -1.0 {
                self.neighbor_weights[community] = 0.0;
                self.touched.push(community);
            }
            self.neighbor_weights[community] += weight;
        }
    }

    /// Same accumulation with self-loops included and no reset, so one
    /// community's outgoing weight can be gathered across all its member
    /// nodes during coarsening.
    pub(crate) fn neighbor_communities_all(&mut self, node: usize) {
        let graph = self.graph;
        for (neighbor, weight) in graph.neighbors(node) {
            let community = self.node_to_community[neighbor];
            if self.neighbor_weights[community] == -1.0 {
                self.neighbor_weights[community] = 0.0;
                self.touched.push(community);
            }
            self.neighbor_weights[community] += weight;
        }
    }

    /// Writes the sentinel back over every touched slot.
    pub(crate) fn reset_neighbor_communities(&mut self) {
        for community in self.touched.drain(..) {
            self.neighbor_weights[community] = -1.0;
        }
    }

    /// Rewrites community ids to the contiguous range `0..k` in order of
    /// first appearance over nodes `0..size` and returns `k`. Idempotent.
    pub fn renumber_communities(&mut self) -> usize {
        let mut renumber = vec![usize::MAX; self.size()];
        let mut next = 0;
        for node in 0..self.size() {
            let community = self.node_to_community[node];
            if renumber[community] == usize::MAX {
                renumber[community] = next;
                next += 1;
            }
            self.node_to_community[node] = renumber[community];
        }
        next
    }
}
