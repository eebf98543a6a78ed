use crate::partition::Partition;
use rand::seq::SliceRandom;
use rand::Rng;

/// One level of greedy local moving: sweeps over the nodes relocating each
/// to the neighboring community with the best modularity gain, until a
/// sweep moves nothing or gains less than the configured threshold.
#[derive(Default)]
pub(crate) struct LocalMoving {
    min_improvement: f64,
    node_order: Vec<usize>,
}

impl LocalMoving {
    pub fn new(min_improvement: f64) -> Self {
        LocalMoving {
            min_improvement,
            ..LocalMoving::default()
        }
    }

    /// Optimizes `partition` in place and returns the modularity gain from
    /// phase start to phase end. The visiting order is a permutation drawn
    /// once per phase from `rng` and reused by every sweep.
    pub fn iterate(&mut self, partition: &mut Partition<'_>, rng: &mut impl Rng) -> f64 {
        let start_modularity = partition.modularity();
        let mut new_modularity = start_modularity;

        self.node_order.clear();
        self.node_order.extend(0..partition.size());
        self.node_order.shuffle(rng);

        loop {
            let current_modularity = new_modularity;
            let mut moves = 0;

            for &node in &self.node_order {
                let old_community = partition.community(node);
                let degree = partition.graph.weighted_degree(node);

                partition.neighbor_communities(node);
                let weight_to_old = partition.neighbor_weights[old_community];
                partition.remove_node(node, old_community, weight_to_old);

                // Default is the former community, rejoined with weight 0.
                // Only a strictly better gain displaces the running best,
                // so equal candidates resolve to the earliest touched.
                let mut best_community = old_community;
                let mut best_weight = 0.0;
                let mut best_gain = 0.0;
                for &community in &partition.touched {
                    let weight = partition.neighbor_weights[community];
                    let gain = partition.gain(community, weight, degree);
                    if gain > best_gain {
                        best_community = community;
                        best_weight = weight;
                        best_gain = gain;
                    }
                }

                partition.insert_node(node, best_community, best_weight);

                if best_community != old_community {
                    moves += 1;
                }
            }

            new_modularity = partition.modularity();

            if moves == 0 || new_modularity - current_modularity <= self.min_improvement {
                break;
            }
        }

        new_modularity - start_modularity
    }
}
