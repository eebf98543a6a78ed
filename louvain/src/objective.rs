use crate::network::Graph;

/// Modularity of a labeling of `graph`, computed directly from the
/// adjacency: the fraction of weight inside communities minus the fraction
/// expected if edges were rewired at random preserving degrees. Labels need
/// not be contiguous; empty communities contribute nothing. A graph
/// without edges scores 0.
pub fn modularity(graph: &Graph, labels: &[usize]) -> f64 {
    assert_eq!(labels.len(), graph.nodes());

    let m2 = graph.total_weight();
    if m2 <= 0.0 {
        return 0.0;
    }

    let communities = labels.iter().max().map_or(0, |&label| label + 1);
    let mut internal = vec![0.0; communities];
    let mut total = vec![0.0; communities];

    for node in 0..graph.nodes() {
        let community = labels[node];
        total[community] += graph.weighted_degree(node);
        for (neighbor, weight) in graph.neighbors(node) {
            if labels[neighbor] == community {
                internal[community] += weight;
            }
        }
    }

    let mut q = 0.0;
    for community in 0..communities {
        if total[community] > 0.0 {
            q += internal[community] - total[community] * total[community] / m2;
        }
    }
    q / m2
}
