use crate::error::Error;
use num_traits::cast::AsPrimitive;
use std::slice::Iter;

pub trait IndexTrait: AsPrimitive<usize> + TryFrom<usize> {}

impl IndexTrait for usize {}
impl IndexTrait for u32 {}

/// Compressed sparse row adjacency. Each node owns the half-open range
/// `offsets[node]..offsets[node + 1]` of the flat neighbor sequence. A
/// mirrored edge occupies one entry at each endpoint; a self-loop occupies
/// a single entry. `weights` of `None` means every entry has weight 1.
#[derive(Debug)]
pub struct Csr<Ix = usize>
where
    Ix: IndexTrait,
{
    pub(crate) offsets: Vec<usize>,
    pub(crate) neighbors: Vec<Ix>,
    pub(crate) weights: Option<Vec<f64>>,
    pub(crate) total_weight: f64,
}

pub struct Neighbors<'a, Ix = usize>
where
    Ix: IndexTrait,
{
    ids: Iter<'a, Ix>,
    weights: Option<Iter<'a, f64>>,
}

impl<Ix> Iterator for Neighbors<'_, Ix>
where
    Ix: IndexTrait,
{
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next()?;
        let weight = match &mut self.weights {
            Some(weights) => *weights.next()?,
            None => 1.0,
        };
        Some((id.as_(), weight))
    }
}

impl<Ix> Csr<Ix>
where
    Ix: IndexTrait,
{
    /// Validates the raw triple and computes the total weight: the sum of
    /// every directed entry, so twice each undirected edge and each
    /// self-loop occurrence once.
    pub fn from_parts(offsets: Vec<usize>, neighbors: Vec<Ix>, weights: Option<Vec<f64>>) -> Result<Self, Error> {
        if offsets.is_empty() {
            return Err(Error::EmptyOffsets);
        }
        if offsets[0] != 0 {
            return Err(Error::FirstOffset { found: offsets[0] });
        }
        for index in 1..offsets.len() {
            if offsets[index] < offsets[index - 1] {
                return Err(Error::NonMonotonicOffsets { index });
            }
        }
        let nodes = offsets.len() - 1;
        if Ix::try_from(nodes).is_err() {
            return Err(Error::TooManyNodes { nodes });
        }
        if neighbors.len() != offsets[nodes] {
            return Err(Error::NeighborRangeMismatch {
                expected: offsets[nodes],
                found: neighbors.len(),
            });
        }
        for (position, &neighbor) in neighbors.iter().enumerate() {
            if neighbor.as_() >= nodes {
                return Err(Error::NeighborOutOfRange {
                    position,
                    neighbor: neighbor.as_(),
                    nodes,
                });
            }
        }
        if let Some(weights) = &weights {
            if weights.len() != neighbors.len() {
                return Err(Error::WeightLengthMismatch {
                    weights: weights.len(),
                    neighbors: neighbors.len(),
                });
            }
        }

        let total_weight = match &weights {
            Some(weights) => weights.iter().sum(),
            None => neighbors.len() as f64,
        };

        Ok(Csr {
            offsets,
            neighbors,
            weights,
            total_weight,
        })
    }

    pub fn nodes(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of directed adjacency entries (twice the undirected edge
    /// count, plus one per self-loop).
    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Iterator over `(neighbor id, edge weight)` for all entries of `node`.
    pub fn neighbors(&self, node: usize) -> Neighbors<'_, Ix> {
        let range = self.offsets[node]..self.offsets[node + 1];
        Neighbors {
            ids: self.neighbors[range.clone()].iter(),
            weights: self.weights.as_ref().map(|weights| weights[range].iter()),
        }
    }

    pub fn weighted_degree(&self, node: usize) -> f64 {
        let range = self.offsets[node]..self.offsets[node + 1];
        match &self.weights {
            Some(weights) => weights[range].iter().sum(),
            None => (self.offsets[node + 1] - self.offsets[node]) as f64,
        }
    }

    /// Weight of the first self-loop entry of `node`, 0 if there is none.
    pub fn self_loop_weight(&self, node: usize) -> f64 {
        for (neighbor, weight) in self.neighbors(node) {
            if neighbor == node {
                return weight;
            }
        }
        0.0
    }
}
