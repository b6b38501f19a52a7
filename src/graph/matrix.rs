//! Dense weight snapshot used inside the search loop.

use super::types::{EdgeWeights, NodeId};

/// Row-major `n x n` copy of a graph's weights.
///
/// Built once per search so the hot loop does an index instead of a hash
/// lookup. Absent edges and the diagonal hold `None`.
#[derive(Debug, Clone)]
pub struct WeightMatrix {
    n: usize,
    cells: Vec<Option<f64>>,
}

impl WeightMatrix {
    /// Copies every pairwise weight out of `source`.
    pub fn from_weights<W: EdgeWeights + ?Sized>(source: &W) -> Self {
        let n = source.node_count();
        let mut cells = vec![None; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = source.weight_of(NodeId::new(i), NodeId::new(j));
                cells[i * n + j] = w;
                cells[j * n + i] = w;
            }
        }
        Self { n, cells }
    }
}

impl EdgeWeights for WeightMatrix {
    fn node_count(&self) -> usize {
        self.n
    }

    #[inline]
    fn weight_of(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let (i, j) = (a.index(), b.index());
        if i >= self.n || j >= self.n {
            return None;
        }
        self.cells[i * self.n + j]
    }
}
