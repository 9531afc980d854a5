//! Validated compressed sparse row storage.
//!
//! The layout is the classic CSR pair plus a parallel weight array:
//! - `indptr`: `Vec<i32>` of length `n + 1`, monotone, `indptr[0] == 0`
//! - `indices`: `Vec<i32>`, one destination node id per edge
//! - `data`: `Vec<W>`, one weight per edge
//!
//! Every constructor establishes (or checks) these invariants, so the
//! traversal engines can index without validation. Node and edge counts are
//! bounded by `i32::MAX`; constructors reject anything larger.

use core::fmt;
use core::ops::Range;

use num_traits::Zero;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GraphError, Result};

/// A validated CSR adjacency matrix with edge weights of type `W`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_parts` | \(O(n + m)\) | Full structural validation |
/// | `from_dense` | \(O(n^2)\) | Zero entries mean "no edge" |
/// | `from_edges` | \(O(m \log m)\) | Stable within a source node |
/// | `neighbors` | \(O(1)\) | Iterator over the out-list |
/// | `out_degree` | \(O(1)\) | |
/// | `edge_weight` | \(O(\text{out-degree})\) | First matching edge |
/// | `transpose` | \(O(n + m)\) | Counting sort |
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph<W = f64> {
    node_count: usize,
    indptr: Vec<i32>,
    indices: Vec<i32>,
    data: Vec<W>,
}

impl<W> CsrGraph<W> {
    /// Builds a graph from raw CSR arrays, checking every structural
    /// invariant.
    ///
    /// # Errors
    ///
    /// - [`GraphError::IndptrLength`] if `indptr` is empty
    /// - [`GraphError::TooManyNodes`] / [`GraphError::TooManyEdges`] if counts
    ///   exceed the `i32` range
    /// - [`GraphError::IndptrStart`] / [`GraphError::IndptrNotMonotone`] /
    ///   [`GraphError::IndptrEnd`] for an ill-formed offset array
    /// - [`GraphError::IndexOutOfBounds`] for an edge to a nonexistent node
    /// - [`GraphError::DataLength`] if `data` does not run parallel to
    ///   `indices`
    pub fn from_parts(indptr: Vec<i32>, indices: Vec<i32>, data: Vec<W>) -> Result<Self> {
        if indptr.is_empty() {
            return Err(GraphError::IndptrLength { len: 0 });
        }
        let node_count = indptr.len() - 1;
        if node_count > i32::MAX as usize {
            return Err(GraphError::TooManyNodes(node_count));
        }
        if indices.len() > i32::MAX as usize {
            return Err(GraphError::TooManyEdges(indices.len()));
        }
        if indptr[0] != 0 {
            return Err(GraphError::IndptrStart(indptr[0]));
        }
        for (pos, w) in indptr.windows(2).enumerate() {
            if w[0] > w[1] {
                return Err(GraphError::IndptrNotMonotone {
                    pos,
                    prev: w[0],
                    next: w[1],
                });
            }
        }
        let end = indptr[node_count];
        if end as usize != indices.len() {
            return Err(GraphError::IndptrEnd {
                end,
                edges: indices.len(),
            });
        }
        for (pos, &node) in indices.iter().enumerate() {
            if node < 0 || node as usize >= node_count {
                return Err(GraphError::IndexOutOfBounds {
                    pos,
                    node,
                    nodes: node_count,
                });
            }
        }
        if data.len() != indices.len() {
            return Err(GraphError::DataLength {
                len: data.len(),
                edges: indices.len(),
            });
        }
        Ok(Self {
            node_count,
            indptr,
            indices,
            data,
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of stored edges (multi-edges count individually).
    pub fn edge_count(&self) -> usize {
        self.indices.len()
    }

    /// The offset array delimiting each node's edge-list slice.
    pub fn indptr(&self) -> &[i32] {
        &self.indptr
    }

    /// The destination node id of every edge, grouped by source.
    pub fn indices(&self) -> &[i32] {
        &self.indices
    }

    /// The weight of every edge, parallel to [`indices`](Self::indices).
    pub fn data(&self) -> &[W] {
        &self.data
    }

    /// Out-degree of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node id.
    pub fn out_degree(&self, node: i32) -> usize {
        self.row_range(node).len()
    }

    /// Returns the out-neighbors of `node` in stored edge order.
    ///
    /// This returns an iterator to avoid allocating a `Vec`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node id.
    pub fn neighbors(&self, node: i32) -> impl Iterator<Item = i32> + '_ {
        self.indices[self.row_range(node)].iter().copied()
    }

    pub(crate) fn row_range(&self, node: i32) -> Range<usize> {
        assert!(
            node >= 0 && (node as usize) < self.node_count,
            "node {node} out of bounds for n={}",
            self.node_count
        );
        self.indptr[node as usize] as usize..self.indptr[node as usize + 1] as usize
    }
}

impl<W: Copy> CsrGraph<W> {
    /// Builds a graph from an edge list.
    ///
    /// Edges are grouped by source; the relative order of a node's edges
    /// follows their order in `edges` (stable), which in turn fixes traversal
    /// tie-breaking.
    ///
    /// # Errors
    ///
    /// Rejects node counts outside the `i32` range and edges with an endpoint
    /// outside `[0, n)`.
    pub fn from_edges(n: usize, edges: &[(i32, i32, W)]) -> Result<Self> {
        if n > i32::MAX as usize {
            return Err(GraphError::TooManyNodes(n));
        }
        if edges.len() > i32::MAX as usize {
            return Err(GraphError::TooManyEdges(edges.len()));
        }
        for (pos, &(u, v, _)) in edges.iter().enumerate() {
            for node in [u, v] {
                if node < 0 || node as usize >= n {
                    return Err(GraphError::IndexOutOfBounds { pos, node, nodes: n });
                }
            }
        }

        let mut order: Vec<usize> = (0..edges.len()).collect();
        order.sort_by_key(|&i| edges[i].0);

        let mut indptr = vec![0i32; n + 1];
        for &(u, _, _) in edges {
            indptr[u as usize + 1] += 1;
        }
        for i in 0..n {
            indptr[i + 1] += indptr[i];
        }

        let mut indices = Vec::with_capacity(edges.len());
        let mut data = Vec::with_capacity(edges.len());
        for &i in &order {
            indices.push(edges[i].1);
            data.push(edges[i].2);
        }

        Ok(Self {
            node_count: n,
            indptr,
            indices,
            data,
        })
    }

    /// First stored weight of edge `(u, v)`, or `None` if no such edge exists.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a valid node id.
    pub fn edge_weight(&self, u: i32, v: i32) -> Option<W> {
        let range = self.row_range(u);
        for i in range {
            if self.indices[i] == v {
                return Some(self.data[i]);
            }
        }
        None
    }

    /// Structural transpose: edge `(u, v, w)` becomes `(v, u, w)`.
    ///
    /// Counting sort over destinations; edges of a transposed node appear in
    /// source-id order, matching the storage convention of the original.
    pub fn transpose(&self) -> Self {
        let n = self.node_count;
        let m = self.indices.len();

        let mut indptr = vec![0i32; n + 1];
        for &v in &self.indices {
            indptr[v as usize + 1] += 1;
        }
        for i in 0..n {
            indptr[i + 1] += indptr[i];
        }

        // Overwritten in full below; cloning just supplies initialized storage.
        let mut indices = vec![0i32; m];
        let mut data = self.data.clone();
        let mut cursor: Vec<i32> = indptr[..n].to_vec();
        for u in 0..n {
            for i in self.indptr[u] as usize..self.indptr[u + 1] as usize {
                let v = self.indices[i] as usize;
                let dst = cursor[v] as usize;
                indices[dst] = u as i32;
                data[dst] = self.data[i];
                cursor[v] += 1;
            }
        }

        Self {
            node_count: n,
            indptr,
            indices,
            data,
        }
    }
}

impl<W: Zero + PartialEq + Copy> CsrGraph<W> {
    /// Builds a graph from a dense adjacency matrix; zero entries mean
    /// "no edge".
    ///
    /// # Errors
    ///
    /// Rejects non-square input ([`GraphError::NotSquare`]) and matrices
    /// outside the `i32` index range.
    pub fn from_dense(rows: &[Vec<W>]) -> Result<Self> {
        let n = rows.len();
        let mut indptr = Vec::with_capacity(n + 1);
        indptr.push(0i32);
        let mut indices = Vec::new();
        let mut data = Vec::new();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: entries.len(),
                    nodes: n,
                });
            }
            for (v, &w) in entries.iter().enumerate() {
                if w != W::zero() {
                    if indices.len() == i32::MAX as usize {
                        return Err(GraphError::TooManyEdges(indices.len() + 1));
                    }
                    indices.push(v as i32);
                    data.push(w);
                }
            }
            indptr.push(indices.len() as i32);
        }
        Self::from_parts(indptr, indices, data)
    }
}

impl<W: Zero + Copy + core::ops::AddAssign> CsrGraph<W> {
    /// Expands the graph to a dense adjacency matrix, summing multi-edges.
    ///
    /// Intended for inspection of small graphs; allocates \(O(n^2)\).
    pub fn to_dense(&self) -> Vec<Vec<W>> {
        let n = self.node_count;
        let mut out = vec![vec![W::zero(); n]; n];
        for u in 0..n {
            for i in self.indptr[u] as usize..self.indptr[u + 1] as usize {
                out[u][self.indices[i] as usize] += self.data[i];
            }
        }
        out
    }
}

impl<W> fmt::Display for CsrGraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CsrGraph({} nodes, {} edges)",
            self.node_count,
            self.indices.len()
        )
    }
}

// Serialization carries the three storage arrays; deserialization re-runs the
// full structural validation so a decoded graph upholds the same invariants
// as a constructed one.

#[derive(Serialize)]
struct RawCsrRef<'a, W> {
    indptr: &'a [i32],
    indices: &'a [i32],
    data: &'a [W],
}

#[derive(Deserialize)]
struct RawCsr<W> {
    indptr: Vec<i32>,
    indices: Vec<i32>,
    data: Vec<W>,
}

impl<W: Serialize> Serialize for CsrGraph<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        RawCsrRef {
            indptr: &self.indptr,
            indices: &self.indices,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de, W: Deserialize<'de>> Deserialize<'de> for CsrGraph<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let raw = RawCsr::deserialize(deserializer)?;
        Self::from_parts(raw.indptr, raw.indices, raw.data).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_accepts_well_formed_csr() {
        let g = CsrGraph::from_parts(vec![0, 2, 3, 3], vec![1, 2, 0], vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(g.out_degree(2), 0);
    }

    #[test]
    fn from_parts_rejects_bad_indptr() {
        assert_eq!(
            CsrGraph::<f64>::from_parts(vec![], vec![], vec![]),
            Err(GraphError::IndptrLength { len: 0 })
        );
        assert_eq!(
            CsrGraph::<f64>::from_parts(vec![1, 1], vec![], vec![]),
            Err(GraphError::IndptrStart(1))
        );
        assert_eq!(
            CsrGraph::<f64>::from_parts(vec![0, 2, 1], vec![0], vec![1.0]),
            Err(GraphError::IndptrNotMonotone {
                pos: 1,
                prev: 2,
                next: 1
            })
        );
        assert_eq!(
            CsrGraph::<f64>::from_parts(vec![0, 1], vec![], vec![]),
            Err(GraphError::IndptrEnd { end: 1, edges: 0 })
        );
    }

    #[test]
    fn from_parts_rejects_bad_edges() {
        assert_eq!(
            CsrGraph::from_parts(vec![0, 1], vec![5], vec![1.0]),
            Err(GraphError::IndexOutOfBounds {
                pos: 0,
                node: 5,
                nodes: 1
            })
        );
        assert_eq!(
            CsrGraph::from_parts(vec![0, 1, 1], vec![1], vec![1.0, 2.0]),
            Err(GraphError::DataLength { len: 2, edges: 1 })
        );
    }

    #[test]
    fn dense_round_trip() {
        let dense = vec![
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.0, 0.0],
            vec![3.0, 0.0, 4.0],
        ];
        let g = CsrGraph::from_dense(&dense).unwrap();
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.to_dense(), dense);
    }

    #[test]
    fn from_edges_groups_by_source_stably() {
        let g = CsrGraph::from_edges(3, &[(1, 0, 1.0), (0, 2, 2.0), (0, 1, 3.0)]).unwrap();
        // Node 0's edges keep input order: 2 before 1.
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(g.edge_weight(0, 1), Some(3.0));
        assert_eq!(g.edge_weight(2, 0), None);
    }

    #[test]
    fn transpose_reverses_every_edge() {
        let g = CsrGraph::from_dense(&[
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 2.0],
            vec![3.0, 0.0, 0.0],
        ])
        .unwrap();
        let t = g.transpose();
        assert_eq!(t.edge_weight(1, 0), Some(1.0));
        assert_eq!(t.edge_weight(2, 1), Some(2.0));
        assert_eq!(t.edge_weight(0, 2), Some(3.0));
        assert_eq!(t.transpose(), g);
    }

    #[test]
    fn empty_graph_is_fine() {
        let g = CsrGraph::<f64>::from_parts(vec![0], vec![], vec![]).unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }
}
