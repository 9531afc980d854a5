//! Spanning-forest materialization from predecessor arrays.
//!
//! A traversal's predecessor array describes a tree implicitly; these
//! functions turn it into an explicit CSR matrix whose only entries are the
//! tree edges `(predecessors[v], v)`, each carrying the weight of the first
//! matching edge in the original graph.

use num_traits::Zero;

use crate::error::{GraphError, Result};
use crate::graph::csr::CsrGraph;
use crate::graph::traversal::{breadth_first_order, depth_first_order};
use crate::graph::NULL_IDX;

/// Materializes the spanning forest described by `predecessors` over `graph`.
///
/// The result has one edge `(p, v)` per node `v` with predecessor
/// `p != NULL_IDX`. Its weight is the first stored weight of `(p, v)` in
/// `graph`, falling back to `(v, p)` when only the reverse direction is
/// stored (undirected traversals can adopt a parent through the transpose),
/// and to zero if neither edge exists.
///
/// # Errors
///
/// - [`GraphError::PredecessorLength`] if `predecessors` is not one entry per
///   node
/// - [`GraphError::PredecessorOutOfBounds`] if an entry is neither a node id
///   nor [`NULL_IDX`]
pub fn reconstruct_tree<W: Copy + Zero>(
    graph: &CsrGraph<W>,
    predecessors: &[i32],
) -> Result<CsrGraph<W>> {
    let n = graph.node_count();
    if predecessors.len() != n {
        return Err(GraphError::PredecessorLength {
            len: predecessors.len(),
            nodes: n,
        });
    }
    for (node, &pred) in predecessors.iter().enumerate() {
        if pred != NULL_IDX && (pred < 0 || pred as usize >= n) {
            return Err(GraphError::PredecessorOutOfBounds {
                node,
                pred,
                nodes: n,
            });
        }
    }

    // One edge per parented node, grouped by parent via counting sort. The
    // inner scan visits children in ascending id order, so each parent's
    // edge list comes out sorted.
    let mut indptr = vec![0i32; n + 1];
    for &pred in predecessors {
        if pred != NULL_IDX {
            indptr[pred as usize + 1] += 1;
        }
    }
    for i in 0..n {
        indptr[i + 1] += indptr[i];
    }

    let m = indptr[n] as usize;
    let mut indices = vec![0i32; m];
    let mut data = vec![W::zero(); m];
    let mut cursor: Vec<i32> = indptr[..n].to_vec();
    for (node, &pred) in predecessors.iter().enumerate() {
        if pred == NULL_IDX {
            continue;
        }
        let child = node as i32;
        let dst = cursor[pred as usize] as usize;
        indices[dst] = child;
        data[dst] = graph
            .edge_weight(pred, child)
            .or_else(|| graph.edge_weight(child, pred))
            .unwrap_or_else(W::zero);
        cursor[pred as usize] += 1;
    }

    CsrGraph::from_parts(indptr, indices, data)
}

/// Breadth-first spanning tree from `start`: [`breadth_first_order`] composed
/// with [`reconstruct_tree`].
///
/// The tree connects every node reachable from `start` along a minimum-hop
/// path.
///
/// # Errors
///
/// [`GraphError::StartOutOfRange`] if `start` is not a node id.
pub fn breadth_first_tree<W: Copy + Zero>(
    graph: &CsrGraph<W>,
    start: i32,
    directed: bool,
) -> Result<CsrGraph<W>> {
    let (_, predecessors) = breadth_first_order(graph, start, directed)?;
    reconstruct_tree(graph, &predecessors)
}

/// Depth-first spanning tree from `start`: [`depth_first_order`] composed
/// with [`reconstruct_tree`].
///
/// # Errors
///
/// [`GraphError::StartOutOfRange`] if `start` is not a node id.
pub fn depth_first_tree<W: Copy + Zero>(
    graph: &CsrGraph<W>,
    start: i32,
    directed: bool,
) -> Result<CsrGraph<W>> {
    let (_, predecessors) = depth_first_order(graph, start, directed)?;
    reconstruct_tree(graph, &predecessors)
}
