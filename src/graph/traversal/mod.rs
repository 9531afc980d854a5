//! Ordered traversal: breadth-first and depth-first orders with parent trees.
//!
//! The public functions validate the start node, allocate the per-call
//! buffers, build the structural transpose when the traversal is undirected,
//! and hand off to the engines in [`bfs`] and [`dfs`]. Engines assume
//! validated input and never check bounds themselves.

pub(crate) mod bfs;
pub(crate) mod dfs;

use crate::error::{GraphError, Result};
use crate::graph::csr::CsrGraph;
use crate::graph::NULL_IDX;

fn check_start<W>(graph: &CsrGraph<W>, start: i32) -> Result<()> {
    let nodes = graph.node_count();
    if start < 0 || start as usize >= nodes {
        return Err(GraphError::StartOutOfRange { start, nodes });
    }
    Ok(())
}

/// Breadth-first discovery order and predecessor tree from `start`.
///
/// Returns `(order, predecessors)`: `order` holds the reached node ids in
/// discovery order (the start node first, unreached nodes absent);
/// `predecessors` has one entry per node, [`NULL_IDX`] for unreached nodes
/// and for the start node itself.
///
/// With `directed = false`, edges are followed in both directions (the
/// structural transpose is built internally).
///
/// The parent chain of any reached node follows a minimum-hop path back to
/// `start`; ties are broken by stored edge-list order, so repeated calls
/// yield identical outputs.
///
/// # Errors
///
/// [`GraphError::StartOutOfRange`] if `start` is not a node id.
pub fn breadth_first_order<W: Copy>(
    graph: &CsrGraph<W>,
    start: i32,
    directed: bool,
) -> Result<(Vec<i32>, Vec<i32>)> {
    check_start(graph, start)?;
    let n = graph.node_count();
    let mut node_list = vec![NULL_IDX; n];
    let mut predecessors = vec![NULL_IDX; n];

    let reached = if directed {
        bfs::breadth_first_directed(
            graph.indptr(),
            graph.indices(),
            start,
            &mut node_list,
            &mut predecessors,
        )
    } else {
        let transpose = graph.transpose();
        bfs::breadth_first_undirected(
            graph.indptr(),
            graph.indices(),
            transpose.indptr(),
            transpose.indices(),
            start,
            &mut node_list,
            &mut predecessors,
        )
    };

    node_list.truncate(reached);
    Ok((node_list, predecessors))
}

/// Depth-first discovery order and predecessor tree from `start`.
///
/// Same shape of result as [`breadth_first_order`], but depth-first: the walk
/// descends along the first unvisited neighbor in stored edge order
/// (rescanning each node's list from its beginning on every descent) and
/// backtracks when a node has none left. With `directed = false`, a node's
/// out-list is exhausted before its in-list is consulted.
///
/// # Errors
///
/// [`GraphError::StartOutOfRange`] if `start` is not a node id.
pub fn depth_first_order<W: Copy>(
    graph: &CsrGraph<W>,
    start: i32,
    directed: bool,
) -> Result<(Vec<i32>, Vec<i32>)> {
    check_start(graph, start)?;
    let n = graph.node_count();
    let mut node_list = vec![NULL_IDX; n];
    let mut predecessors = vec![NULL_IDX; n];

    let reached = if directed {
        dfs::depth_first_directed(
            graph.indptr(),
            graph.indices(),
            start,
            &mut node_list,
            &mut predecessors,
        )
    } else {
        let transpose = graph.transpose();
        dfs::depth_first_undirected(
            graph.indptr(),
            graph.indices(),
            transpose.indptr(),
            transpose.indices(),
            start,
            &mut node_list,
            &mut predecessors,
        )
    };

    node_list.truncate(reached);
    Ok((node_list, predecessors))
}
