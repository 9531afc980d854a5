//! Breadth-first engine.
//!
//! The output node-order buffer doubles as the array-backed FIFO: a
//! "processed" cursor and a "frontier-end" cursor walk the same buffer, so
//! the frontier costs no storage beyond the output itself. A neighbor is
//! enqueued only while its predecessor slot still holds the unvisited
//! sentinel, which makes the predecessor array the visited set as well.
//!
//! The produced tree is the minimum-hop spanning tree of the reachable set;
//! ties are broken by stored edge-list order.

use crate::graph::NULL_IDX;

/// Directed breadth-first order from `head`.
///
/// `node_list` and `predecessors` must be length-n buffers filled with
/// [`NULL_IDX`]; `head` must be a valid node id. Returns the number of nodes
/// reached; `node_list[..returned]` is the discovery order.
///
/// **Time complexity**: \(O(n + m)\)
pub(crate) fn breadth_first_directed(
    indptr: &[i32],
    indices: &[i32],
    head: i32,
    node_list: &mut [i32],
    predecessors: &mut [i32],
) -> usize {
    node_list[0] = head;
    let mut i_nl = 0usize;
    let mut i_nl_end = 1usize;

    while i_nl < i_nl_end {
        let pnode = node_list[i_nl];
        for i in indptr[pnode as usize] as usize..indptr[pnode as usize + 1] as usize {
            let cnode = indices[i];
            if cnode == head {
                continue;
            }
            if predecessors[cnode as usize] == NULL_IDX {
                predecessors[cnode as usize] = pnode;
                node_list[i_nl_end] = cnode;
                i_nl_end += 1;
            }
        }
        i_nl += 1;
    }

    i_nl_end
}

/// Undirected breadth-first order from `head`.
///
/// Same contract as [`breadth_first_directed`], plus the structural transpose
/// (`indptr2`/`indices2`). Each node's out-list is scanned before its in-list,
/// which fixes parent tie-breaking between the two directions.
///
/// **Time complexity**: \(O(n + m)\)
pub(crate) fn breadth_first_undirected(
    indptr1: &[i32],
    indices1: &[i32],
    indptr2: &[i32],
    indices2: &[i32],
    head: i32,
    node_list: &mut [i32],
    predecessors: &mut [i32],
) -> usize {
    node_list[0] = head;
    let mut i_nl = 0usize;
    let mut i_nl_end = 1usize;

    while i_nl < i_nl_end {
        let pnode = node_list[i_nl];
        for (indptr, indices) in [(indptr1, indices1), (indptr2, indices2)] {
            for i in indptr[pnode as usize] as usize..indptr[pnode as usize + 1] as usize {
                let cnode = indices[i];
                if cnode == head {
                    continue;
                }
                if predecessors[cnode as usize] == NULL_IDX {
                    predecessors[cnode as usize] = pnode;
                    node_list[i_nl_end] = cnode;
                    i_nl_end += 1;
                }
            }
        }
        i_nl += 1;
    }

    i_nl_end
}
