//! Depth-first engine.
//!
//! Fully iterative: the root-to-current path lives in an explicit stack
//! (`root_list`) and visitation in a flag array, so recursion depth never
//! touches the thread stack and graphs with millions of nodes are safe.
//!
//! On every descent the top node's edge list is rescanned from its beginning
//! for the first unvisited neighbor. The rescan is the behavioral contract:
//! it fixes the exact visitation order and tree shape. A per-node resume
//! cursor would visit the same reachable set in the same asymptotic best case
//! while avoiding the \(O(n \cdot m)\) dense-graph worst case, but it produces
//! a different (equally valid) tree, so it is deliberately not used here.

/// First neighbor of `pnode` in this edge list that is not yet flagged,
/// scanning from the beginning of the list.
#[inline]
fn first_unvisited(indptr: &[i32], indices: &[i32], pnode: i32, flag: &[bool]) -> Option<i32> {
    for i in indptr[pnode as usize] as usize..indptr[pnode as usize + 1] as usize {
        let cnode = indices[i];
        if !flag[cnode as usize] {
            return Some(cnode);
        }
    }
    None
}

/// Directed depth-first order from `head`.
///
/// `node_list` and `predecessors` must be length-n buffers filled with
/// [`NULL_IDX`]; `head` must be a valid node id. Returns the number of nodes
/// reached; `node_list[..returned]` is the discovery order.
///
/// **Time complexity**: \(O(n + m)\) best case, up to \(O(n \cdot m)\) on
/// dense graphs (see the module notes on the rescan policy).
pub(crate) fn depth_first_directed(
    indptr: &[i32],
    indices: &[i32],
    head: i32,
    node_list: &mut [i32],
    predecessors: &mut [i32],
) -> usize {
    let n = node_list.len();
    let mut root_list = vec![0i32; n];
    let mut flag = vec![false; n];

    node_list[0] = head;
    root_list[0] = head;
    flag[head as usize] = true;
    let mut i_root: isize = 0;
    let mut i_nl_end = 1usize;

    while i_root >= 0 {
        let pnode = root_list[i_root as usize];
        match first_unvisited(indptr, indices, pnode, &flag) {
            Some(cnode) => {
                i_root += 1;
                root_list[i_root as usize] = cnode;
                node_list[i_nl_end] = cnode;
                predecessors[cnode as usize] = pnode;
                flag[cnode as usize] = true;
                i_nl_end += 1;
                if i_nl_end == n {
                    break;
                }
            }
            None => i_root -= 1,
        }
    }

    i_nl_end
}

/// Undirected depth-first order from `head`.
///
/// Same contract as [`depth_first_directed`], plus the structural transpose.
/// The transpose list of a node is consulted only after its out-list yields
/// no unvisited neighbor.
pub(crate) fn depth_first_undirected(
    indptr1: &[i32],
    indices1: &[i32],
    indptr2: &[i32],
    indices2: &[i32],
    head: i32,
    node_list: &mut [i32],
    predecessors: &mut [i32],
) -> usize {
    let n = node_list.len();
    let mut root_list = vec![0i32; n];
    let mut flag = vec![false; n];

    node_list[0] = head;
    root_list[0] = head;
    flag[head as usize] = true;
    let mut i_root: isize = 0;
    let mut i_nl_end = 1usize;

    while i_root >= 0 {
        let pnode = root_list[i_root as usize];
        let child = first_unvisited(indptr1, indices1, pnode, &flag)
            .or_else(|| first_unvisited(indptr2, indices2, pnode, &flag));
        match child {
            Some(cnode) => {
                i_root += 1;
                root_list[i_root as usize] = cnode;
                node_list[i_nl_end] = cnode;
                predecessors[cnode as usize] = pnode;
                flag[cnode as usize] = true;
                i_nl_end += 1;
                if i_nl_end == n {
                    break;
                }
            }
            None => i_root -= 1,
        }
    }

    i_nl_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descends_along_first_unvisited_edge() {
        // 0 -> 1,2 ; 1 -> 3 ; 2 -> 3
        let indptr = [0, 2, 3, 4, 4];
        let indices = [1, 2, 3, 3];
        let mut node_list = [NULL_IDX; 4];
        let mut predecessors = [NULL_IDX; 4];

        let n = depth_first_directed(&indptr, &indices, 0, &mut node_list, &mut predecessors);

        assert_eq!(n, 4);
        // Descend 0 -> 1 -> 3, backtrack to 0, then take 2.
        assert_eq!(node_list, [0, 1, 3, 2]);
        assert_eq!(predecessors, [NULL_IDX, 0, 0, 1]);
    }

    #[test]
    fn rescan_restarts_at_list_head_after_backtracking() {
        // 0 -> {1, 2, 3}; 1 -> 2. Descending 0 -> 1 -> 2 then backtracking to
        // 0 must rescan 0's list from the start and pick 3 (not resume past 2).
        let indptr = [0, 3, 4, 4, 4];
        let indices = [1, 2, 3, 2];
        let mut node_list = [NULL_IDX; 4];
        let mut predecessors = [NULL_IDX; 4];

        let n = depth_first_directed(&indptr, &indices, 0, &mut node_list, &mut predecessors);

        assert_eq!(n, 4);
        assert_eq!(node_list, [0, 1, 2, 3]);
        assert_eq!(predecessors, [NULL_IDX, 0, 1, 0]);
    }

    #[test]
    fn undirected_prefers_out_edges() {
        // Storage: 1 -> 0, 0 -> 2. From 0, the out-edge to 2 wins over the
        // in-edge from 1.
        let indptr1 = [0, 1, 2, 2];
        let indices1 = [2, 0];
        let indptr2 = [0, 1, 1, 2];
        let indices2 = [1, 0];
        let mut node_list = [NULL_IDX; 3];
        let mut predecessors = [NULL_IDX; 3];

        let n = depth_first_undirected(
            &indptr1,
            &indices1,
            &indptr2,
            &indices2,
            0,
            &mut node_list,
            &mut predecessors,
        );

        assert_eq!(n, 3);
        assert_eq!(node_list, [0, 2, 1]);
        // 2 is a dead end, so the walk backtracks to 0 and takes its in-edge.
        assert_eq!(predecessors, [NULL_IDX, 0, 0]);
    }
}
