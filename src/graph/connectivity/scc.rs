//! Strongly connected components: Pearce's iterative variant of Tarjan.
//!
//! The usual recursive Tarjan is unusable at the scale this crate targets,
//! so the depth-first exploration is simulated with a doubly linked stack
//! threaded through two i32 arrays (`stack_f` down-links, `stack_b`
//! up-links). Two storage-sharing tricks keep the footprint at two O(n)
//! buffers beyond the output:
//!
//! - lowlinks live in the output `labels` buffer (a node needs its lowlink
//!   only until it is labeled, and each node is labeled exactly once);
//! - the confirmed-component stack reuses `stack_f` as its link storage (a
//!   node joins it only after leaving the exploration stack).
//!
//! Component labels are assigned counting *down* from `n - 1` while
//! discovery indices count up from 0; live lowlinks always stay below every
//! assigned label (the discovery counter is decremented once per labeled
//! node), so the two value ranges never collide inside the shared buffer.
//! A final pass flips labels to count up from 0.

use crate::graph::connectivity::{END, VOID};

/// Labels every node with its strong component id; returns the component
/// count.
///
/// `labels` must have one entry per node; its incoming contents are ignored.
/// On return every entry is a label in `[0, count)`, numbered in the order
/// the components were completed.
///
/// **Time complexity**: \(O(n + m)\)
/// **Space complexity**: two \(O(n)\) i32 buffers beyond `labels`
pub(crate) fn strongly_connected_components(
    indptr: &[i32],
    indices: &[i32],
    labels: &mut [i32],
) -> i32 {
    let n = labels.len();
    let mut stack_f = vec![VOID; n];
    let mut stack_b = vec![VOID; n];

    // VOID doubles as "unvisited"; a visited node holds its lowlink until it
    // is labeled.
    labels.fill(VOID);
    let mut index: i32 = 0;
    let mut ss_head: i32 = END;
    let mut label: i32 = n as i32 - 1;

    for root in 0..n {
        if labels[root] != VOID {
            continue;
        }

        // Exploration stack holding only the root.
        let mut stack_head = root as i32;
        stack_f[root] = END;
        stack_b[root] = END;

        while stack_head != END {
            let v = stack_head;
            if labels[v as usize] == VOID {
                // First visit: take the next discovery index, then stage every
                // unvisited successor on the exploration stack. A successor
                // that is already stacked is excised and reinserted at the
                // top, so it will be explored in its most recent context.
                labels[v as usize] = index;
                index += 1;

                for i in indptr[v as usize] as usize..indptr[v as usize + 1] as usize {
                    let w = indices[i];
                    if labels[w as usize] != VOID {
                        continue;
                    }
                    if w == stack_head {
                        // Duplicate edge: already at the top.
                        continue;
                    }
                    if stack_f[w as usize] != VOID {
                        // In the stack: unlink before re-pushing. Only an
                        // unvisited node can be here, so `stack_f` still
                        // holds its down-link (not a confirmed-stack link).
                        let f = stack_f[w as usize];
                        let b = stack_b[w as usize];
                        if b != END {
                            stack_f[b as usize] = f;
                        }
                        if f != END {
                            stack_b[f as usize] = b;
                        }
                    }
                    stack_f[w as usize] = stack_head;
                    stack_b[w as usize] = END;
                    stack_b[stack_head as usize] = w;
                    stack_head = w;
                }
            } else {
                // Second visit: every successor has been explored. Pop, then
                // settle the lowlink from the successors' current values.
                stack_head = stack_f[v as usize];
                if stack_head >= 0 {
                    stack_b[stack_head as usize] = END;
                }

                let mut low_v = labels[v as usize];
                let mut is_root = true;
                for i in indptr[v as usize] as usize..indptr[v as usize + 1] as usize {
                    let low_w = labels[indices[i] as usize];
                    if low_w < low_v {
                        low_v = low_w;
                        is_root = false;
                    }
                }
                labels[v as usize] = low_v;

                if is_root {
                    // v closes a component: drain every confirmed node whose
                    // lowlink is at or above v's, then retire their discovery
                    // indices so live lowlinks keep clear of assigned labels.
                    index -= 1;
                    while ss_head != END && labels[v as usize] <= labels[ss_head as usize] {
                        let w = ss_head;
                        ss_head = stack_f[w as usize];
                        labels[w as usize] = label;
                        index -= 1;
                    }
                    labels[v as usize] = label;
                    label -= 1;
                } else {
                    // Confirmed but not a root: an ancestor will label it.
                    // `stack_f[v]` is free again, so it carries the
                    // confirmed-stack link.
                    stack_f[v as usize] = ss_head;
                    ss_head = v;
                }
            }
        }
    }

    // Labels counted down from n - 1; flip them to count up from 0.
    for l in labels.iter_mut() {
        *l = (n as i32 - 1) - *l;
    }
    (n as i32 - 1) - label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(indptr: &[i32], indices: &[i32], n: usize) -> (i32, Vec<i32>) {
        let mut labels = vec![0i32; n];
        let count = strongly_connected_components(indptr, indices, &mut labels);
        (count, labels)
    }

    #[test]
    fn chain_gives_singleton_components_in_completion_order() {
        // 0 -> 1 -> 2: deepest node's component completes first.
        let (count, labels) = run(&[0, 1, 2, 2], &[1, 2], 3);
        assert_eq!(count, 3);
        assert_eq!(labels, vec![2, 1, 0]);
    }

    #[test]
    fn cycle_collapses_to_one_component() {
        let (count, labels) = run(&[0, 1, 2, 3], &[1, 2, 0], 3);
        assert_eq!(count, 1);
        assert_eq!(labels, vec![0, 0, 0]);
    }

    #[test]
    fn two_cycles_with_a_bridge() {
        // {0,1} <- bridge - {2,3}: 0 <-> 1, 2 <-> 3, 1 -> 2.
        let (count, labels) = run(&[0, 1, 3, 4, 5], &[1, 0, 2, 3, 2], 4);
        assert_eq!(count, 2);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
        // The downstream cycle completes first.
        assert_eq!(labels[2], 0);
        assert_eq!(labels[0], 1);
    }

    #[test]
    fn self_loops_and_duplicate_edges_are_harmless() {
        // 0 -> 0, 0 -> 1, 0 -> 1 (duplicate), 1 -> 1.
        let (count, labels) = run(&[0, 3, 4], &[0, 1, 1, 1], 2);
        assert_eq!(count, 2);
        assert_ne!(labels[0], labels[1]);
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        let (count, labels) = run(&[0], &[], 0);
        assert_eq!(count, 0);
        assert!(labels.is_empty());

        let (count, labels) = run(&[0, 0, 0, 0], &[], 3);
        assert_eq!(count, 3);
        assert_eq!(labels, vec![0, 1, 2]);
    }
}
