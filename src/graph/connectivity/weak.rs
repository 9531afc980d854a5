//! Weak (undirected) components via iterative flood fill.
//!
//! The explicit fill stack shares storage with the output label array: an
//! entry holding [`VOID`] is unlabeled and off-stack, a stacked entry holds
//! the link to the node beneath it ([`END`] at the bottom), and a popped
//! entry holds its final label. Links are node ids or `END` and labels are
//! non-negative, so neither can be mistaken for `VOID`.
//!
//! Both edge directions are scanned, which reconstructs undirected
//! reachability over a structurally directed CSR pair.

use crate::graph::connectivity::{END, VOID};

/// Labels every node with its weak component id; returns the component count.
///
/// `indptr2`/`indices2` must be the structural transpose of
/// `indptr1`/`indices1`. `labels` must have one entry per node; its incoming
/// contents are ignored. Component ids are assigned in the order their first
/// node is encountered by the outer scan over `0..n`.
///
/// **Time complexity**: \(O(n + m)\)
/// **Space complexity**: no allocation beyond `labels`
pub(crate) fn weakly_connected_components(
    indptr1: &[i32],
    indices1: &[i32],
    indptr2: &[i32],
    indices2: &[i32],
    labels: &mut [i32],
) -> i32 {
    let n = labels.len();
    labels.fill(VOID);
    let mut label: i32 = 0;

    for seed in 0..n {
        if labels[seed] != VOID {
            continue;
        }

        // Fill stack holding only the seed.
        let mut ss_head = seed as i32;
        labels[seed] = END;

        while ss_head != END {
            let v = ss_head as usize;
            ss_head = labels[v];
            labels[v] = label;

            for (indptr, indices) in [(indptr1, indices1), (indptr2, indices2)] {
                for i in indptr[v] as usize..indptr[v + 1] as usize {
                    let w = indices[i] as usize;
                    if labels[w] == VOID {
                        labels[w] = ss_head;
                        ss_head = w as i32;
                    }
                }
            }
        }

        label += 1;
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_ignored() {
        // 0 -> 1 and 2 -> 1: all weakly connected despite no directed path
        // from 0 to 2.
        let indptr1 = [0, 1, 1, 2];
        let indices1 = [1, 1];
        let indptr2 = [0, 0, 2, 2];
        let indices2 = [0, 2];
        let mut labels = [0i32; 3];

        let count =
            weakly_connected_components(&indptr1, &indices1, &indptr2, &indices2, &mut labels);

        assert_eq!(count, 1);
        assert_eq!(labels, [0, 0, 0]);
    }

    #[test]
    fn labels_follow_first_touch_order() {
        // Components {0, 2} (via 0 -> 2) and {1}.
        let indptr1 = [0, 1, 1, 1];
        let indices1 = [2];
        let indptr2 = [0, 0, 0, 1];
        let indices2 = [0];
        let mut labels = [0i32; 3];

        let count =
            weakly_connected_components(&indptr1, &indices1, &indptr2, &indices2, &mut labels);

        assert_eq!(count, 2);
        assert_eq!(labels, [0, 1, 0]);
    }

    #[test]
    fn isolated_nodes_get_their_own_labels() {
        let indptr = [0, 0, 0];
        let mut labels = [0i32; 2];
        let count = weakly_connected_components(&indptr, &[], &indptr, &[], &mut labels);
        assert_eq!(count, 2);
        assert_eq!(labels, [0, 1]);
    }
}
