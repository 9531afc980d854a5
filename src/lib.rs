//! # `csgraph` - Connectivity and ordered traversal for CSR graphs
//!
//! Analysis of sparse graphs stored in compressed sparse row (CSR) form:
//! connectivity partitioning (weak components via flood fill, strong components
//! via an iterative Tarjan variant) and deterministic ordered traversal
//! (breadth-first and depth-first) with parent-tree reconstruction.
//!
//! ## Design
//!
//! - **No recursion anywhere**: both depth-first engines simulate the call
//!   stack with explicit index arrays, so graphs with millions of nodes cannot
//!   overflow the thread stack.
//! - **Sentinel-based outputs**: predecessor and label arrays use the reserved
//!   value [`NULL_IDX`] (`-9999`) for "no parent" / "unvisited". The exact
//!   value is part of the public contract.
//! - **Validate once, traverse fast**: all structural validation happens in
//!   [`CsrGraph`] constructors and the public dispatch functions. The engines
//!   themselves assume well-formed input and perform no bounds validation.
//! - **Deterministic**: neighbor visitation follows stored edge-list order, so
//!   repeated calls on identical input produce identical outputs.
//!
//! ## Example
//!
//! ```rust
//! use csgraph::{breadth_first_order, CsrGraph, NULL_IDX};
//!
//! // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 0, 2 -> 3
//! let graph = CsrGraph::from_dense(&[
//!     vec![0.0, 1.0, 2.0, 0.0],
//!     vec![0.0, 0.0, 0.0, 1.0],
//!     vec![2.0, 0.0, 0.0, 3.0],
//!     vec![0.0, 0.0, 0.0, 0.0],
//! ])
//! .unwrap();
//!
//! let (order, predecessors) = breadth_first_order(&graph, 0, true).unwrap();
//! assert_eq!(order, vec![0, 1, 2, 3]);
//! assert_eq!(predecessors, vec![NULL_IDX, 0, 0, 1]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
// Node ids are i32 throughout (constructors reject graphs that would not fit),
// so index/length conversions between i32 and usize are pervasive and checked
// once at the boundary rather than at every cast site.
#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::connectivity::{connected_components, Connection};
pub use graph::csr::CsrGraph;
pub use graph::traversal::{breadth_first_order, depth_first_order};
pub use graph::tree::{breadth_first_tree, depth_first_tree, reconstruct_tree};
pub use graph::NULL_IDX;

// Sentinel sanity: the public sentinel and the engines' internal void markers
// must never be valid node ids, and must never collide with each other.
const _: () = {
    assert!(NULL_IDX < 0);
    assert!(graph::connectivity::VOID < 0);
    assert!(graph::connectivity::END < 0);
    assert!(graph::connectivity::VOID != graph::connectivity::END);
    assert!(graph::connectivity::VOID != NULL_IDX);
    assert!(graph::connectivity::END != NULL_IDX);
};
