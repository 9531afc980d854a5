//! CSR graph storage and the traversal/partitioning engines.
//!
//! The module is organized by concern:
//! - `csr`: validated compressed sparse row storage
//! - `traversal`: breadth-first and depth-first orders with parent trees
//! - `connectivity`: weak and strong component labeling
//! - `tree`: spanning-forest materialization from predecessor arrays

pub mod connectivity;
pub mod csr;
pub mod traversal;
pub mod tree;

// Re-export commonly used items from submodules
pub use connectivity::{connected_components, Connection};
pub use csr::CsrGraph;
pub use traversal::{breadth_first_order, depth_first_order};
pub use tree::{breadth_first_tree, depth_first_tree, reconstruct_tree};

/// Sentinel marking "no predecessor" / "unvisited" in predecessor arrays.
///
/// The literal value `-9999` is part of the observable contract: callers may
/// compare against it directly. It is never a valid node id or component
/// label.
pub const NULL_IDX: i32 = -9999;
