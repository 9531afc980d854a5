//! Error types for CSR validation and traversal dispatch.
//!
//! Validation is front-loaded: [`crate::CsrGraph`] constructors reject
//! malformed storage, and the public dispatch functions reject out-of-range
//! start nodes and predecessor arrays. The traversal engines themselves never
//! validate; a [`GraphError`] is always produced before any traversal work.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// All error conditions this library can report.
///
/// Structural errors (`Indptr*`, `IndexOutOfBounds`, `DataLength`, `NotSquare`,
/// `TooMany*`) come from [`crate::CsrGraph`] construction. Dispatch errors
/// (`StartOutOfRange`, `InvalidConnection`, `Predecessor*`) come from the
/// public operations before any engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// `indptr` must have exactly `node_count + 1` entries and never be empty.
    #[error("indptr has {len} entries; expected at least 1")]
    IndptrLength {
        /// Actual `indptr` length.
        len: usize,
    },

    /// `indptr[0]` must be 0.
    #[error("indptr starts at {0}; must start at 0")]
    IndptrStart(i32),

    /// `indptr` must be monotonically non-decreasing.
    #[error("indptr decreases at position {pos}: {prev} > {next}")]
    IndptrNotMonotone {
        /// First index of the offending adjacent pair.
        pos: usize,
        /// Value at `pos`.
        prev: i32,
        /// Value at `pos + 1`.
        next: i32,
    },

    /// `indptr` must end at the edge count.
    #[error("indptr ends at {end} but there are {edges} edges")]
    IndptrEnd {
        /// Final `indptr` entry.
        end: i32,
        /// Length of `indices`.
        edges: usize,
    },

    /// Every entry of `indices` must name a node in `[0, node_count)`.
    #[error("edge {pos} points to node {node}, outside [0, {nodes})")]
    IndexOutOfBounds {
        /// Position within `indices`.
        pos: usize,
        /// The offending destination id.
        node: i32,
        /// Number of nodes in the graph.
        nodes: usize,
    },

    /// `data` must run parallel to `indices`.
    #[error("data has {len} entries for {edges} edges")]
    DataLength {
        /// Length of `data`.
        len: usize,
        /// Length of `indices`.
        edges: usize,
    },

    /// A dense adjacency matrix must be square.
    #[error("dense row {row} has {len} entries for a {nodes}-node matrix")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (the number of rows).
        nodes: usize,
    },

    /// Node ids are `i32`; larger graphs cannot be represented.
    #[error("graph with {0} nodes exceeds the i32 index range")]
    TooManyNodes(usize),

    /// Edge positions are `i32`; larger edge lists cannot be represented.
    #[error("graph with {0} edges exceeds the i32 index range")]
    TooManyEdges(usize),

    /// Traversal start node outside `[0, node_count)`.
    #[error("start node {start} out of range for a graph with {nodes} nodes")]
    StartOutOfRange {
        /// The requested start node.
        start: i32,
        /// Number of nodes in the graph.
        nodes: usize,
    },

    /// Unrecognized connection kind when parsing a [`crate::Connection`].
    #[error("connection must be \"weak\" or \"strong\", got {0:?}")]
    InvalidConnection(String),

    /// A predecessor array must have one entry per node.
    #[error("predecessor array has {len} entries for {nodes} nodes")]
    PredecessorLength {
        /// Actual array length.
        len: usize,
        /// Number of nodes in the graph.
        nodes: usize,
    },

    /// Predecessor entries must be valid node ids or [`crate::NULL_IDX`].
    #[error("predecessor of node {node} is {pred}, which is neither a node in [0, {nodes}) nor NULL_IDX")]
    PredecessorOutOfBounds {
        /// The node whose entry is invalid.
        node: usize,
        /// The offending predecessor value.
        pred: i32,
        /// Number of nodes in the graph.
        nodes: usize,
    },
}
