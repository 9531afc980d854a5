//! Connectivity partitioning: weak and strong components.
//!
//! [`connected_components`] dispatches to one of two engines: the undirected
//! flood fill in [`weak`] or the iterative strongly-connected-components
//! search in [`scc`]. Both label every node, so no sentinel survives in the
//! output.

pub(crate) mod scc;
pub(crate) mod weak;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::csr::CsrGraph;

/// Internal void marker: "unvisited" / "unlabeled and off-stack".
pub(crate) const VOID: i32 = -1;
/// Internal end-of-stack marker for the array-threaded stacks.
pub(crate) const END: i32 = -2;

/// Which notion of connectivity [`connected_components`] partitions by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connection {
    /// Two nodes share a component iff an undirected path connects them.
    Weak,
    /// Two nodes share a component iff each reaches the other along directed
    /// edges.
    Strong,
}

impl Connection {
    /// The canonical string form, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Connection::Weak => "weak",
            Connection::Strong => "strong",
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connection {
    type Err = GraphError;

    /// Parses `"weak"` or `"strong"`, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidConnection`] for anything else; callers holding a
    /// string parse it before any traversal work can begin.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("weak") {
            Ok(Connection::Weak)
        } else if s.eq_ignore_ascii_case("strong") {
            Ok(Connection::Strong)
        } else {
            Err(GraphError::InvalidConnection(s.to_owned()))
        }
    }
}

/// Partitions the graph's nodes into connected components.
///
/// Returns `(count, labels)`: `labels` has one entry per node, each a
/// component id in `[0, count)`.
///
/// `connection = Weak` forces undirected treatment regardless of `directed`;
/// so does `directed = false` (mutual reachability without direction is plain
/// reachability, so `Strong` degenerates to the weak engine). Only
/// `directed = true` with `connection = Strong` runs the directed SCC engine.
///
/// Weak labels follow the first-touch order of a scan over `0..n`; strong
/// labels follow component completion order. Both are deterministic.
pub fn connected_components<W: Copy>(
    graph: &CsrGraph<W>,
    directed: bool,
    connection: Connection,
) -> (usize, Vec<i32>) {
    let n = graph.node_count();
    let mut labels = vec![VOID; n];

    let count = if directed && connection == Connection::Strong {
        scc::strongly_connected_components(graph.indptr(), graph.indices(), &mut labels)
    } else {
        let transpose = graph.transpose();
        weak::weakly_connected_components(
            graph.indptr(),
            graph.indices(),
            transpose.indptr(),
            transpose.indices(),
            &mut labels,
        )
    };

    (count as usize, labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_parses_case_insensitively() {
        assert_eq!("weak".parse::<Connection>().unwrap(), Connection::Weak);
        assert_eq!("Strong".parse::<Connection>().unwrap(), Connection::Strong);
        assert_eq!(
            "both".parse::<Connection>(),
            Err(GraphError::InvalidConnection("both".to_owned()))
        );
        assert_eq!(Connection::Weak.to_string(), "weak");
    }

    #[test]
    fn weak_connection_overrides_directed() {
        // 0 -> 1 only; weakly one component, strongly two.
        let g = CsrGraph::from_dense(&[vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();
        let (weak_count, _) = connected_components(&g, true, Connection::Weak);
        let (strong_count, _) = connected_components(&g, true, Connection::Strong);
        assert_eq!(weak_count, 1);
        assert_eq!(strong_count, 2);
    }

    #[test]
    fn undirected_strong_degenerates_to_weak() {
        let g = CsrGraph::from_dense(&[vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(
            connected_components(&g, false, Connection::Strong),
            connected_components(&g, false, Connection::Weak)
        );
    }
}
