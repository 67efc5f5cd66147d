//! Strongly-typed node identifier.

use std::fmt;

/// Identifies a node within a grid graph.
///
/// The value is the node's row-major rank: for a node at `(x, y)` in a
/// graph of width `w`, the id is `x + y * w`. Ids are only meaningful
/// within the graph that issued them; indexing one graph with another
/// graph's ids yields unrelated nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The id as a usize, for arena indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
