//! Undirected connectivity markers between adjacent nodes.

use warren_core::NodeId;

/// An undirected edge between two adjacent nodes.
///
/// Endpoints are stored in normalized (ascending id) order, so the
/// same pair always produces the same `Edge` value regardless of
/// argument order. Edges carry no weight; they purely mark
/// traversability.
///
/// # Examples
///
/// ```
/// use warren_core::NodeId;
/// use warren_grid::Edge;
///
/// assert_eq!(Edge::new(NodeId(3), NodeId(1)), Edge::new(NodeId(1), NodeId(3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
}

impl Edge {
    /// Create an edge over an unordered pair of node ids.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// The two endpoints in ascending id order.
    pub fn endpoints(self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_normalized() {
        let e = Edge::new(NodeId(9), NodeId(2));
        assert_eq!(e.endpoints(), (NodeId(2), NodeId(9)));
    }

    #[test]
    fn touches_both_endpoints_only() {
        let e = Edge::new(NodeId(2), NodeId(9));
        assert!(e.touches(NodeId(2)));
        assert!(e.touches(NodeId(9)));
        assert!(!e.touches(NodeId(5)));
    }
}
