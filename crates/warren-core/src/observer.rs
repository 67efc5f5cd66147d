//! The outbound observer seam for rendering collaborators.

use crate::coord::{Direction, GridCoord};
use crate::id::NodeId;
use crate::role::CellRole;

/// Outbound notifications from a grid graph to a rendering
/// collaborator.
///
/// Both methods default to no-ops, so a renderer that only recolours
/// cells implements [`role_changed`](GraphObserver::role_changed)
/// alone, and an edge-visual factory implements
/// [`edge_added`](GraphObserver::edge_added) alone.
///
/// # Contract
///
/// - Notifications are synchronous and arrive in mutation order.
/// - The core consumes nothing from the observer; no internal
///   invariant depends on these calls.
/// - `edge_added` fires once per created edge. Repeated edge creation
///   is a no-op and produces no notification.
///
/// # Object safety
///
/// This trait is object-safe; the graph stores its observer as
/// `Box<dyn GraphObserver>`.
pub trait GraphObserver {
    /// A node's role changed.
    fn role_changed(&mut self, node: NodeId, coord: GridCoord, role: CellRole) {
        let _ = (node, coord, role);
    }

    /// A new edge was created between `a` and `b`.
    ///
    /// `direction` is the direction from `a` toward `b`, for
    /// orienting a connector visual.
    fn edge_added(&mut self, a: NodeId, b: NodeId, direction: Direction) {
        let _ = (a, b, direction);
    }
}
