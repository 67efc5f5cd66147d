//! A single grid cell: coordinate, role, resolved neighbours, edges.

use smallvec::SmallVec;
use warren_core::{CellRole, Direction, GridCoord, NodeId};

/// One cell of a grid graph.
///
/// A node's identity ([`NodeId`]) and coordinate are immutable; its
/// role is mutable and only moves forward out of
/// [`CellRole::Unassigned`]. The four neighbour slots are resolved
/// exactly once during [`Graph::populate`](crate::Graph::populate) and
/// never change afterward; the edge-partner list only grows.
///
/// Neighbour "references" are [`NodeId`] indices into the owning
/// graph's arena, not owned links.
#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    coord: GridCoord,
    role: CellRole,
    neighbours: [Option<NodeId>; 4],
    partners: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn new(id: NodeId, coord: GridCoord) -> Self {
        Self {
            id,
            coord,
            role: CellRole::Unassigned,
            neighbours: [None; 4],
            partners: SmallVec::new(),
        }
    }

    /// Set once by `Graph::populate` after every node exists.
    pub(crate) fn resolve_neighbours(&mut self, neighbours: [Option<NodeId>; 4]) {
        self.neighbours = neighbours;
    }

    /// Pure role mutation; the owning graph layers the observer
    /// notification on top of this.
    pub(crate) fn set_role(&mut self, role: CellRole) {
        self.role = role;
    }

    pub(crate) fn add_partner(&mut self, other: NodeId) {
        self.partners.push(other);
    }

    /// The node's id within its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's immutable lattice coordinate.
    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    /// The node's current role.
    pub fn role(&self) -> CellRole {
        self.role
    }

    /// The neighbour in the given direction, or `None` at the grid
    /// boundary (or an unpopulated slot).
    pub fn neighbour(&self, direction: Direction) -> Option<NodeId> {
        self.neighbours[direction.index()]
    }

    /// All four neighbour slots in scan order up, right, down, left.
    pub fn neighbours(&self) -> [Option<NodeId>; 4] {
        self.neighbours
    }

    /// The direction from this node toward a direct neighbour, or
    /// `None` if `other` is not in any neighbour slot.
    pub fn direction_to(&self, other: NodeId) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| self.neighbours[d.index()] == Some(other))
    }

    /// Whether an edge to `other` has been created.
    ///
    /// Constant-time: a node has at most four partners.
    pub fn has_edge_to(&self, other: NodeId) -> bool {
        self.partners.contains(&other)
    }

    /// Whether an edge exists toward the neighbour in `direction`.
    pub fn has_edge_in(&self, direction: Direction) -> bool {
        match self.neighbour(direction) {
            Some(n) => self.has_edge_to(n),
            None => false,
        }
    }

    /// The ids this node shares an edge with, in creation order.
    pub fn edge_partners(&self) -> &[NodeId] {
        &self.partners
    }
}
