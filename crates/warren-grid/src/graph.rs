//! The arena-owned grid graph.

use crate::edge::Edge;
use crate::node::Node;
use crate::pattern::{Pattern, RoleConstraint};
use indexmap::IndexSet;
use smallvec::SmallVec;
use std::fmt;
use warren_core::{CellRole, Direction, GraphObserver, GridCoord, GridError, NodeId};

/// A grid graph owning the complete node set for a fixed
/// width×height rectangle.
///
/// Nodes live in a row-major arena indexed by [`NodeId`], so
/// coordinate→node lookup is O(1). The graph is populated exactly once
/// from an external coordinate sequence; population resolves every
/// node's four neighbour slots, which never change afterward. All
/// later mutation goes through [`set_role`](Graph::set_role) and
/// [`add_edge`](Graph::add_edge).
///
/// An installed [`GraphObserver`] receives a synchronous notification
/// on every role change and every newly created edge. The core
/// consumes nothing from it.
///
/// # Examples
///
/// ```
/// use warren_core::{CellRole, Direction, GridCoord};
/// use warren_grid::Graph;
///
/// let mut graph = Graph::new(3, 3).unwrap();
/// let coords = (0..3).flat_map(|y| (0..3).map(move |x| GridCoord::new(x, y)));
/// graph.populate(coords).unwrap();
///
/// let center = graph.require(GridCoord::new(1, 1)).unwrap();
/// let above = graph.require(GridCoord::new(1, 2)).unwrap();
/// assert_eq!(graph.direction_to(center, above), Some(Direction::Up));
///
/// graph.set_role(center, CellRole::Room).unwrap();
/// graph.add_edge(center, above).unwrap();
/// assert!(graph.has_edge(above, center));
/// ```
pub struct Graph {
    width: u32,
    height: u32,
    slots: Vec<Option<Node>>,
    edges: IndexSet<Edge>,
    observer: Option<Box<dyn GraphObserver>>,
}

impl Graph {
    /// Create an empty graph for a `width` × `height` rectangle.
    ///
    /// Dimensions are fixed for the graph's lifetime. Returns
    /// [`GridError::OutOfBounds`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::OutOfBounds {
                coord: GridCoord::new(width as i32, height as i32),
                bounds: "grid dimensions must both be at least 1".into(),
            });
        }
        Ok(Self {
            width,
            height,
            slots: vec![None; (width as usize) * (height as usize)],
            edges: IndexSet::new(),
            observer: None,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of populated nodes.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Install the outbound observer.
    ///
    /// Notifications before an observer is installed are skipped, not
    /// queued.
    pub fn set_observer(&mut self, observer: Box<dyn GraphObserver>) {
        self.observer = Some(observer);
    }

    /// Create one node per supplied coordinate, then resolve every
    /// node's four neighbour slots.
    ///
    /// Fails with [`GridError::OutOfBounds`] if a coordinate lies
    /// outside `[0, width) × [0, height)`, or
    /// [`GridError::DuplicateCoord`] if a coordinate repeats. Slots
    /// without a supplied coordinate stay empty and resolve as
    /// boundaries for their neighbours.
    pub fn populate(
        &mut self,
        coords: impl IntoIterator<Item = GridCoord>,
    ) -> Result<(), GridError> {
        for coord in coords {
            let idx = self.rank(coord).ok_or_else(|| GridError::OutOfBounds {
                coord,
                bounds: self.bounds_label(),
            })?;
            if self.slots[idx].is_some() {
                return Err(GridError::DuplicateCoord { coord });
            }
            self.slots[idx] = Some(Node::new(NodeId(idx as u32), coord));
        }

        for idx in 0..self.slots.len() {
            let coord = match &self.slots[idx] {
                Some(node) => node.coord(),
                None => continue,
            };
            let mut resolved = [None; 4];
            for d in Direction::ALL {
                resolved[d.index()] = self.node_at(coord.step(d)).map(Node::id);
            }
            if let Some(node) = &mut self.slots[idx] {
                node.resolve_neighbours(resolved);
            }
        }
        Ok(())
    }

    /// The node at `coord`, or `None` if out of bounds or unpopulated.
    pub fn node_at(&self, coord: GridCoord) -> Option<&Node> {
        self.slots[self.rank(coord)?].as_ref()
    }

    /// The id of the node at `coord`.
    ///
    /// Unlike [`node_at`](Graph::node_at), distinguishes the failure
    /// modes: [`GridError::OutOfBounds`] for coordinates outside the
    /// rectangle, [`GridError::Unpopulated`] for in-bounds slots that
    /// were never populated.
    pub fn require(&self, coord: GridCoord) -> Result<NodeId, GridError> {
        let idx = self.rank(coord).ok_or_else(|| GridError::OutOfBounds {
            coord,
            bounds: self.bounds_label(),
        })?;
        match &self.slots[idx] {
            Some(node) => Ok(node.id()),
            None => Err(GridError::Unpopulated { coord }),
        }
    }

    /// The node with the given id, or `None` if the id is out of range
    /// or its slot unpopulated.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index())?.as_ref()
    }

    /// The current role of a node.
    pub fn role(&self, id: NodeId) -> Option<CellRole> {
        self.node(id).map(Node::role)
    }

    /// Set a node's role and notify the observer.
    ///
    /// The mutation itself is pure; the observer notification is the
    /// only side effect and no internal invariant depends on it. The
    /// notification fires on every set, matching a renderer that
    /// recolours unconditionally.
    pub fn set_role(&mut self, id: NodeId, role: CellRole) -> Result<(), GridError> {
        let coord = {
            let node = self.node_mut(id)?;
            node.set_role(role);
            node.coord()
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.role_changed(id, coord, role);
        }
        Ok(())
    }

    /// Record an undirected edge between two grid-adjacent nodes.
    ///
    /// Fails with [`GridError::NonAdjacentEdge`] unless the nodes'
    /// coordinates differ by one unit along exactly one cardinal axis.
    /// If the edge already exists this is a silent no-op: no second
    /// edge is recorded and no notification fires. On creation the
    /// edge is recorded on both nodes and in the graph's edge set, and
    /// the observer is notified with the `a`→`b` direction.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GridError> {
        let node_a = self.node_ref(a)?;
        let coord_a = node_a.coord();
        let direction = node_a.direction_to(b);
        let already = node_a.has_edge_to(b);
        let coord_b = self.node_ref(b)?.coord();

        let direction = match direction {
            Some(d) => d,
            None => {
                return Err(GridError::NonAdjacentEdge {
                    a: coord_a,
                    b: coord_b,
                })
            }
        };
        if already {
            return Ok(());
        }

        self.edges.insert(Edge::new(a, b));
        self.node_mut(a)?.add_partner(b);
        self.node_mut(b)?.add_partner(a);
        if let Some(observer) = self.observer.as_mut() {
            observer.edge_added(a, b, direction);
        }
        Ok(())
    }

    /// Whether an edge between `a` and `b` has been created.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.node(a).is_some_and(|n| n.has_edge_to(b))
    }

    /// The direction from `a` toward its direct neighbour `b`, or
    /// `None` if `b` is not a neighbour of `a`.
    pub fn direction_to(&self, a: NodeId, b: NodeId) -> Option<Direction> {
        self.node(a).and_then(|n| n.direction_to(b))
    }

    /// All populated nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.slots.iter().filter_map(Option::as_ref)
    }

    /// Ids of all nodes satisfying the predicate, in row-major order.
    ///
    /// The sole candidate-selection primitive used by the generator;
    /// row-major order keeps candidate sets deterministic so that
    /// randomness is confined to the pick itself.
    pub fn find_all(&self, predicate: impl Fn(&Node) -> bool) -> Vec<NodeId> {
        self.nodes()
            .filter(|n| predicate(n))
            .map(Node::id)
            .collect()
    }

    /// The first neighbour (scan order up, right, down, left) of `id`
    /// satisfying the predicate.
    ///
    /// Absent neighbours never reach the predicate.
    pub fn find_neighbour(
        &self,
        id: NodeId,
        predicate: impl Fn(&Node) -> bool,
    ) -> Option<NodeId> {
        let node = self.node(id)?;
        Direction::ALL.into_iter().find_map(|d| {
            let nid = node.neighbour(d)?;
            self.node(nid).filter(|n| predicate(n)).map(Node::id)
        })
    }

    /// Whether any neighbour of `id` satisfies the predicate.
    pub fn has_neighbour(&self, id: NodeId, predicate: impl Fn(&Node) -> bool) -> bool {
        self.find_neighbour(id, predicate).is_some()
    }

    /// All neighbours of `id` satisfying the predicate, in scan order.
    pub fn find_neighbours(
        &self,
        id: NodeId,
        predicate: impl Fn(&Node) -> bool,
    ) -> SmallVec<[NodeId; 4]> {
        let mut found = SmallVec::new();
        if let Some(node) = self.node(id) {
            for d in Direction::ALL {
                if let Some(nid) = node.neighbour(d) {
                    if self.node(nid).is_some_and(|n| predicate(n)) {
                        found.push(nid);
                    }
                }
            }
        }
        found
    }

    /// Test a node's neighbours against a per-direction pattern.
    ///
    /// For every direction whose constraint is not
    /// [`RoleConstraint::Any`]: if a neighbour exists its current role
    /// must equal the constraint; if no neighbour exists the
    /// constraint must be [`RoleConstraint::Missing`]. Returns `true`
    /// iff all non-`Any` constraints hold; a fully unconstrained
    /// pattern therefore matches every node. Returns `false` for an
    /// invalid id.
    pub fn matches(&self, id: NodeId, pattern: &Pattern) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        for d in Direction::ALL {
            match pattern.constraint(d) {
                RoleConstraint::Any => {}
                RoleConstraint::Missing => {
                    if node.neighbour(d).is_some() {
                        return false;
                    }
                }
                RoleConstraint::Is(role) => {
                    let holds = node
                        .neighbour(d)
                        .and_then(|nid| self.node(nid))
                        .is_some_and(|n| n.role() == role);
                    if !holds {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// All created edges, in creation order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Number of created edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Row-major rank of an in-bounds coordinate.
    fn rank(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0
            || coord.x >= self.width as i32
            || coord.y < 0
            || coord.y >= self.height as i32
        {
            return None;
        }
        Some(coord.x as usize + coord.y as usize * self.width as usize)
    }

    fn bounds_label(&self) -> String {
        format!("[0, {}) x [0, {})", self.width, self.height)
    }

    fn node_ref(&self, id: NodeId) -> Result<&Node, GridError> {
        let idx = id.index();
        match self.slots.get(idx) {
            Some(Some(node)) => Ok(node),
            Some(None) => Err(GridError::Unpopulated {
                coord: self.coord_for_rank(idx),
            }),
            None => Err(GridError::OutOfBounds {
                coord: self.coord_for_rank(idx),
                bounds: self.bounds_label(),
            }),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, GridError> {
        let idx = id.index();
        let coord = self.coord_for_rank(idx);
        let bounds = self.bounds_label();
        match self.slots.get_mut(idx) {
            Some(Some(node)) => Ok(node),
            Some(None) => Err(GridError::Unpopulated { coord }),
            None => Err(GridError::OutOfBounds { coord, bounds }),
        }
    }

    /// Coordinate a rank would address, beyond the top edge for ranks
    /// past the arena.
    fn coord_for_rank(&self, idx: usize) -> GridCoord {
        let w = self.width as usize;
        GridCoord::new((idx % w) as i32, (idx / w) as i32)
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("nodes", &self.node_count())
            .field("edges", &self.edges.len())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
