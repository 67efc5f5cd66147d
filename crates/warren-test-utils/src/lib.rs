//! Test utilities and mock collaborators for Warren development.
//!
//! Provides a recording [`GraphObserver`] for asserting on renderer
//! notifications, a fixed-sequence [`ScriptedRng`] for exercising the
//! generator's injectable-randomness contract, and grid fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::rc::Rc;

use rand::RngCore;
use warren_core::{CellRole, Direction, GraphObserver, GridCoord, NodeId};
use warren_grid::Graph;

/// Everything a [`RecordingObserver`] has seen, in notification order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObserverLog {
    /// One entry per `role_changed` notification.
    pub roles: Vec<(NodeId, GridCoord, CellRole)>,
    /// One entry per `edge_added` notification.
    pub edges: Vec<(NodeId, NodeId, Direction)>,
}

/// A [`GraphObserver`] that records every notification.
///
/// The log is shared through an `Rc`, so a test keeps a
/// [`handle`](RecordingObserver::handle) while the observer itself is
/// boxed into the graph.
///
/// ```
/// use warren_core::{CellRole, GridCoord};
/// use warren_test_utils::{full_grid, RecordingObserver};
///
/// let observer = RecordingObserver::new();
/// let log = observer.handle();
/// let mut graph = full_grid(3, 3);
/// graph.set_observer(Box::new(observer));
///
/// let id = graph.require(GridCoord::new(1, 1)).unwrap();
/// graph.set_role(id, CellRole::Room).unwrap();
/// assert_eq!(log.borrow().roles.len(), 1);
/// ```
#[derive(Default)]
pub struct RecordingObserver {
    log: Rc<RefCell<ObserverLog>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared handle onto the log, valid after the observer is
    /// boxed away.
    pub fn handle(&self) -> Rc<RefCell<ObserverLog>> {
        Rc::clone(&self.log)
    }
}

impl GraphObserver for RecordingObserver {
    fn role_changed(&mut self, node: NodeId, coord: GridCoord, role: CellRole) {
        self.log.borrow_mut().roles.push((node, coord, role));
    }

    fn edge_added(&mut self, a: NodeId, b: NodeId, direction: Direction) {
        self.log.borrow_mut().edges.push((a, b, direction));
    }
}

/// A fixed-sequence RNG cycling through scripted values.
///
/// Satisfies the generator's injectable-source contract with fully
/// predictable output: `next_u64` yields the scripted values in order,
/// wrapping around at the end.
pub struct ScriptedRng {
    values: Vec<u64>,
    pos: usize,
}

impl ScriptedRng {
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "ScriptedRng needs at least one value");
        Self { values, pos: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// The row-major coordinate sequence for a fully populated grid.
pub fn grid_coords(width: u32, height: u32) -> Vec<GridCoord> {
    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| GridCoord::new(x, y)))
        .collect()
}

/// A fully populated `width` × `height` graph.
///
/// Panics on zero dimensions; fixtures are for tests that assume a
/// well-formed grid.
pub fn full_grid(width: u32, height: u32) -> Graph {
    let mut graph = Graph::new(width, height).expect("fixture dimensions must be nonzero");
    graph
        .populate(grid_coords(width, height))
        .expect("fixture coordinates are in bounds and unique");
    graph
}
