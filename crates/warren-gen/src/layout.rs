//! The per-phase record of a successful generation run.

use warren_core::NodeId;

/// The node ids chosen by each phase of a successful run.
///
/// Purely informational: the authoritative result is the mutated graph
/// itself. Useful for callers that place follow-up content relative to
/// the start or rooms, and for tests asserting phase behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// The anchor nodes marked empty by the seed phase.
    pub anchors: Vec<NodeId>,
    /// The walk's origin (promoted to path).
    pub start: NodeId,
    /// The room placed beside the start.
    pub room: NodeId,
    /// The first cycle cell, one step past the room.
    pub cycle_head: NodeId,
    /// The centre cell marked empty.
    pub center: NodeId,
    /// The randomly chosen neighbour of the centre, also marked empty.
    pub center_side: NodeId,
    /// The second cycle cell, grown from the head.
    pub cycle_tail: NodeId,
}
