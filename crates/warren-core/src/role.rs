//! Cell roles assigned during layout generation.

use std::fmt;

/// The role a grid cell plays in the generated layout.
///
/// Roles form a closed set and are mutually exclusive: a node holds
/// exactly one at a time. Every node starts
/// [`Unassigned`](CellRole::Unassigned); generation only moves roles
/// forward out of it, never back.
///
/// Pattern-matching wildcards (unconstrained / must-be-absent) are
/// deliberately *not* roles: they live in
/// `warren_grid::RoleConstraint` and are never stored on a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Not yet claimed by any generation phase.
    #[default]
    Unassigned,
    /// Open space; seed anchors and growth frontier material.
    Empty,
    /// The walk's origin cell.
    Path,
    /// A segment of the corridor cycle.
    Cycle,
    /// A room cell.
    Room,
    /// A terminal cell.
    End,
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellRole::Unassigned => "unassigned",
            CellRole::Empty => "empty",
            CellRole::Path => "path",
            CellRole::Cycle => "cycle",
            CellRole::Room => "room",
            CellRole::End => "end",
        };
        write!(f, "{name}")
    }
}
