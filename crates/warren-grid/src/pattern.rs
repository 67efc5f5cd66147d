//! Per-direction neighbour-pattern constraints.
//!
//! A [`Pattern`] tests a node's four neighbours against one
//! [`RoleConstraint`] per direction. This is the sole primitive for
//! "this is a valid placement site given the surrounding roles";
//! generation phases compose their candidate predicates from it.

use warren_core::{CellRole, Direction};

/// Constraint on a single neighbour slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleConstraint {
    /// The direction is unconstrained and always satisfied.
    Any,
    /// No neighbour may exist in the direction (grid boundary or
    /// unpopulated slot).
    Missing,
    /// A neighbour must exist and currently hold this role.
    Is(CellRole),
}

impl From<CellRole> for RoleConstraint {
    fn from(role: CellRole) -> Self {
        Self::Is(role)
    }
}

/// A per-direction set of neighbour constraints.
///
/// Starts fully unconstrained; builder-style setters narrow individual
/// directions. A pattern with every constraint [`RoleConstraint::Any`]
/// matches every node.
///
/// # Examples
///
/// ```
/// use warren_core::CellRole;
/// use warren_grid::{Pattern, RoleConstraint};
///
/// // "unassigned above, boundary below"
/// let p = Pattern::new()
///     .up(CellRole::Unassigned)
///     .down(RoleConstraint::Missing);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    slots: [RoleConstraint; 4],
}

impl Pattern {
    /// A pattern with every direction unconstrained.
    pub fn new() -> Self {
        Self {
            slots: [RoleConstraint::Any; 4],
        }
    }

    /// Constrain the up neighbour.
    pub fn up(mut self, constraint: impl Into<RoleConstraint>) -> Self {
        self.slots[Direction::Up.index()] = constraint.into();
        self
    }

    /// Constrain the right neighbour.
    pub fn right(mut self, constraint: impl Into<RoleConstraint>) -> Self {
        self.slots[Direction::Right.index()] = constraint.into();
        self
    }

    /// Constrain the down neighbour.
    pub fn down(mut self, constraint: impl Into<RoleConstraint>) -> Self {
        self.slots[Direction::Down.index()] = constraint.into();
        self
    }

    /// Constrain the left neighbour.
    pub fn left(mut self, constraint: impl Into<RoleConstraint>) -> Self {
        self.slots[Direction::Left.index()] = constraint.into();
        self
    }

    /// The constraint for a direction.
    pub fn constraint(&self, direction: Direction) -> RoleConstraint {
        self.slots[direction.index()]
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_fully_unconstrained() {
        let p = Pattern::new();
        for d in Direction::ALL {
            assert_eq!(p.constraint(d), RoleConstraint::Any);
        }
    }

    #[test]
    fn setters_narrow_one_direction_each() {
        let p = Pattern::new()
            .up(CellRole::Unassigned)
            .left(RoleConstraint::Missing);
        assert_eq!(
            p.constraint(Direction::Up),
            RoleConstraint::Is(CellRole::Unassigned)
        );
        assert_eq!(p.constraint(Direction::Left), RoleConstraint::Missing);
        assert_eq!(p.constraint(Direction::Right), RoleConstraint::Any);
        assert_eq!(p.constraint(Direction::Down), RoleConstraint::Any);
    }

    #[test]
    fn cell_role_converts_to_is_constraint() {
        assert_eq!(
            RoleConstraint::from(CellRole::Empty),
            RoleConstraint::Is(CellRole::Empty)
        );
    }
}
