//! Warren: constrained procedural layout generation over grid graphs.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Warren sub-crates. For most users, adding `warren` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // Build and populate a 5×5 grid graph.
//! let mut graph = Graph::new(5, 5).unwrap();
//! let coords = (0..5).flat_map(|y| (0..5).map(move |x| GridCoord::new(x, y)));
//! graph.populate(coords).unwrap();
//!
//! // Run one generation pass with a fixed seed.
//! let layout = LayoutGenerator::from_seed(7).generate(&mut graph).unwrap();
//!
//! assert_eq!(graph.role(layout.start), Some(CellRole::Path));
//! assert!(graph.has_edge(layout.room, layout.cycle_head));
//! assert_eq!(graph.edge_count(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | IDs, coordinates, roles, errors, observer trait |
//! | [`grid`] | `warren-grid` | Graph, nodes, edges, pattern matching |
//! | [`generator`] | `warren-gen` | The layout generator and its configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and the observer trait (`warren-core`).
pub use warren_core as types;

/// Grid-graph model and pattern matching (`warren-grid`).
pub use warren_grid as grid;

/// Layout generation (`warren-gen`).
pub use warren_gen as generator;

/// The most commonly used types, re-exported in one flat namespace.
pub mod prelude {
    pub use warren_core::{
        CellRole, Direction, GenerateError, GeneratePhase, GraphObserver, GridCoord, GridError,
        NodeId,
    };
    pub use warren_gen::{Layout, LayoutGenerator, SeedStrategy};
    pub use warren_grid::{Edge, Graph, Node, Pattern, RoleConstraint};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use warren_test_utils::full_grid;

    #[test]
    fn prelude_covers_an_end_to_end_run() {
        let mut graph = full_grid(5, 5);
        let layout = LayoutGenerator::from_seed(11)
            .seed_strategy(SeedStrategy::Corners)
            .generate(&mut graph)
            .unwrap();
        assert_eq!(graph.role(layout.cycle_tail), Some(CellRole::Cycle));
    }
}
