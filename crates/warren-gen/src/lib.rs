//! Constrained procedural-growth layout generation.
//!
//! [`LayoutGenerator`] runs a fixed ordered sequence of growth phases
//! over a populated [`Graph`](warren_grid::Graph), promoting cells out
//! of the unassigned role into anchors, a start, a room, and cycle
//! segments according to local neighbour-pattern rules.
//!
//! Randomness only breaks ties among otherwise-equal candidates; all
//! other behaviour is deterministic given the random choices. The RNG
//! is injectable and seedable, so identical seeds over structurally
//! identical graphs produce identical layouts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod generator;
pub mod layout;

pub use config::SeedStrategy;
pub use generator::LayoutGenerator;
pub use layout::Layout;
