//! Core types and traits for the Warren layout-generation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Warren workspace:
//! typed IDs, lattice coordinates and directions, cell roles, error
//! types, and the outbound observer trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod observer;
pub mod role;

pub use coord::{Direction, GridCoord};
pub use error::{GenerateError, GeneratePhase, GridError};
pub use id::NodeId;
pub use observer::GraphObserver;
pub use role::CellRole;
