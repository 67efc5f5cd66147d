//! Error types for the Warren layout-generation framework.
//!
//! Organized by subsystem: structural grid errors (construction,
//! population, edge creation) and generation errors (candidate
//! selection phases). Duplicate edge creation is deliberately absent
//! from both: it is defined as a silent no-op, not a failure.

use crate::coord::GridCoord;
use std::error::Error;
use std::fmt;

/// Structural errors from grid construction, population, and edge
/// creation.
///
/// All variants are fatal to the current operation and reported
/// immediately. None of them is recoverable by repairing the graph;
/// callers discard and rebuild.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate lies outside the graph's fixed rectangle.
    OutOfBounds {
        /// The offending coordinate.
        coord: GridCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// The same coordinate was supplied twice during population.
    DuplicateCoord {
        /// The repeated coordinate.
        coord: GridCoord,
    },
    /// An edge was requested between nodes that are not grid-adjacent.
    NonAdjacentEdge {
        /// First endpoint.
        a: GridCoord,
        /// Second endpoint.
        b: GridCoord,
    },
    /// A coordinate was queried before population completed, or its
    /// slot was never populated.
    Unpopulated {
        /// The queried coordinate.
        coord: GridCoord,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::DuplicateCoord { coord } => {
                write!(f, "coordinate {coord} populated twice")
            }
            Self::NonAdjacentEdge { a, b } => {
                write!(f, "edge requested between non-adjacent nodes {a} and {b}")
            }
            Self::Unpopulated { coord } => {
                write!(f, "no populated node at {coord}")
            }
        }
    }
}

impl Error for GridError {}

/// The phases of a generation run, in execution order.
///
/// Carried by [`GenerateError`] so a failed run identifies where it
/// stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeneratePhase {
    /// Marking the anchor set empty.
    SeedAnchors,
    /// Choosing the walk's origin among empty candidates.
    StartSelection,
    /// Promoting a neighbour of the start to a room.
    RoomPlacement,
    /// Extending past the room into the first cycle cell.
    CorridorStep,
    /// Seeding additional empty anchors around the grid centre.
    CenterSeeding,
    /// Growing the cycle by one further cell.
    CycleContinuation,
}

impl fmt::Display for GeneratePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SeedAnchors => "seed anchors",
            Self::StartSelection => "start selection",
            Self::RoomPlacement => "room placement",
            Self::CorridorStep => "corridor step",
            Self::CenterSeeding => "centre seeding",
            Self::CycleContinuation => "cycle continuation",
        };
        write!(f, "{name}")
    }
}

/// Errors aborting a generation run.
///
/// Any failure aborts the whole run with the failing phase identified.
/// Mutations already applied to the graph are not rolled back; the
/// graph is left in an interim state and must be discarded, not
/// reused. Callers retry on a fresh graph with different randomness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// A selection phase found an empty candidate set.
    NoCandidate {
        /// The phase whose candidate set was empty.
        phase: GeneratePhase,
    },
    /// A structural grid error surfaced during a phase.
    Grid {
        /// The phase in which the error surfaced.
        phase: GeneratePhase,
        /// The underlying structural error.
        source: GridError,
    },
}

impl GenerateError {
    /// The phase in which the run aborted.
    pub fn phase(&self) -> GeneratePhase {
        match self {
            Self::NoCandidate { phase } | Self::Grid { phase, .. } => *phase,
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidate { phase } => {
                write!(f, "no candidate available during {phase}")
            }
            Self::Grid { phase, source } => {
                write!(f, "grid error during {phase}: {source}")
            }
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid { source, .. } => Some(source),
            Self::NoCandidate { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_messages_name_coordinates() {
        let e = GridError::OutOfBounds {
            coord: GridCoord::new(7, -1),
            bounds: "[0, 5) x [0, 5)".into(),
        };
        assert_eq!(e.to_string(), "coordinate (7, -1) out of bounds: [0, 5) x [0, 5)");

        let e = GridError::NonAdjacentEdge {
            a: GridCoord::new(0, 0),
            b: GridCoord::new(2, 0),
        };
        assert_eq!(
            e.to_string(),
            "edge requested between non-adjacent nodes (0, 0) and (2, 0)"
        );
    }

    #[test]
    fn generate_error_reports_phase_and_chains_source() {
        let e = GenerateError::NoCandidate {
            phase: GeneratePhase::StartSelection,
        };
        assert_eq!(e.phase(), GeneratePhase::StartSelection);
        assert_eq!(e.to_string(), "no candidate available during start selection");
        assert!(e.source().is_none());

        let e = GenerateError::Grid {
            phase: GeneratePhase::CorridorStep,
            source: GridError::Unpopulated {
                coord: GridCoord::new(1, 1),
            },
        };
        assert_eq!(e.phase(), GeneratePhase::CorridorStep);
        assert!(e.source().is_some());
    }
}
