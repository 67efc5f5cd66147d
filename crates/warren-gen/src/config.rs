//! Generator configuration.

/// Which anchor set the seed phase marks empty.
///
/// Anchors are deterministic, non-degenerate starting material laid
/// down before any randomized growth, independent of where growth
/// later occurs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedStrategy {
    /// The four grid corners.
    #[default]
    Corners,
    /// The entire left column and bottom row.
    BorderLines,
}
