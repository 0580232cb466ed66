//! Error taxonomy for grid configuration and contact handling.

use tilegrid_core::{CellIndex, LayoutError};

/// Errors reported by [`GridController`](crate::GridController) operations.
///
/// All of these are synchronous configuration-class failures: the operation
/// is rejected, the previous state is retained, and nothing is partially
/// applied. There is no transient/retryable category - the controller is
/// pure local computation.
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GridError {
    /// A layout value was rejected at construction time.
    #[display("invalid layout: {_0}")]
    Layout(#[from] LayoutError),
    /// Contact resolution was requested before the first rebuild produced a
    /// geometry table.
    #[display("no geometry has been built yet; run a rebuild before delivering contacts")]
    GeometryNotReady,
    /// A cell index does not exist in the current layout.
    #[display("cell index {index} out of range for grid of {len} cells")]
    IndexOutOfRange {
        /// The rejected index.
        index: CellIndex,
        /// The current cell count.
        len: usize,
    },
}
