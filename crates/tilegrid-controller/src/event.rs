//! Discrete notifications delivered to the host.

use tilegrid_core::CellIndex;

/// A single observable change to grid interaction state.
///
/// Each value carries the affected logical index, so a renderer keyed by
/// logical index can update only the cells that changed instead of
/// rebuilding everything. Changes are emitted in the order they were
/// applied; an operation that changes nothing emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// A cell's momentary press state changed.
    Pressed {
        /// The affected cell.
        index: CellIndex,
        /// `true` while at least one active contact resolves to the cell.
        pressed: bool,
    },
    /// A cell's latch was toggled on a press-begin edge.
    Latched {
        /// The affected cell.
        index: CellIndex,
        /// The latch value after the toggle.
        latched: bool,
    },
    /// The exclusive selection moved or was cleared.
    Selected {
        /// The newly selected cell, or `None` when cleared.
        index: Option<CellIndex>,
    },
}

/// The notification sink registered with a
/// [`GridController`](crate::GridController) at construction.
///
/// The controller owns the callback; there is no back-reference from the
/// host into the controller. Hosts needing fan-out compose it inside the
/// closure.
pub type GridObserver = Box<dyn FnMut(StateChange)>;
