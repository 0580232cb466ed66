//! Construction-time configuration for the controller.

use tilegrid_core::{CellIndex, GridLayout};

/// The configuration surface of a
/// [`GridController`](crate::GridController).
///
/// Plain data: a layout plus two independent feature switches and an
/// optional initial selection. Everything here is also mutable after
/// construction through the controller's setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Grid shape and traversal order.
    pub layout: GridLayout,
    /// Whether a press-begin edge toggles the pressed cell's latch.
    pub latching_enabled: bool,
    /// Whether the exclusive selection responds to selection calls.
    pub selection_enabled: bool,
    /// Initially selected cell, if any.
    pub selected: Option<CellIndex>,
}

impl Default for GridConfig {
    /// Latching and selection on, nothing selected, default 4x4 layout.
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            latching_enabled: true,
            selection_enabled: true,
            selected: None,
        }
    }
}
