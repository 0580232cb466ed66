//! The grid orchestrator: configuration, debounced rebuilds, and the
//! contact path.

use std::collections::BTreeSet;

use log::{debug, trace};
use tilegrid_core::{
    CellIndex, GeometryTable, GridLayout, Point, Rect, Size, Slot, resolve_contacts,
};

use crate::{
    config::GridConfig,
    error::GridError,
    event::{GridObserver, StateChange},
    state::GridState,
    tracker::{ContactId, ContactTracker},
};

/// The per-cell payload pushed to a [`TileSurface`] on every rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileVisual {
    /// The cell's logical identity.
    pub index: CellIndex,
    /// Whether an active contact currently resolves to the cell.
    pub pressed: bool,
    /// The cell's sticky latch value.
    pub latched: bool,
    /// Whether the cell is the exclusive selection.
    pub selected: bool,
}

/// The rendering seam between the controller and the host.
///
/// Implementations own whatever visual representation they like; the
/// controller only ever hands them a slot, its rectangle, and the four
/// visual fields. The surface doubles as the geometry source: `bounds` is
/// sampled once per rebuild.
pub trait TileSurface {
    /// Current host bounds, in the same coordinate space as contact points.
    fn bounds(&self) -> Size;

    /// Creates or updates the visual representation of the cell at `slot`.
    ///
    /// Called once per slot on every rebuild, in slot order.
    fn present(&mut self, slot: Slot, rect: Rect, visual: TileVisual);
}

/// Direction for moving the exclusive selection one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// One row up, wrapping to the bottom of the same column.
    Up,
    /// One row down, wrapping to the top of the same column.
    Down,
    /// One cell left, wrapping to the end of the same row.
    Left,
    /// One cell right, wrapping to the start of the same row.
    Right,
}

/// Orchestrates layout, geometry, contacts, and state for one tile grid.
///
/// The controller owns a [`GridLayout`], the per-cell [`GridState`], the
/// active [`ContactTracker`], and the current geometry table. Configuration
/// changes never rebuild synchronously: they mark a rebuild pending, and the
/// host flushes it with [`poll_rebuild`](Self::poll_rebuild) on its next
/// idle turn, so any number of changes in between collapse into a single
/// rebuild (last values win). Contact batches, by contrast, are processed
/// immediately and in arrival order.
///
/// State is keyed by logical index, so pressed/latched/selected values
/// survive every rebuild; after each rebuild the controller re-presents all
/// cells from `GridState`, which makes the externally observable flags equal
/// the stored ones no matter how many rebuilds have run.
pub struct GridController<S> {
    surface: S,
    observer: GridObserver,
    layout: GridLayout,
    latching_enabled: bool,
    selection_enabled: bool,
    state: GridState,
    tracker: ContactTracker,
    geometry: Option<GeometryTable>,
    active: BTreeSet<CellIndex>,
    rebuild_pending: bool,
}

impl<S: TileSurface> GridController<S> {
    /// Creates a controller over `surface` with the given configuration.
    ///
    /// The first rebuild is scheduled but not run; the host decides when the
    /// surface is first touched by calling
    /// [`poll_rebuild`](Self::poll_rebuild). An initial selection from the
    /// configuration is applied (and notified) right away.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the configured initial
    /// selection does not exist in the layout.
    pub fn new(surface: S, config: GridConfig, observer: GridObserver) -> Result<Self, GridError> {
        let GridConfig {
            layout,
            latching_enabled,
            selection_enabled,
            selected,
        } = config;

        let mut controller = Self {
            surface,
            observer,
            layout,
            latching_enabled,
            selection_enabled,
            state: GridState::new(layout.len()),
            tracker: ContactTracker::new(),
            geometry: None,
            active: BTreeSet::new(),
            rebuild_pending: true,
        };
        if let Some(index) = selected {
            controller.check_index(index)?;
            if controller.selection_enabled
                && let Some(change) = controller.state.set_selected(Some(index))
            {
                controller.emit(change);
            }
        }
        Ok(controller)
    }

    /// The current layout value.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Whether press-begin edges toggle latches.
    #[must_use]
    pub fn latching_enabled(&self) -> bool {
        self.latching_enabled
    }

    /// Whether selection calls take effect.
    #[must_use]
    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Read access to the per-cell state.
    #[must_use]
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// Read access to the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether a rebuild is pending for the host's next idle turn.
    #[must_use]
    pub fn needs_rebuild(&self) -> bool {
        self.rebuild_pending
    }

    /// Replaces the layout wholesale and schedules a rebuild.
    ///
    /// Replacing with an equal value is a no-op. When the new layout has
    /// fewer cells, state for indices beyond the new length is discarded; an
    /// out-of-range selection is cleared and notified.
    pub fn set_layout(&mut self, layout: GridLayout) {
        if layout == self.layout {
            return;
        }
        debug!(
            "layout replaced: {}x{} -> {}x{}",
            self.layout.rows(),
            self.layout.columns(),
            layout.rows(),
            layout.columns()
        );
        self.layout = layout;
        self.active.retain(|index| index.get() < layout.len());
        if let Some(change) = self.state.resize(layout.len()) {
            self.emit(change);
        }
        self.schedule_rebuild();
    }

    /// Enables or disables latch toggling for future press-begin edges.
    ///
    /// Existing latch values are untouched.
    pub fn set_latching_enabled(&mut self, enabled: bool) {
        self.latching_enabled = enabled;
    }

    /// Enables or disables the selection surface.
    ///
    /// The current selection is kept; while disabled, selection calls are
    /// valid no-ops.
    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    /// Runs the pending rebuild, if any, and returns whether one ran.
    ///
    /// The host calls this once per idle turn. A rebuild samples the
    /// surface bounds, recomputes the geometry table, and re-presents every
    /// cell with its rectangle and the current flags from [`GridState`].
    /// Without a pending rebuild this does nothing.
    pub fn poll_rebuild(&mut self) -> bool {
        if !self.rebuild_pending {
            return false;
        }
        self.rebuild_pending = false;

        let bounds = self.surface.bounds();
        let table = GeometryTable::compute(&self.layout, bounds);
        debug!(
            "rebuilt {}x{} grid in {}x{} bounds",
            self.layout.rows(),
            self.layout.columns(),
            bounds.width,
            bounds.height
        );
        for (slot, rect) in table.iter() {
            let index = self.layout.index_at(slot);
            let visual = TileVisual {
                index,
                pressed: self.state.is_pressed(index),
                latched: self.state.is_latched(index),
                selected: self.state.is_selected(index),
            };
            self.surface.present(slot, rect, visual);
        }
        self.geometry = Some(table);
        true
    }

    /// Feeds a batch of new contacts into the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GeometryNotReady`] if no rebuild has run yet;
    /// nothing is mutated in that case.
    pub fn contacts_began(&mut self, contacts: &[(ContactId, Point)]) -> Result<(), GridError> {
        self.ensure_geometry()?;
        for &(id, position) in contacts {
            self.tracker.record(id, position);
        }
        self.reconcile();
        Ok(())
    }

    /// Feeds a batch of moved contacts into the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GeometryNotReady`] if no rebuild has run yet;
    /// nothing is mutated in that case.
    pub fn contacts_moved(&mut self, contacts: &[(ContactId, Point)]) -> Result<(), GridError> {
        self.contacts_began(contacts)
    }

    /// Removes a batch of ended contacts from the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GeometryNotReady`] if no rebuild has run yet;
    /// nothing is mutated in that case.
    pub fn contacts_ended(&mut self, contacts: &[ContactId]) -> Result<(), GridError> {
        self.ensure_geometry()?;
        for &id in contacts {
            self.tracker.release(id);
        }
        self.reconcile();
        Ok(())
    }

    /// Removes a batch of cancelled contacts from the grid.
    ///
    /// A cancelled contact releases press state exactly like an ended one;
    /// there are no distinct recovery semantics.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::GeometryNotReady`] if no rebuild has run yet;
    /// nothing is mutated in that case.
    pub fn contacts_cancelled(&mut self, contacts: &[ContactId]) -> Result<(), GridError> {
        self.contacts_ended(contacts)
    }

    /// Replaces the exclusive selection.
    ///
    /// While selection is disabled this is a valid no-op, as is reselecting
    /// the current value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the index does not exist in
    /// the current layout.
    pub fn select(&mut self, index: Option<CellIndex>) -> Result<(), GridError> {
        if let Some(index) = index {
            self.check_index(index)?;
        }
        if !self.selection_enabled {
            return Ok(());
        }
        if let Some(change) = self.state.set_selected(index) {
            self.emit(change);
        }
        Ok(())
    }

    /// Moves the selection one cell, wrapping at the grid edges.
    ///
    /// The logical grid is read row-major for navigation: `columns` cells
    /// per row. Horizontal moves wrap within the current row, vertical moves
    /// wrap within the current column. Without a current selection, or while
    /// selection is disabled, the move is ignored.
    pub fn move_selection(&mut self, direction: MoveDirection) {
        if !self.selection_enabled {
            return;
        }
        let Some(current) = self.state.selected() else {
            return;
        };
        let rows = usize::from(self.layout.rows());
        let columns = usize::from(self.layout.columns());
        let row = current.get() / columns;
        let column = current.get() % columns;
        let target = match direction {
            MoveDirection::Up => ((row + rows - 1) % rows) * columns + column,
            MoveDirection::Down => ((row + 1) % rows) * columns + column,
            MoveDirection::Left => row * columns + (column + columns - 1) % columns,
            MoveDirection::Right => row * columns + (column + 1) % columns,
        };
        if let Some(change) = self.state.set_selected(Some(CellIndex::new(target))) {
            self.emit(change);
        }
    }

    fn schedule_rebuild(&mut self) {
        if !self.rebuild_pending {
            trace!("rebuild scheduled");
        }
        self.rebuild_pending = true;
    }

    fn ensure_geometry(&self) -> Result<(), GridError> {
        if self.geometry.is_some() {
            Ok(())
        } else {
            Err(GridError::GeometryNotReady)
        }
    }

    fn check_index(&self, index: CellIndex) -> Result<(), GridError> {
        let len = self.layout.len();
        if index.get() < len {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange { index, len })
        }
    }

    // One reconciliation per contact batch: resolve the active set, then
    // latch on rising edges before reconciling pressed flags.
    fn reconcile(&mut self) {
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };
        let new_active = resolve_contacts(self.tracker.active_points(), geometry, &self.layout);
        trace!(
            "{} contacts resolve to {} cells",
            self.tracker.len(),
            new_active.len()
        );
        let previous = std::mem::replace(&mut self.active, new_active);

        let mut changes = Vec::new();
        if self.latching_enabled {
            changes.extend(self.state.apply_latch(&previous, &self.active));
        }
        changes.extend(self.state.apply_press(&previous, &self.active));
        for change in changes {
            self.emit(change);
        }
    }

    fn emit(&mut self, change: StateChange) {
        (self.observer)(change);
    }
}
