//! Per-cell interaction state keyed by logical index.

use std::collections::BTreeSet;

use tilegrid_core::CellIndex;

use crate::event::StateChange;

bitflags::bitflags! {
    /// Interaction flags for a single cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TileFlags: u8 {
        /// At least one active contact currently resolves to the cell.
        const PRESSED = 0b0000_0001;
        /// The sticky toggle, flipped once per press-begin edge.
        const LATCHED = 0b0000_0010;
    }
}

/// The single source of truth for per-cell interaction state.
///
/// State is keyed by [`CellIndex`], never by slot, so it survives full
/// teardown and rebuild of the visual layer. All mutating operations are
/// edge-triggered and report exactly the changes they made; unchanged cells
/// produce no entry, which lets observers update only what moved.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use tilegrid_controller::{GridState, StateChange};
/// use tilegrid_core::CellIndex;
///
/// let mut state = GridState::new(4);
/// let empty = BTreeSet::new();
/// let active: BTreeSet<_> = [CellIndex::new(3)].into();
///
/// let changes = state.apply_press(&empty, &active);
/// assert_eq!(
///     changes,
///     [StateChange::Pressed { index: CellIndex::new(3), pressed: true }]
/// );
///
/// // Applying the same frame again changes nothing.
/// assert!(state.apply_press(&active, &active).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    flags: Vec<TileFlags>,
    selected: Option<CellIndex>,
}

impl GridState {
    /// Creates state for a grid of `len` cells, all flags clear and nothing
    /// selected.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![TileFlags::empty(); len],
            selected: None,
        }
    }

    /// Number of cells tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if no cells are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the flags of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    #[must_use]
    pub fn flags(&self, index: CellIndex) -> TileFlags {
        self.flags[index.get()]
    }

    /// Returns whether the cell at `index` is currently pressed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    #[must_use]
    pub fn is_pressed(&self, index: CellIndex) -> bool {
        self.flags(index).contains(TileFlags::PRESSED)
    }

    /// Returns whether the cell at `index` is currently latched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    #[must_use]
    pub fn is_latched(&self, index: CellIndex) -> bool {
        self.flags(index).contains(TileFlags::LATCHED)
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<CellIndex> {
        self.selected
    }

    /// Returns whether the cell at `index` is the selected one.
    #[must_use]
    pub fn is_selected(&self, index: CellIndex) -> bool {
        self.selected == Some(index)
    }

    /// Reconciles pressed flags with this frame's active-index set.
    ///
    /// Cells in `new` become pressed, cells in `previous \ new` are
    /// released; cells whose pressed value is unchanged produce no delta.
    ///
    /// # Panics
    ///
    /// Panics if either set contains an index not below [`len`](Self::len).
    pub fn apply_press(
        &mut self,
        previous: &BTreeSet<CellIndex>,
        new: &BTreeSet<CellIndex>,
    ) -> Vec<StateChange> {
        let mut changes = Vec::new();
        for &index in new {
            if !self.is_pressed(index) {
                self.flags[index.get()].insert(TileFlags::PRESSED);
                changes.push(StateChange::Pressed {
                    index,
                    pressed: true,
                });
            }
        }
        for &index in previous.difference(new) {
            if self.is_pressed(index) {
                self.flags[index.get()].remove(TileFlags::PRESSED);
                changes.push(StateChange::Pressed {
                    index,
                    pressed: false,
                });
            }
        }
        changes
    }

    /// Toggles the latch of every cell that just became pressed this frame.
    ///
    /// The toggle fires on the rising edge only - indices in
    /// `new \ previous`. A contact held across any number of frames never
    /// re-toggles; the latch flips exactly once per press-begin.
    ///
    /// # Panics
    ///
    /// Panics if either set contains an index not below [`len`](Self::len).
    pub fn apply_latch(
        &mut self,
        previous: &BTreeSet<CellIndex>,
        new: &BTreeSet<CellIndex>,
    ) -> Vec<StateChange> {
        let mut changes = Vec::new();
        for &index in new.difference(previous) {
            self.flags[index.get()].toggle(TileFlags::LATCHED);
            changes.push(StateChange::Latched {
                index,
                latched: self.is_latched(index),
            });
        }
        changes
    }

    /// Replaces the exclusive selection.
    ///
    /// At most one cell is selected at a time; selecting a cell deselects
    /// the previous one implicitly. Reselecting the current value is a
    /// no-op and returns `None`.
    pub fn set_selected(&mut self, index: Option<CellIndex>) -> Option<StateChange> {
        if self.selected == index {
            return None;
        }
        self.selected = index;
        Some(StateChange::Selected { index })
    }

    /// Resizes the state for a grid of `len` cells.
    ///
    /// Flags for indices below `len` are preserved; the rest are discarded.
    /// Newly added cells start clear. If the selection falls out of range it
    /// is cleared and the resulting change returned.
    pub fn resize(&mut self, len: usize) -> Option<StateChange> {
        self.flags.resize(len, TileFlags::empty());
        match self.selected {
            Some(index) if index.get() >= len => self.set_selected(None),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(indices: &[usize]) -> BTreeSet<CellIndex> {
        indices.iter().copied().map(CellIndex::new).collect()
    }

    #[test]
    fn test_press_and_release_report_deltas() {
        let mut state = GridState::new(4);

        let changes = state.apply_press(&set(&[]), &set(&[0, 2]));
        assert_eq!(
            changes,
            [
                StateChange::Pressed {
                    index: CellIndex::new(0),
                    pressed: true
                },
                StateChange::Pressed {
                    index: CellIndex::new(2),
                    pressed: true
                },
            ]
        );

        // 0 stays pressed, 2 releases, 3 presses.
        let changes = state.apply_press(&set(&[0, 2]), &set(&[0, 3]));
        assert_eq!(
            changes,
            [
                StateChange::Pressed {
                    index: CellIndex::new(3),
                    pressed: true
                },
                StateChange::Pressed {
                    index: CellIndex::new(2),
                    pressed: false
                },
            ]
        );
        assert!(state.is_pressed(CellIndex::new(0)));
        assert!(!state.is_pressed(CellIndex::new(2)));
    }

    #[test]
    fn test_unchanged_frame_produces_no_delta() {
        let mut state = GridState::new(4);
        let active = set(&[1]);
        assert_eq!(state.apply_press(&set(&[]), &active).len(), 1);
        assert!(state.apply_press(&active, &active).is_empty());
    }

    #[test]
    fn test_latch_toggles_on_rising_edge_only() {
        let mut state = GridState::new(8);
        let active = set(&[3]);

        let changes = state.apply_latch(&set(&[]), &active);
        assert_eq!(
            changes,
            [StateChange::Latched {
                index: CellIndex::new(3),
                latched: true
            }]
        );

        // Holding the press across further frames never re-toggles.
        for _ in 0..4 {
            assert!(state.apply_latch(&active, &active).is_empty());
        }
        assert!(state.is_latched(CellIndex::new(3)));

        // Releasing leaves the latch; a second press toggles it back off.
        let changes = state.apply_latch(&active, &set(&[]));
        assert!(changes.is_empty());
        assert!(state.is_latched(CellIndex::new(3)));

        let changes = state.apply_latch(&set(&[]), &active);
        assert_eq!(
            changes,
            [StateChange::Latched {
                index: CellIndex::new(3),
                latched: false
            }]
        );
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut state = GridState::new(10);
        assert_eq!(
            state.set_selected(Some(CellIndex::new(4))),
            Some(StateChange::Selected {
                index: Some(CellIndex::new(4))
            })
        );
        assert_eq!(
            state.set_selected(Some(CellIndex::new(7))),
            Some(StateChange::Selected {
                index: Some(CellIndex::new(7))
            })
        );
        assert!(!state.is_selected(CellIndex::new(4)));
        assert!(state.is_selected(CellIndex::new(7)));
    }

    #[test]
    fn test_reselecting_is_a_noop() {
        let mut state = GridState::new(10);
        state.set_selected(Some(CellIndex::new(4)));
        assert_eq!(state.set_selected(Some(CellIndex::new(4))), None);
    }

    #[test]
    fn test_resize_preserves_in_range_state() {
        let mut state = GridState::new(9);
        state.apply_latch(&set(&[]), &set(&[2, 8]));
        state.set_selected(Some(CellIndex::new(2)));

        assert_eq!(state.resize(4), None);
        assert_eq!(state.len(), 4);
        assert!(state.is_latched(CellIndex::new(2)));
        assert_eq!(state.selected(), Some(CellIndex::new(2)));

        // Growing back starts the new cells clear.
        assert_eq!(state.resize(9), None);
        assert!(!state.is_latched(CellIndex::new(8)));
    }

    #[test]
    fn test_resize_clears_out_of_range_selection() {
        let mut state = GridState::new(9);
        state.set_selected(Some(CellIndex::new(8)));
        assert_eq!(
            state.resize(4),
            Some(StateChange::Selected { index: None })
        );
        assert_eq!(state.selected(), None);
    }
}
