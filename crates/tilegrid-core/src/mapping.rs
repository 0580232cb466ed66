//! Conversion between slots and logical indices.
//!
//! Every [`GridLayout`] fixes a bijection over `[0, len)`. A slot is
//! decomposed into a primary and a secondary coordinate according to the
//! `horizontal` flag, each coordinate is optionally reversed according to
//! `forward`/`ascending`, and the pair is recomposed into a logical index.
//! The inverse runs the same steps backwards; reversal is an involution, so
//! both directions share the coordinate flips.

use crate::{
    index::{CellIndex, Slot},
    layout::GridLayout,
};

impl GridLayout {
    /// Maps a rendering slot to the logical index occupying it.
    ///
    /// Total over `[0, len)` and bijective for a fixed layout;
    /// [`slot_of`](Self::slot_of) is its inverse.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use tilegrid_core::GridLayout;
    ///
    /// let layout = GridLayout::new(2, 2).unwrap();
    /// let order: Vec<_> = layout
    ///     .slots()
    ///     .map(|slot| layout.index_at(slot).get())
    ///     .collect();
    /// assert_eq!(order, [0, 1, 2, 3]);
    ///
    /// let reversed = layout.with_forward(false);
    /// let order: Vec<_> = reversed
    ///     .slots()
    ///     .map(|slot| reversed.index_at(slot).get())
    ///     .collect();
    /// assert_eq!(order, [1, 0, 3, 2]);
    /// ```
    #[must_use]
    pub fn index_at(&self, slot: Slot) -> CellIndex {
        let len = self.len();
        assert!(
            slot.get() < len,
            "slot {slot} out of range for grid of {len} cells"
        );
        let rows = usize::from(self.rows());
        let columns = usize::from(self.columns());

        let (primary, secondary) = if self.horizontal() {
            (slot.get() % rows, slot.get() / rows)
        } else {
            (slot.get() / columns, slot.get() % columns)
        };
        let primary = if self.forward() {
            primary
        } else {
            rows - 1 - primary
        };
        let secondary = if self.ascending() {
            secondary
        } else {
            columns - 1 - secondary
        };

        CellIndex::new(secondary * rows + primary)
    }

    /// Maps a logical index back to the rendering slot it occupies.
    ///
    /// Inverse of [`index_at`](Self::index_at):
    /// `layout.slot_of(layout.index_at(s)) == s` for every valid slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    #[must_use]
    pub fn slot_of(&self, index: CellIndex) -> Slot {
        let len = self.len();
        assert!(
            index.get() < len,
            "cell index {index} out of range for grid of {len} cells"
        );
        let rows = usize::from(self.rows());
        let columns = usize::from(self.columns());

        let primary = index.get() % rows;
        let secondary = index.get() / rows;
        let primary = if self.forward() {
            primary
        } else {
            rows - 1 - primary
        };
        let secondary = if self.ascending() {
            secondary
        } else {
            columns - 1 - secondary
        };

        Slot::new(if self.horizontal() {
            secondary * rows + primary
        } else {
            primary * columns + secondary
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        index::{CellIndex, Slot},
        layout::GridLayout,
    };

    fn layout(
        rows: u16,
        columns: u16,
        horizontal: bool,
        forward: bool,
        ascending: bool,
    ) -> GridLayout {
        GridLayout::new(rows, columns)
            .unwrap()
            .with_horizontal(horizontal)
            .with_forward(forward)
            .with_ascending(ascending)
    }

    fn mapped_order(layout: &GridLayout) -> Vec<usize> {
        layout
            .slots()
            .map(|slot| layout.index_at(slot).get())
            .collect()
    }

    #[test]
    fn test_identity_when_all_flags_forward() {
        let layout = layout(2, 2, true, true, true);
        assert_eq!(mapped_order(&layout), [0, 1, 2, 3]);
    }

    #[test]
    fn test_reversed_primary_axis() {
        let layout = layout(2, 2, true, false, true);
        assert_eq!(mapped_order(&layout), [1, 0, 3, 2]);
    }

    #[test]
    fn test_reversed_secondary_axis() {
        let layout = layout(2, 2, true, true, false);
        assert_eq!(mapped_order(&layout), [2, 3, 0, 1]);
    }

    #[test]
    fn test_vertical_primary_axis_transposes() {
        let layout = layout(2, 3, false, true, true);
        assert_eq!(mapped_order(&layout), [0, 2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_single_row_degenerates_to_line() {
        let line = layout(1, 5, true, true, true);
        assert_eq!(mapped_order(&line), [0, 1, 2, 3, 4]);
        // Reversing the degenerate axis is a no-op.
        let reversed = layout(1, 5, true, false, true);
        assert_eq!(mapped_order(&reversed), [0, 1, 2, 3, 4]);
        let descending = layout(1, 5, true, true, false);
        assert_eq!(mapped_order(&descending), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_single_column_degenerates_to_line() {
        let line = layout(5, 1, true, true, true);
        assert_eq!(mapped_order(&line), [0, 1, 2, 3, 4]);
        let reversed = layout(5, 1, true, false, true);
        assert_eq!(mapped_order(&reversed), [4, 3, 2, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_at_rejects_out_of_range_slot() {
        let layout = layout(2, 2, true, true, true);
        let _ = layout.index_at(Slot::new(4));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_slot_of_rejects_out_of_range_index() {
        let layout = layout(2, 2, true, true, true);
        let _ = layout.slot_of(CellIndex::new(4));
    }

    proptest! {
        #[test]
        fn mapping_is_a_permutation(
            rows in 1u16..=6,
            columns in 1u16..=6,
            horizontal: bool,
            forward: bool,
            ascending: bool,
        ) {
            let layout = layout(rows, columns, horizontal, forward, ascending);
            let mut seen = vec![false; layout.len()];
            for slot in layout.slots() {
                let index = layout.index_at(slot).get();
                prop_assert!(index < layout.len());
                prop_assert!(!seen[index], "index {index} produced twice");
                seen[index] = true;
            }
            prop_assert!(seen.iter().all(|&hit| hit));
        }

        #[test]
        fn slot_of_inverts_index_at(
            rows in 1u16..=6,
            columns in 1u16..=6,
            horizontal: bool,
            forward: bool,
            ascending: bool,
        ) {
            let layout = layout(rows, columns, horizontal, forward, ascending);
            for slot in layout.slots() {
                prop_assert_eq!(layout.slot_of(layout.index_at(slot)), slot);
            }
            for index in layout.indices() {
                prop_assert_eq!(layout.index_at(layout.slot_of(index)), index);
            }
        }
    }
}
