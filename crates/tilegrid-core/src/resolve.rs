//! Pure resolution of contact points to logical indices.

use std::collections::BTreeSet;

use crate::{
    geometry::{GeometryTable, Point},
    index::CellIndex,
    layout::GridLayout,
};

/// Resolves a batch of contact points to the set of logical indices under
/// contact.
///
/// Each point is hit-tested against the geometry table; points in spacing
/// gaps or outside the bounds contribute nothing. Matching slots are mapped
/// through the layout's slot→index bijection and the results unioned, so
/// several contacts on one cell yield that index once. Deterministic and
/// side-effect free: the same snapshot of inputs always produces the same
/// set.
///
/// `geometry` must have been computed from `layout`; the two share the slot
/// range.
///
/// # Examples
///
/// ```
/// use tilegrid_core::{resolve_contacts, GeometryTable, GridLayout, Point, Size};
///
/// let layout = GridLayout::new(2, 2).unwrap().with_forward(false);
/// let table = GeometryTable::compute(&layout, Size::new(10.0, 10.0));
///
/// // A contact in slot 0's rectangle presses logical index 1 under the
/// // reversed primary axis.
/// let active = resolve_contacts([Point::new(1.0, 1.0)], &table, &layout);
/// let indices: Vec<_> = active.iter().map(|index| index.get()).collect();
/// assert_eq!(indices, [1]);
/// ```
#[must_use]
pub fn resolve_contacts<I>(
    points: I,
    geometry: &GeometryTable,
    layout: &GridLayout,
) -> BTreeSet<CellIndex>
where
    I: IntoIterator<Item = Point>,
{
    points
        .into_iter()
        .filter_map(|point| geometry.slot_at(point))
        .map(|slot| layout.index_at(slot))
        .collect()
}
