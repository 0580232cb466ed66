//! Geometric primitives and the per-slot rectangle table.
//!
//! All coordinates live in the host's rendering coordinate space, origin at
//! the top-left, `x` growing right and `y` growing down. Rectangles use
//! half-open extents: the left/top edges are inside, the right/bottom edges
//! are not, so adjacent cells never both claim a shared boundary point.

use crate::{
    index::Slot,
    layout::GridLayout,
};

/// A point in the rendering coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in the rendering coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: f32,
    /// Top edge (inclusive).
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle has no area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns `true` if `point` lies inside the rectangle.
    ///
    /// Containment is half-open: points on the left/top edges are inside,
    /// points on the right/bottom edges are not. An empty rectangle contains
    /// nothing.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// The derived placement of every slot inside the host bounds.
///
/// A geometry table is ephemeral: it is recomputed from the layout and the
/// current bounds on every rebuild and never persisted. Rectangles are
/// stored in slot order, tiling the bounds row-major (`columns` across,
/// `rows` down) with the layout's spacing between neighbors. Points falling
/// into a spacing gap, or outside the bounds, hit no slot.
///
/// # Examples
///
/// ```
/// use tilegrid_core::{GeometryTable, GridLayout, Point, Size, Slot};
///
/// let layout = GridLayout::new(2, 2).unwrap().with_spacing(2.0).unwrap();
/// let table = GeometryTable::compute(&layout, Size::new(10.0, 10.0));
///
/// // Cells are 4x4 with a 2-unit gap between them.
/// assert_eq!(table.slot_at(Point::new(1.0, 1.0)), Some(Slot::new(0)));
/// assert_eq!(table.slot_at(Point::new(7.0, 1.0)), Some(Slot::new(1)));
/// // The gap resolves to nothing.
/// assert_eq!(table.slot_at(Point::new(5.0, 1.0)), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryTable {
    cells: Vec<Rect>,
}

impl GeometryTable {
    /// Computes the rectangle table for `layout` inside `bounds`.
    ///
    /// Each cell's extent along an axis is
    /// `(total - spacing * (n - 1)) / n`; bounds too small to fit the
    /// requested spacing produce empty (zero-extent) cells rather than
    /// negative ones.
    #[must_use]
    pub fn compute(layout: &GridLayout, bounds: Size) -> Self {
        let spacing = layout.spacing();
        let cell_width = cell_extent(bounds.width, layout.columns(), spacing);
        let cell_height = cell_extent(bounds.height, layout.rows(), spacing);

        let mut cells = Vec::with_capacity(layout.len());
        let mut y = 0.0;
        for _ in 0..layout.rows() {
            let mut x = 0.0;
            for _ in 0..layout.columns() {
                cells.push(Rect::new(x, y, cell_width, cell_height));
                x += cell_width + spacing;
            }
            y += cell_height + spacing;
        }
        Self { cells }
    }

    /// Number of slots in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the table has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the rectangle assigned to `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below [`len`](Self::len).
    #[must_use]
    pub fn rect(&self, slot: Slot) -> Rect {
        self.cells[slot.get()]
    }

    /// Returns the rectangle assigned to `slot`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<Rect> {
        self.cells.get(slot.get()).copied()
    }

    /// Finds the slot whose rectangle contains `point`.
    ///
    /// Rectangles are disjoint, so at most one slot matches; points in
    /// spacing gaps or outside the bounds return `None`.
    #[must_use]
    pub fn slot_at(&self, point: Point) -> Option<Slot> {
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .map(Slot::new)
    }

    /// Iterates over `(slot, rectangle)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Rect)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, rect)| (Slot::new(i), *rect))
    }
}

fn cell_extent(total: f32, divisions: u16, spacing: f32) -> f32 {
    let gaps = spacing * f32::from(divisions - 1);
    ((total - gaps) / f32::from(divisions)).max(0.0)
}
