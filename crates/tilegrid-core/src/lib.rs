//! Core value types for interactive tile grids.
//!
//! This crate provides the pure, stateless half of a tile-grid controller:
//! the layout description, the slot↔index mapping, and the geometry used to
//! resolve pointer contacts to cells. There is no mutable interaction state
//! here; see the `tilegrid-controller` crate for press/latch/selection
//! tracking built on top of these types.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Identity** - Two index domains that must never be confused
//!    - [`index::Slot`]: a cell's position in rendering/traversal order
//!    - [`index::CellIndex`]: a cell's stable logical identity, used for
//!      state storage and external callbacks
//!
//! 2. **Layout** - The value description of grid shape and traversal order
//!    - [`layout::GridLayout`]: row/column counts, the three traversal axis
//!      flags, and inter-cell spacing. Each layout fixes a bijection between
//!      slots and logical indices over `[0, len)`.
//!
//! 3. **Geometry** - Derived, ephemeral placement data
//!    - [`geometry::GeometryTable`]: one rectangle per slot, computed from a
//!      layout and the host bounds, used for point→cell hit testing
//!    - [`resolve::resolve_contacts`]: maps a batch of contact points to the
//!      set of logical indices currently under contact
//!
//! # Examples
//!
//! ```
//! use tilegrid_core::{GridLayout, Slot};
//!
//! // A 2x2 grid traversed in reverse primary order.
//! let layout = GridLayout::new(2, 2).unwrap().with_forward(false);
//!
//! let order: Vec<_> = layout
//!     .slots()
//!     .map(|slot| layout.index_at(slot).get())
//!     .collect();
//! assert_eq!(order, [1, 0, 3, 2]);
//!
//! // The mapping is invertible.
//! let slot = Slot::new(0);
//! assert_eq!(layout.slot_of(layout.index_at(slot)), slot);
//! ```

pub mod geometry;
pub mod index;
pub mod layout;
pub mod resolve;

mod mapping;

pub use self::{
    geometry::{GeometryTable, Point, Rect, Size},
    index::{CellIndex, Slot},
    layout::{GridLayout, LayoutError},
    resolve::resolve_contacts,
};
