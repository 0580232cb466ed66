//! Interaction state and orchestration for tile grids.
//!
//! This crate is the stateful half of the tile-grid controller. It builds on
//! the pure value types of [`tilegrid_core`] and adds:
//!
//! - [`state::GridState`] - per-cell pressed/latched flags and the exclusive
//!   selection, keyed by logical index so that state survives any number of
//!   geometry rebuilds
//! - [`tracker::ContactTracker`] - the set of active pointer contacts and
//!   their last-known positions
//! - [`controller::GridController`] - the orchestrator: it owns the layout
//!   and feature switches, coalesces configuration changes into debounced
//!   rebuilds, resolves contact batches into edge-triggered state updates,
//!   and notifies the host through an observer callback
//!
//! Rendering is deliberately absent. A host implements
//! [`controller::TileSurface`] to receive per-slot rectangles and visual
//! flags, and registers a [`event::GridObserver`] to react to discrete
//! pressed/latched/selected changes.
//!
//! # Examples
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use tilegrid_controller::{GridConfig, GridController, StateChange, TileSurface, TileVisual};
//! use tilegrid_core::{Rect, Size, Slot};
//!
//! struct Headless;
//!
//! impl TileSurface for Headless {
//!     fn bounds(&self) -> Size {
//!         Size::new(100.0, 100.0)
//!     }
//!
//!     fn present(&mut self, _slot: Slot, _rect: Rect, _visual: TileVisual) {}
//! }
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let mut controller = GridController::new(
//!     Headless,
//!     GridConfig::default(),
//!     Box::new(move |change: StateChange| sink.borrow_mut().push(change)),
//! )
//! .unwrap();
//!
//! // The first rebuild is already scheduled; the host flushes it on its
//! // next idle turn.
//! assert!(controller.poll_rebuild());
//! assert!(!controller.poll_rebuild());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod state;
pub mod tracker;

pub use self::{
    config::GridConfig,
    controller::{GridController, MoveDirection, TileSurface, TileVisual},
    error::GridError,
    event::{GridObserver, StateChange},
    state::{GridState, TileFlags},
    tracker::{ContactId, ContactTracker},
};
