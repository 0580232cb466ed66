//! The active pointer-contact set.

use tilegrid_core::Point;

/// Opaque identity of one pointer contact, assigned by the host platform.
///
/// The identity is stable from contact-begin to contact-end/cancel; the
/// tracker uses it to pair position updates with the right contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct ContactId(u64);

impl ContactId {
    /// Creates a contact identity from the host's raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

// Typical touch hardware reports at most ten simultaneous contacts.
const CONTACT_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ContactEntry {
    id: ContactId,
    position: Point,
}

/// The set of currently active contacts and their last-known positions.
///
/// `record` upserts on contact-begin and contact-move; `release` removes on
/// contact-end and contact-cancel (the two are identical - a cancelled
/// contact releases exactly like an ended one). The tracker performs no hit
/// testing itself; [`active_points`](Self::active_points) feeds the pure
/// resolution in `tilegrid_core`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactTracker {
    contacts: Vec<ContactEntry>,
}

impl ContactTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            contacts: Vec::with_capacity(CONTACT_CAPACITY),
        }
    }

    /// Inserts or updates the position of an active contact.
    pub fn record(&mut self, id: ContactId, position: Point) {
        match self.contacts.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.position = position,
            None => self.contacts.push(ContactEntry { id, position }),
        }
    }

    /// Removes a contact from the active set.
    ///
    /// Releasing an unknown identity is a no-op.
    pub fn release(&mut self, id: ContactId) {
        if let Some(index) = self.contacts.iter().position(|entry| entry.id == id) {
            self.contacts.remove(index);
        }
    }

    /// Number of active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if no contacts are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Drops every active contact.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Iterates over the last-known positions of all active contacts.
    pub fn active_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.contacts.iter().map(|entry| entry.position)
    }
}

impl Default for ContactTracker {
    fn default() -> Self {
        Self::new()
    }
}
