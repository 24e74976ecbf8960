//! Change notifications for card containers.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::CardValue;

use super::CardLocation;

/// The mutation that triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A card was appended.
    Added(CardValue),
    /// A card was removed by value.
    Removed(CardValue),
    /// The tail card was drawn.
    Drawn(CardValue),
    /// All cards were taken as a snapshot.
    RemovedAll,
    /// All cards were discarded.
    Cleared,
    /// The cards were shuffled.
    Shuffled,
    /// The cards were sorted.
    Sorted,
}

/// A notification delivered to subscribers after a mutation.
#[derive(Debug, Clone, Copy)]
pub struct ContainerChange<'a> {
    /// Location of the container that changed.
    pub location: CardLocation,
    /// What changed.
    pub kind: ChangeKind,
    /// The cards after the change.
    pub cards: &'a [CardValue],
}

impl ContainerChange<'_> {
    /// Returns the number of cards after the change.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ContainerChange<'_>)>;

/// Ordered list of subscribers, notified in subscription order.
#[derive(Default)]
pub(super) struct Listeners {
    entries: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Listeners {
    pub(super) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(super) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn notify(&mut self, change: &ContainerChange<'_>) {
        for (_, listener) in &mut self.entries {
            listener(change);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}
