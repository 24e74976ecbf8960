//! Ordered, observable piles of cards.
//!
//! A [`CardContainer`] keeps its cards in pile order (insertion order, not a
//! sort order) and notifies its subscribers synchronously after every
//! mutation. Each successful mutating call produces exactly one
//! notification.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use cardkit::{CardContainer, CardLocation, CardValue, Rank, Suit};
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut hand = CardContainer::new(CardLocation::Hand);
//! let counter = Rc::clone(&seen);
//! hand.subscribe(move |change| counter.set(change.count()));
//!
//! hand.add(CardValue::new(Suit::Spades, Rank::Ace));
//! assert_eq!(seen.get(), 1);
//! ```

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::card::CardValue;
use crate::compare::CardComparer;
use crate::deck::DeckType;
use crate::error::AddError;

mod observer;
mod policy;

pub use observer::{ChangeKind, ContainerChange, SubscriptionId};
pub use policy::{AcceptAll, AddPolicy, Capacity, NoDuplicates};

use observer::Listeners;

/// The role of a container on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardLocation {
    /// Draw pile.
    Deck,
    /// A player's hand.
    Hand,
    /// Cards in play.
    Board,
    /// Discard pile.
    Discard,
    /// Shared pool.
    Pool,
}

/// An ordered pile of cards with a fixed location and change notification.
///
/// Subscribers run in-line on the mutating call. They receive a
/// [`ContainerChange`] rather than the container, so they cannot mutate it
/// while the notification is in progress.
#[derive(Debug)]
pub struct CardContainer<P = AcceptAll> {
    location: CardLocation,
    cards: Vec<CardValue>,
    policy: P,
    listeners: Listeners,
}

impl CardContainer {
    /// Creates an empty container that accepts every card.
    #[must_use]
    pub fn new(location: CardLocation) -> Self {
        Self::with_policy(location, AcceptAll)
    }

    /// Creates a container holding the full composition of `deck`.
    ///
    /// No notification is sent, as there are no subscribers yet.
    #[must_use]
    pub fn from_deck(location: CardLocation, deck: DeckType) -> Self {
        let mut container = Self::new(location);
        container.cards = deck.cards();
        container
    }
}

impl<P: AddPolicy> CardContainer<P> {
    /// Creates an empty container governed by `policy`.
    #[must_use]
    pub fn with_policy(location: CardLocation, policy: P) -> Self {
        Self {
            location,
            cards: Vec::new(),
            policy,
            listeners: Listeners::default(),
        }
    }

    /// Returns the location of the container.
    #[must_use]
    pub const fn location(&self) -> CardLocation {
        self.location
    }

    /// Returns the cards in pile order.
    #[must_use]
    pub fn cards(&self) -> &[CardValue] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the container is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the container holds a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &CardValue) -> bool {
        self.cards.contains(card)
    }

    /// Returns the add policy.
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Returns whether the policy would accept `card`.
    #[must_use]
    pub fn can_add(&self, card: &CardValue) -> bool {
        self.policy.can_add(&self.cards, card)
    }

    /// Appends a card to the tail of the pile.
    ///
    /// The add policy is not consulted; check [`Self::can_add`] first or use
    /// [`Self::try_add`].
    pub fn add(&mut self, card: CardValue) {
        self.cards.push(card);
        self.notify(ChangeKind::Added(card));
    }

    /// Appends a card if the add policy accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`AddError::Rejected`] without changing the container or
    /// notifying subscribers if the policy refuses the card.
    pub fn try_add(&mut self, card: CardValue) -> Result<(), AddError> {
        if !self.can_add(&card) {
            debug!(location = ?self.location, %card, "card rejected by add policy");
            return Err(AddError::Rejected);
        }

        self.add(card);
        Ok(())
    }

    /// Removes the first card equal to `card`.
    ///
    /// Returns whether a card was removed. Subscribers are notified only on
    /// removal.
    pub fn remove(&mut self, card: &CardValue) -> bool {
        let Some(index) = self.cards.iter().position(|c| c == card) else {
            return false;
        };

        let removed = self.cards.remove(index);
        self.notify(ChangeKind::Removed(removed));
        true
    }

    /// Removes and returns the tail card.
    pub fn draw(&mut self) -> Option<CardValue> {
        let card = self.cards.pop()?;
        self.notify(ChangeKind::Drawn(card));
        Some(card)
    }

    /// Empties the container and returns its former contents.
    ///
    /// The returned vector is owned by the caller and shares nothing with
    /// the container.
    pub fn remove_all(&mut self) -> Vec<CardValue> {
        let snapshot = core::mem::take(&mut self.cards);
        debug!(location = ?self.location, count = snapshot.len(), "removed all cards");
        self.notify(ChangeKind::RemovedAll);
        snapshot
    }

    /// Empties the container.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.notify(ChangeKind::Cleared);
    }

    /// Shuffles the pile with `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.notify(ChangeKind::Shuffled);
    }

    /// Sorts the pile with `comparer`. The sort is stable.
    pub fn sort_by(&mut self, comparer: &CardComparer) {
        comparer.sort(&mut self.cards);
        self.notify(ChangeKind::Sorted);
    }

    /// Registers a subscriber called after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ContainerChange<'_>) + 'static,
    {
        self.listeners.subscribe(Box::new(listener))
    }

    /// Removes a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Returns the number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self, kind: ChangeKind) {
        trace!(location = ?self.location, ?kind, count = self.cards.len(), "container changed");

        let change = ContainerChange {
            location: self.location,
            kind,
            cards: &self.cards,
        };
        self.listeners.notify(&change);
    }
}
