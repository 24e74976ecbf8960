//! Add policies deciding which cards a container accepts.

use crate::card::CardValue;

/// Decides whether a card may be added to a container.
///
/// [`CardContainer::add`](super::CardContainer::add) does not consult the
/// policy; [`CardContainer::try_add`](super::CardContainer::try_add) does.
pub trait AddPolicy {
    /// Returns whether `card` may be appended to `cards`.
    fn can_add(&self, cards: &[CardValue], card: &CardValue) -> bool;
}

/// Accepts every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AcceptAll;

impl AddPolicy for AcceptAll {
    fn can_add(&self, _cards: &[CardValue], _card: &CardValue) -> bool {
        true
    }
}

/// Accepts cards while the container holds fewer than the given number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(pub usize);

impl AddPolicy for Capacity {
    fn can_add(&self, cards: &[CardValue], _card: &CardValue) -> bool {
        cards.len() < self.0
    }
}

/// Rejects a card already present in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoDuplicates;

impl AddPolicy for NoDuplicates {
    fn can_add(&self, cards: &[CardValue], card: &CardValue) -> bool {
        !cards.contains(card)
    }
}
