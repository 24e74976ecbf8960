//! Deck compositions.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{CardValue, Rank, Suit};

static RANKS: [Rank; 13] = Rank::ALL;

/// A deck composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeckType {
    /// 36 cards, six through ace in each suit.
    Standard36,
    /// 52 cards, two through ace in each suit.
    #[default]
    Standard52,
    /// 52 standard cards plus a red and a black joker.
    Standard54,
}

impl DeckType {
    /// Returns the lowest rank present in the deck.
    #[must_use]
    pub const fn min_rank(self) -> Rank {
        match self {
            Self::Standard36 => Rank::Six,
            Self::Standard52 | Self::Standard54 => Rank::Two,
        }
    }

    /// Returns the number of cards of each suit.
    #[must_use]
    pub const fn cards_per_suit(self) -> usize {
        match self {
            Self::Standard36 => 9,
            Self::Standard52 | Self::Standard54 => 13,
        }
    }

    /// Returns the number of standard (non-joker) cards.
    #[must_use]
    pub const fn card_count_without_jokers(self) -> usize {
        self.cards_per_suit() * Suit::ALL.len()
    }

    /// Returns the number of jokers.
    #[must_use]
    pub const fn joker_count(self) -> usize {
        match self {
            Self::Standard54 => 2,
            Self::Standard36 | Self::Standard52 => 0,
        }
    }

    /// Returns the total number of cards, jokers included.
    #[must_use]
    pub const fn total_card_count(self) -> usize {
        self.card_count_without_jokers() + self.joker_count()
    }

    /// Returns the ranks present in the deck, lowest first.
    #[must_use]
    pub fn ranks(self) -> &'static [Rank] {
        &RANKS[RANKS.len() - self.cards_per_suit()..]
    }

    /// Builds every card of the deck, suit by suit in ordinal order with ranks
    /// ascending, followed by the red and then the black joker.
    ///
    /// ```
    /// use cardkit::DeckType;
    ///
    /// let cards = DeckType::Standard54.cards();
    /// assert_eq!(cards.len(), 54);
    /// assert!(cards[53].is_joker());
    /// ```
    #[must_use]
    pub fn cards(self) -> Vec<CardValue> {
        let mut cards = Vec::with_capacity(self.total_card_count());

        for suit in Suit::ALL {
            for &rank in self.ranks() {
                cards.push(CardValue::new(suit, rank));
            }
        }

        if self.joker_count() > 0 {
            cards.push(CardValue::joker(true));
            cards.push(CardValue::joker(false));
        }

        cards
    }
}
