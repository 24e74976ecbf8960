//! Sort orders over card values.

use core::cmp::Ordering;

use crate::card::{CardValue, Suit};

/// A sort strategy for card values.
///
/// Every strategy places jokers at the high end of the chosen direction and
/// orders the two jokers by colour (black below red when ascending).
///
/// The rank-only strategies treat standard cards of equal rank as tied, so
/// sorting with them keeps the existing relative order of those cards. The
/// suit-aware strategies and [`CardComparer::WithTrump`] only tie equal
/// cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardComparer {
    /// Lowest rank first, jokers last.
    RankAscending,
    /// Highest rank first, jokers first.
    RankDescending,
    /// By suit ordinal, then rank, both ascending. Jokers last.
    SuitThenRankAscending,
    /// By suit ordinal, then rank, both descending. Jokers first.
    SuitThenRankDescending,
    /// Trump cards rank above every non-trump card; ties are broken by suit
    /// ordinal and then rank. `ascending` sets the direction of every key.
    WithTrump {
        /// The trump suit.
        trump: Suit,
        /// Whether to sort from low to high.
        ascending: bool,
    },
}

impl CardComparer {
    /// Creates a trump-aware comparer.
    #[must_use]
    pub const fn with_trump(trump: Suit, ascending: bool) -> Self {
        Self::WithTrump { trump, ascending }
    }

    /// Returns whether the comparer sorts from low to high.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        match *self {
            Self::RankAscending | Self::SuitThenRankAscending => true,
            Self::RankDescending | Self::SuitThenRankDescending => false,
            Self::WithTrump { ascending, .. } => ascending,
        }
    }

    /// Compares two cards under this strategy.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use cardkit::{CardComparer, CardValue, Rank, Suit};
    ///
    /// let cmp = CardComparer::with_trump(Suit::Clubs, true);
    /// let trump_two = CardValue::new(Suit::Clubs, Rank::Two);
    /// let heart_ace = CardValue::new(Suit::Hearts, Rank::Ace);
    /// assert_eq!(cmp.compare(&trump_two, &heart_ace), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn compare(&self, a: &CardValue, b: &CardValue) -> Ordering {
        match *self {
            Self::RankAscending => ranked(a, b, true, false),
            Self::RankDescending => ranked(a, b, false, false),
            Self::SuitThenRankAscending => ranked(a, b, true, true),
            Self::SuitThenRankDescending => ranked(a, b, false, true),
            Self::WithTrump { trump, ascending } => {
                if let (
                    CardValue::Standard { suit: a_suit, .. },
                    CardValue::Standard { suit: b_suit, .. },
                ) = (a, b)
                {
                    let trump_order = (*a_suit == trump).cmp(&(*b_suit == trump));
                    if trump_order != Ordering::Equal {
                        return directed(trump_order, ascending);
                    }
                }
                ranked(a, b, ascending, true)
            }
        }
    }

    /// Sorts `cards` in place. The sort is stable.
    pub fn sort(&self, cards: &mut [CardValue]) {
        cards.sort_by(|a, b| self.compare(a, b));
    }
}

const fn directed(order: Ordering, ascending: bool) -> Ordering {
    if ascending { order } else { order.reverse() }
}

/// Shared ranking core: joker handling, then optional suit key, then rank.
fn ranked(a: &CardValue, b: &CardValue, ascending: bool, use_suit: bool) -> Ordering {
    let order = match (a, b) {
        (CardValue::Joker { is_red: a_red }, CardValue::Joker { is_red: b_red }) => {
            a_red.cmp(b_red)
        }
        (CardValue::Joker { .. }, CardValue::Standard { .. }) => Ordering::Greater,
        (CardValue::Standard { .. }, CardValue::Joker { .. }) => Ordering::Less,
        (
            CardValue::Standard {
                suit: a_suit,
                rank: a_rank,
            },
            CardValue::Standard {
                suit: b_suit,
                rank: b_rank,
            },
        ) => {
            if use_suit {
                a_suit.cmp(b_suit).then(a_rank.cmp(b_rank))
            } else {
                a_rank.cmp(b_rank)
            }
        }
    };

    directed(order, ascending)
}
