//! Card value types: suits, ranks and the standard/joker card value.

extern crate alloc;

use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// The declaration order (Hearts < Diamonds < Clubs < Spades) is the suit
/// ordinal used as a secondary sort key by the comparers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in ordinal order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns whether the suit is red (hearts or diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    /// Returns whether the suit is black (clubs or spades).
    #[must_use]
    pub const fn is_black(self) -> bool {
        !self.is_red()
    }

    /// Returns the ordinal of the suit (0 for hearts through 3 for spades).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(CardError::InvalidSuit(ordinal))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, valued 2 through 14 (Ace high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

impl Rank {
    /// All ranks from two to ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the integer value of the rank (2..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the point value of the rank, counting the ace as 1 when
    /// `ace_as_one` is set and as 14 otherwise.
    #[must_use]
    pub const fn to_value(self, ace_as_one: bool) -> u8 {
        match self {
            Self::Ace if ace_as_one => 1,
            _ => self.value(),
        }
    }

    /// Returns whether the rank is a jack, queen or king.
    #[must_use]
    pub const fn is_face_card(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    /// Returns whether the rank is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Returns the short label used on card faces.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the English name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=14 => Ok(Self::ALL[value as usize - 2]),
            _ => Err(CardError::InvalidRank(value)),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Label shown for jokers.
pub const JOKER_LABEL: &str = "JOKER";

/// A playing card: either a standard suit/rank card or a coloured joker.
///
/// Equality is structural: two standard cards are equal when suit and rank
/// match, two jokers when their colour matches, and a joker never equals a
/// standard card. [`CardValue::compare_to`] is deliberately coarser (it ignores
/// suit and joker colour), so `CardValue` does not implement `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A suited, ranked card.
    Standard {
        /// The suit of the card.
        suit: Suit,
        /// The rank of the card.
        rank: Rank,
    },
    /// A joker, which has no suit or rank.
    Joker {
        /// Whether this is the red joker.
        is_red: bool,
    },
}

impl CardValue {
    /// Creates a standard card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self::Standard { suit, rank }
    }

    /// Creates a joker of the given colour.
    #[must_use]
    pub const fn joker(is_red: bool) -> Self {
        Self::Joker { is_red }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker { .. })
    }

    /// Returns whether the card is red: a red joker or a red suit.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        match *self {
            Self::Standard { suit, .. } => suit.is_red(),
            Self::Joker { is_red } => is_red,
        }
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match *self {
            Self::Standard { suit, .. } => Some(suit),
            Self::Joker { .. } => None,
        }
    }

    /// Returns the rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        match *self {
            Self::Standard { rank, .. } => Some(rank),
            Self::Joker { .. } => None,
        }
    }

    /// Compares two cards by rank alone.
    ///
    /// Jokers are equal to each other regardless of colour and greater than
    /// every standard card. Standard cards compare by rank only, so cards of
    /// equal rank and different suits compare equal even though they are not
    /// `==`.
    #[must_use]
    pub fn compare_to(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Joker { .. }, Self::Joker { .. }) => Ordering::Equal,
            (Self::Joker { .. }, Self::Standard { .. }) => Ordering::Greater,
            (Self::Standard { .. }, Self::Joker { .. }) => Ordering::Less,
            (Self::Standard { rank: a, .. }, Self::Standard { rank: b, .. }) => a.cmp(b),
        }
    }

    /// Returns whether this card beats `other` in a trick.
    ///
    /// Jokers never beat and are never beaten. With a trump suit, a trump
    /// card beats any non-trump card and a non-trump card never beats a
    /// trump card. Otherwise the card must share `other`'s suit and carry a
    /// strictly higher rank.
    ///
    /// ```
    /// use cardkit::{CardValue, Rank, Suit};
    ///
    /// let two = CardValue::new(Suit::Spades, Rank::Two);
    /// let ace = CardValue::new(Suit::Hearts, Rank::Ace);
    /// assert!(two.beats(&ace, Some(Suit::Spades)));
    /// assert!(!ace.beats(&two, Some(Suit::Spades)));
    /// ```
    #[must_use]
    pub fn beats(&self, other: &Self, trump: Option<Suit>) -> bool {
        let (
            Self::Standard { suit, rank },
            Self::Standard {
                suit: other_suit,
                rank: other_rank,
            },
        ) = (*self, *other)
        else {
            return false;
        };

        if let Some(trump) = trump {
            match (suit == trump, other_suit == trump) {
                (true, false) => return true,
                (false, true) => return false,
                _ => {}
            }
        }

        suit == other_suit && rank > other_rank
    }

    /// Returns whether this card can be placed over `other`.
    ///
    /// Same rule as [`CardValue::beats`].
    #[must_use]
    pub fn can_cover(&self, other: &Self, trump: Option<Suit>) -> bool {
        self.beats(other, trump)
    }

    /// Returns whether both cards are standard cards of the same rank.
    #[must_use]
    pub fn has_same_rank(&self, other: &Self) -> bool {
        matches!((self.rank(), other.rank()), (Some(a), Some(b)) if a == b)
    }

    /// Returns whether both cards are standard cards of the same suit.
    #[must_use]
    pub fn has_same_suit(&self, other: &Self) -> bool {
        matches!((self.suit(), other.suit()), (Some(a), Some(b)) if a == b)
    }

    /// Renders the card as rank label plus suit symbol, e.g. `"10♥"`, or
    /// [`JOKER_LABEL`] for jokers.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { suit, rank } => write!(f, "{}{}", rank.short_name(), suit.symbol()),
            Self::Joker { .. } => f.write_str(JOKER_LABEL),
        }
    }
}
