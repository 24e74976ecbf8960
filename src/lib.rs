//! Playing card values, sort orders, observable card piles and layout
//! geometry, with optional `no_std` support.
//!
//! - [`CardValue`] is a standard suit/rank card or a coloured joker, with
//!   trump-aware [`CardValue::beats`].
//! - [`CardComparer`] provides rank, suit and trump sort orders.
//! - [`CardContainer`] is a deck, hand, board, discard or pool pile that
//!   notifies subscribers after each mutation.
//! - [`layout`] arranges any number of cards as a line, stack, grid, fan or
//!   scatter.
//!
//! # Example
//!
//! ```
//! use cardkit::{
//!     CardComparer, CardContainer, CardLayoutEngine, CardLayoutSettings, CardLocation, DeckType,
//!     LayoutType,
//! };
//!
//! let mut deck = CardContainer::from_deck(CardLocation::Deck, DeckType::Standard36);
//! let mut hand = CardContainer::new(CardLocation::Hand);
//! for _ in 0..6 {
//!     if let Some(card) = deck.draw() {
//!         hand.add(card);
//!     }
//! }
//! hand.sort_by(&CardComparer::RankAscending);
//!
//! let engine = CardLayoutEngine::new(42);
//! let placements =
//!     engine.calculate_placements(LayoutType::Fan, hand.len(), &CardLayoutSettings::default());
//! assert_eq!(placements.len(), 6);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod compare;
pub mod container;
pub mod deck;
pub mod error;
pub mod layout;
mod sync;

// Re-export main types
pub use card::{CardValue, JOKER_LABEL, Rank, Suit};
pub use compare::CardComparer;
pub use container::{
    AcceptAll, AddPolicy, Capacity, CardContainer, CardLocation, ChangeKind, ContainerChange,
    NoDuplicates, SubscriptionId,
};
pub use deck::DeckType;
pub use error::{AddError, CardError};
pub use layout::{CardLayoutEngine, CardLayoutSettings, CardPlacement, LayoutType};
