//! Error types for card conversions and container operations.

use thiserror::Error;

/// Errors that can occur when converting raw integers into card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit ordinal outside 0..=3.
    #[error("invalid suit ordinal {0}")]
    InvalidSuit(u8),
    /// Rank value outside 2..=14.
    #[error("invalid rank value {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when adding a card through a container's policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    /// The container's add policy refused the card.
    #[error("card rejected by container policy")]
    Rejected,
}
