// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Invalid input errors.
use thiserror::Error;

use crate::Card;

/// Error returned when a caller breaks the input contract of the encoder or the
/// evaluator.
///
/// There is a single kind of failure, an invalid argument, the variants only
/// describe which argument was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// The card text is not a rank symbol followed by a suit symbol.
    #[error("invalid card {0:?}")]
    CardText(String),
    /// The rank is outside 0..=12.
    #[error("invalid rank {0}")]
    Rank(u8),
    /// The suit is not one of the four suit flags.
    #[error("invalid suit 0x{0:x}")]
    Suit(u32),
    /// The packed value doesn't encode a card.
    #[error("invalid card value 0x{0:08x}")]
    CardValue(u32),
    /// The hand doesn't have exactly 5 cards.
    #[error("exactly 5 cards are required, got {0}")]
    HandSize(usize),
    /// The hand value is outside 1..=7462.
    #[error("invalid hand value {0}")]
    HandValue(u16),
    /// The same card appears twice in a hand.
    #[error("illegal hand, duplicate card {0}")]
    DuplicateCard(Card),
}
