// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerank cards types.
//!
//! This crate defines the packed [Card] type used by the hand evaluator, cards
//! can be created from a rank and a suit or parsed from their two characters
//! form:
//!
//! ```
//! # use pokerank_cards::{Card, Rank, Suit, parse_card};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(parse_card("Ah").unwrap(), ah);
//! assert_eq!(ah.to_string(), "Ah");
//!
//! // Invalid input is rejected with an error.
//! assert!(parse_card("1x").is_err());
//! ```
//!
//! and a [Deck] type for iterating all the k-cards hands in a deck, for example
//! to count all 5 cards hands:
//!
//! ```
//! # use pokerank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The **`parallel`** feature enables parallel iteration with a given number of
//! tasks, the closure `task_id` can be used to store per task data to reduce
//! contention:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_for_each() {
//! # use std::sync::atomic;
//! # use pokerank_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_for_each(4, 5, |task_id, hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 2_598_960);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit, format_card, format_hand, parse_card, parse_hand};

mod error;
pub use error::InvalidArgument;

#[cfg(feature = "parallel")]
mod parallel;
