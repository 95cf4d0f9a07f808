// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerank Poker hand evaluator.
//!
//! Poker hand evaluator for 5 cards hands. This evaluator is a port of the
//! [Cactus Kev's][kevlink] poker evaluator with the [Paul Senzee's][senzee]
//! perfect hash for paired hands, the lookup tables are generated once when an
//! [Evaluator] is created (see examples for measuring performance on your
//! hardware).
//!
//! To use the evaluator create a hand and use [Evaluator::evaluate] to get its
//! value, 1 is a royal flush and 7462 is the weakest high card:
//!
//! ```
//! # use pokerank_eval::*;
//! let evaluator = Evaluator::default();
//!
//! let royal = parse_hand("As Ks Qs Js Ts").unwrap();
//! assert_eq!(evaluator.evaluate(&royal).unwrap(), 1);
//!
//! let worst = evaluator.eval(&parse_hand("7c 5d 4h 3s 2c").unwrap()).unwrap();
//! assert_eq!(worst.value(), 7462);
//! assert_eq!(worst.rank(), HandRank::HighCard);
//!
//! // Hands must have 5 different cards.
//! assert!(evaluator.evaluate_str("Ah Ah Kd Qc Js").is_err());
//! assert!(evaluator.evaluate_str("Ah Kd Qc Js").is_err());
//! ```
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
//! [senzee]: http://senzee.blogspot.com/2006/06/some-perfect-hash.html
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Evaluator, HAND_SIZE, HandRank, HandValue, Tables};

// Reexport cards types.
pub use pokerank_cards::{
    Card, Deck, InvalidArgument, Rank, Suit, format_card, format_hand, parse_card, parse_hand,
};
