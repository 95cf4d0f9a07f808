// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! This evaluator is a port of the [Cactus Kev's][kevlink] poker evaluator with
//! the [Paul Senzee's][senzee] perfect hash for hands with paired ranks.
//!
//! The [Evaluator::evaluate] method returns a value between 1 (royal flush) and
//! 7462 (7-5-4-3-2 offsuit), lower values are stronger hands and hands of the
//! same strength get the same value. The [Evaluator::eval] method wraps the
//! value in a [HandValue] that also gives the [HandRank] category.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
//! [senzee]: http://senzee.blogspot.com/2006/06/some-perfect-hash.html
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::{Card, InvalidArgument, parse_hand};

pub mod hash;
pub mod tables;
pub use tables::Tables;

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

/// The hand category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns the category of a hand value.
    pub fn from_value(value: u16) -> HandRank {
        match value {
            0..=10 => HandRank::StraightFlush,
            11..=166 => HandRank::FourOfAKind,
            167..=322 => HandRank::FullHouse,
            323..=1599 => HandRank::Flush,
            1600..=1609 => HandRank::Straight,
            1610..=2467 => HandRank::ThreeOfAKind,
            2468..=3325 => HandRank::TwoPair,
            3326..=6185 => HandRank::OnePair,
            _ => HandRank::HighCard,
        }
    }

    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// A hand value on the 1..=7462 scale.
///
/// The ordering is the numeric ordering of the value, a smaller value is a
/// stronger hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct HandValue(u16);

impl HandValue {
    /// The numeric value, 1 is the strongest hand.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        HandRank::from_value(self.0)
    }

    /// Checks if this hand beats the other hand.
    pub fn is_stronger_than(&self, other: &HandValue) -> bool {
        self.0 < other.0
    }
}

impl TryFrom<u16> for HandValue {
    type Error = InvalidArgument;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if (1..=tables::NUM_VALUES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidArgument::HandValue(value))
        }
    }
}

impl From<HandValue> for u16 {
    fn from(value: HandValue) -> Self {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}

/// Five cards hand evaluator.
///
/// The evaluator holds a reference to immutable tables, it can be cloned
/// cheaply and shared between threads.
#[derive(Debug, Clone)]
pub struct Evaluator {
    tables: Arc<Tables>,
}

impl Evaluator {
    /// Creates an evaluator that uses the given tables.
    pub fn new(tables: Arc<Tables>) -> Self {
        Self { tables }
    }

    /// Evaluates a 5 cards hand, the cards order doesn't matter.
    ///
    /// Returns an error if the hand doesn't have 5 cards or if a card appears
    /// more than once.
    pub fn evaluate(&self, cards: &[Card]) -> Result<u16, InvalidArgument> {
        let &[c1, c2, c3, c4, c5] = cards else {
            return Err(InvalidArgument::HandSize(cards.len()));
        };

        let mut sorted = [c1, c2, c3, c4, c5];
        sorted.sort_unstable_by_key(Card::value);
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(InvalidArgument::DuplicateCard(w[0]));
        }

        Ok(self.lookup([
            c1.value(),
            c2.value(),
            c3.value(),
            c4.value(),
            c5.value(),
        ]))
    }

    /// Evaluates a 5 cards hand and returns its [HandValue].
    pub fn eval(&self, cards: &[Card]) -> Result<HandValue, InvalidArgument> {
        self.evaluate(cards).map(HandValue)
    }

    /// Parses and evaluates a hand like `"As Ks Qs Js Ts"`.
    pub fn evaluate_str(&self, text: &str) -> Result<u16, InvalidArgument> {
        self.evaluate(&parse_hand(text)?)
    }

    #[inline]
    fn lookup(&self, [v1, v2, v3, v4, v5]: [u32; HAND_SIZE]) -> u16 {
        let pattern = ((v1 | v2 | v3 | v4 | v5) >> 16) as usize;

        // Flushes and straight flushes.
        if v1 & v2 & v3 & v4 & v5 & 0xF000 != 0 {
            return self.tables.flush(pattern);
        }

        // Straights and high cards.
        let value = self.tables.unique(pattern);
        if value != 0 {
            return value;
        }

        let product = (v1 & 0xFF) * (v2 & 0xFF) * (v3 & 0xFF) * (v4 & 0xFF) * (v5 & 0xFF);
        self.tables.paired(product)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(Tables::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Rank, Suit, parse_card};
    use ahash::HashSet;
    use rand::prelude::*;
    use std::{sync::LazyLock, thread};

    // Built once for all the tests in this module.
    static EVALUATOR: LazyLock<Evaluator> = LazyLock::new(Evaluator::default);

    fn eval(hand: &str) -> u16 {
        EVALUATOR.evaluate_str(hand).unwrap()
    }

    #[test]
    fn reference_values() {
        let cases = [
            ("As Ks Qs Js Ts", 1),
            ("Td 9d 8d 7d 6d", 5),
            ("5h 4h 3h 2h Ah", 10),
            ("Ah Ad Ac As Kd", 11),
            ("2h 2d 2c 2s 3d", 166),
            ("Ah Ad Ac Ks Kd", 167),
            ("Kh Kd Kc 7s 7d", 185),
            ("Ah Kh Qh Jh 9h", 323),
            ("7h 5h 4h 3h 2h", 1599),
            ("Ah Kd Qh Jh Th", 1600),
            ("9c 8d 7h 6s 5c", 1605),
            ("5h 4d 3h 2h Ah", 1609),
            ("Ah Ad Ac Ks Qd", 1610),
            ("Ah Ad Kc Ks Qd", 2468),
            ("Jd Jc 8h 8s 3c", 2862),
            ("3c 3d 2h 2s 4c", 3325),
            ("Ah Ad Kc Qs Jd", 3326),
            ("Qs Qd 4h 3c 2d", 3985),
            ("Ah Kd Qc Js 9d", 6186),
            ("Ks Qh Jd 9c 8s", 6686),
            ("7c 5d 4h 3s 2c", 7462),
        ];

        for (hand, value) in cases {
            assert_eq!(eval(hand), value, "{hand}");
        }
    }

    #[test]
    fn hand_ranks() {
        let cases = [
            ("As Ks Qs Js Ts", HandRank::StraightFlush),
            ("9c 9d 9h 9s 2c", HandRank::FourOfAKind),
            ("9c 9d 9h 2s 2c", HandRank::FullHouse),
            ("Ac 9c 7c 4c 2c", HandRank::Flush),
            ("6c 5d 4h 3s 2c", HandRank::Straight),
            ("9c 9d 9h Ks 2c", HandRank::ThreeOfAKind),
            ("9c 9d Th Ts 2c", HandRank::TwoPair),
            ("9c 9d Th Js 2c", HandRank::OnePair),
            ("9c 8d Th Js 2c", HandRank::HighCard),
        ];

        for (hand, rank) in cases {
            let value = EVALUATOR.eval(&parse_hand(hand).unwrap()).unwrap();
            assert_eq!(value.rank(), rank, "{hand}");
        }

        assert_eq!(HandRank::from_value(1), HandRank::StraightFlush);
        assert_eq!(HandRank::from_value(7462), HandRank::HighCard);
        assert_eq!(HandRank::FourOfAKind.to_string(), "Four of a Kind");
        assert!(HandRank::StraightFlush > HandRank::HighCard);
    }

    #[test]
    fn hand_value_ordering() {
        let royal = EVALUATOR.eval(&parse_hand("As Ks Qs Js Ts").unwrap()).unwrap();
        let quads = EVALUATOR.eval(&parse_hand("Ac Ad Ah As 2c").unwrap()).unwrap();

        assert!(royal.is_stronger_than(&quads));
        assert!(!quads.is_stronger_than(&royal));
        assert!(royal < quads);
        assert_eq!(royal.value(), 1);
        assert_eq!(royal.to_string(), "Straight Flush (1)");
    }

    #[test]
    fn hand_value_from_number() {
        // Hand values are serialized as their number and validated on the way back.
        assert_eq!(u16::from(HandValue::try_from(1).unwrap()), 1);
        assert_eq!(
            HandValue::try_from(7462).map(|v| v.rank()),
            Ok(HandRank::HighCard)
        );
        assert_eq!(HandValue::try_from(0), Err(InvalidArgument::HandValue(0)));
        assert_eq!(
            HandValue::try_from(7463),
            Err(InvalidArgument::HandValue(7463))
        );
        assert_eq!(
            HandValue::try_from(9000),
            Err(InvalidArgument::HandValue(9000))
        );
    }

    #[test]
    fn suits_dont_matter_without_flush() {
        assert_eq!(eval("Ah Kd Qc Js Th"), eval("As Kh Qd Jc Ts"));
        assert_eq!(eval("Ah Kd Qc Js Th"), 1600);
        assert_eq!(eval("9h 9d 4c 4s 2h"), eval("9c 9s 4d 4h 2s"));
        assert_eq!(eval("Ah Jd 8c 6s 3h"), eval("Ad Jh 8s 6c 3c"));
    }

    #[test]
    fn cards_order_doesnt_matter() {
        let mut rng = rand::rng();
        let deck = Deck::default().into_iter().collect::<Vec<_>>();

        for _ in 0..1000 {
            let mut hand = deck
                .choose_multiple(&mut rng, HAND_SIZE)
                .copied()
                .collect::<Vec<_>>();
            let value = EVALUATOR.evaluate(&hand).unwrap();

            hand.shuffle(&mut rng);
            assert_eq!(EVALUATOR.evaluate(&hand).unwrap(), value, "{hand:?}");

            hand.reverse();
            assert_eq!(EVALUATOR.evaluate(&hand).unwrap(), value, "{hand:?}");
        }
    }

    #[test]
    fn rejects_duplicates() {
        let ah = parse_card("Ah").unwrap();
        assert_eq!(
            EVALUATOR.evaluate_str("Ah Kd Ah Js Th"),
            Err(InvalidArgument::DuplicateCard(ah))
        );

        let c2 = Card::new(Rank::Deuce, Suit::Clubs);
        assert_eq!(
            EVALUATOR.evaluate(&[c2; 5]),
            Err(InvalidArgument::DuplicateCard(c2))
        );
    }

    #[test]
    fn rejects_hand_size() {
        assert_eq!(
            EVALUATOR.evaluate_str("Ah Kd Qc Js"),
            Err(InvalidArgument::HandSize(4))
        );
        assert_eq!(
            EVALUATOR.evaluate_str("Ah Kd Qc Js Th 9h"),
            Err(InvalidArgument::HandSize(6))
        );
        assert_eq!(EVALUATOR.evaluate(&[]), Err(InvalidArgument::HandSize(0)));
    }

    #[test]
    fn rejects_invalid_cards() {
        assert_eq!(
            EVALUATOR.evaluate_str("Ah Kd Qc Js 1x"),
            Err(InvalidArgument::CardText("1x".to_string()))
        );
    }

    #[test]
    fn all_hands() {
        let mut counts = [0usize; 9];
        let mut bounds = [(u16::MAX, 0u16); 9];
        let mut values = HashSet::default();

        Deck::default().for_each(HAND_SIZE, |hand| {
            let value = EVALUATOR.eval(hand).unwrap();
            assert!((1..=7462).contains(&value.value()));

            let rank = value.rank() as usize;
            counts[rank] += 1;
            bounds[rank].0 = bounds[rank].0.min(value.value());
            bounds[rank].1 = bounds[rank].1.max(value.value());
            values.insert(value.value());
        });

        assert_eq!(values.len(), 7462);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);

        // A stronger category never overlaps a weaker one.
        for rank in 1..bounds.len() {
            let (weaker, stronger) = (bounds[rank - 1], bounds[rank]);
            assert!(stronger.1 < weaker.0, "{rank}: {stronger:?} {weaker:?}");
        }
    }

    #[test]
    fn shared_between_threads() {
        let evaluator = Evaluator::new(Arc::new(Tables::new()));
        let hands = [
            ("As Ks Qs Js Ts", 1),
            ("Ah Ad Ac Ks Kd", 167),
            ("7c 5d 4h 3s 2c", 7462),
        ];

        thread::scope(|s| {
            for _ in 0..4 {
                let evaluator = evaluator.clone();
                s.spawn(move || {
                    for _ in 0..100 {
                        for (hand, value) in hands {
                            assert_eq!(evaluator.evaluate_str(hand), Ok(value));
                        }
                    }
                });
            }
        });
    }
}
