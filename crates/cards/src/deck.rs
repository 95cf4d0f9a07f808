// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::InvalidArgument;

/// Primes used to encode a card rank.
const PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Rank symbols indexed by rank.
const RANK_SYMBOLS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

/// A Poker card.
///
/// A card is represented using the encoding in the [Cactus Kev's][kevlink] Poker
/// hand evaluator with each card having the following format:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxbbbbb|bbbbbbbb|cdhsrrrr|xxpppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (deuce=2,trey=3,four=5,five=7,...,ace=41)
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   cdhs = suit of card
///   b = bit turned on depending on rank of card
/// ```
///
/// The packed value is the only stored field, rank, suit and prime are decoded
/// from it on demand.
///
/// [kevlink]: http://suffe.cool/poker/evaluator.html
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(u32);

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        let rank = rank as u32;
        Self(PRIMES[rank as usize] | (rank << 8) | suit.flag() | (1 << (rank + 16)))
    }

    /// Create a card from a numeric rank in 0..=12 and a suit flag.
    ///
    /// The suit must be one of [Suit::flag] values: `0x8000` clubs, `0x4000`
    /// diamonds, `0x2000` hearts or `0x1000` spades.
    pub fn encode(rank: u8, suit: u32) -> Result<Card, InvalidArgument> {
        let rank = Rank::try_from(rank)?;
        let suit = Suit::from_flag(suit).ok_or(InvalidArgument::Suit(suit))?;
        Ok(Card::new(rank, suit))
    }

    /// The packed card value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0x8 => Suit::Clubs,
            0x4 => Suit::Diamonds,
            0x2 => Suit::Hearts,
            0x1 => Suit::Spades,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ranks()
            .nth(self.rank_bits() as usize)
            .unwrap_or_else(|| panic!("Invalid rank 0x{:x}", self.0))
    }

    /// Returns the prime associated with this card rank.
    #[inline]
    pub fn prime(&self) -> u32 {
        self.0 & 0xff
    }

    /// Returns the rank bits.
    #[inline]
    pub fn rank_bits(&self) -> u8 {
        ((self.0 >> 8) & 0xf) as u8
    }

    /// Returns the suit bits.
    #[inline]
    pub fn suit_bits(&self) -> u8 {
        ((self.0 >> 12) & 0xf) as u8
    }
}

impl TryFrom<u32> for Card {
    type Error = InvalidArgument;

    /// Decodes a packed value, all fields must agree with each other.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let rank = ((value >> 8) & 0xf) as u8;
        let suit = value & 0xf000;
        match Card::encode(rank, suit) {
            Ok(card) if card.0 == value => Ok(card),
            _ => Err(InvalidArgument::CardValue(value)),
        }
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> u32 {
        card.0
    }
}

impl FromStr for Card {
    type Err = InvalidArgument;

    /// Parses a two characters card like `"Kd"` or `"Ts"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let invalid = || InvalidArgument::CardText(text.to_string());

        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_symbol(r).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(s).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

/// Parses a card from its two characters form, e.g. `"As"` or `"7h"`.
pub fn parse_card(text: &str) -> Result<Card, InvalidArgument> {
    text.parse()
}

/// Returns the two characters form of a card, the inverse of [parse_card].
pub fn format_card(card: Card) -> String {
    card.to_string()
}

/// Parses whitespace separated cards, e.g. `"Kd 5s Jc Ah Qc"`.
///
/// The number of cards is not checked here, the evaluator rejects hands that
/// don't have five cards.
pub fn parse_hand(text: &str) -> Result<Vec<Card>, InvalidArgument> {
    text.split_whitespace().map(parse_card).collect()
}

/// Joins the cards two characters form with a space.
pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The prime number used for this rank in the card encoding.
    pub fn prime(self) -> u32 {
        PRIMES[self as usize]
    }

    /// The rank symbol, one of `23456789TJQKA`.
    pub fn symbol(self) -> char {
        RANK_SYMBOLS[self as usize]
    }

    /// Returns the rank for a symbol in `23456789TJQKA`.
    pub fn from_symbol(c: char) -> Option<Rank> {
        RANK_SYMBOLS
            .iter()
            .position(|&s| s == c)
            .and_then(|pos| Rank::ranks().nth(pos))
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidArgument;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .nth(rank as usize)
            .ok_or(InvalidArgument::Rank(rank))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
///
/// The discriminant is the suit nibble of the card encoding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The one-hot suit flag in the card encoding.
    #[inline]
    pub fn flag(self) -> u32 {
        (self as u32) << 12
    }

    /// Returns the suit for a one-hot suit flag.
    pub fn from_flag(flag: u32) -> Option<Suit> {
        Suit::suits().find(|s| s.flag() == flag)
    }

    /// The suit symbol, one of `shdc`.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Returns the suit for a symbol in `shdc`.
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cards Deck used to enumerate hands.
#[derive(Debug, Clone)]
pub struct Deck {
    pub(crate) cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand in lexicographic order of
    /// the deck positions.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = (0..k).collect::<Vec<_>>();
        let mut hand = self.cards[..k].to_vec();

        loop {
            f(&hand);

            // Find the rightmost position that can move forward.
            let mut i = k;
            loop {
                if i == 0 {
                    return;
                }

                i -= 1;
                if pos[i] < n - k + i {
                    break;
                }
            }

            pos[i] += 1;
            hand[i] = self.cards[pos[i]];

            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
                hand[j] = self.cards[pos[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
