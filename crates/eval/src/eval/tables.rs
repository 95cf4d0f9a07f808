// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator lookup tables.
//!
//! The tables are generated by walking all the equivalence classes of 5 cards
//! hands from the strongest to the weakest and assigning increasing values
//! starting from 1, this gives the same 7462 values scale as the original
//! [Cactus Kev's][kevlink] tables.
//!
//! Hands with five different ranks are indexed by their 13 bits rank pattern,
//! flushes in the flushes table and all the others in the unique table. Hands
//! with paired ranks are indexed by the product of the ranks primes through a
//! perfect hash.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html
use log::debug;
use std::time::Instant;

use super::hash::{BUCKETS, HashAdjust};
use crate::Rank;

/// Number of 13 bits rank patterns.
pub const PATTERNS: usize = 1 << 13;

/// Number of hands equivalence classes.
pub const NUM_VALUES: u16 = 7462;

/// Number of equivalence classes with at least a paired rank.
pub const NUM_PAIRED: usize = 4888;

/// Straight patterns from broadway down to the wheel.
const STRAIGHTS: [u16; 10] = [
    0x1F00, 0x0F80, 0x07C0, 0x03E0, 0x01F0, 0x00F8, 0x007C, 0x003E, 0x001F, 0x100F,
];

/// Precomputed evaluator tables, immutable once built.
#[derive(Debug, Clone)]
pub struct Tables {
    flushes: Box<[u16]>,
    unique: Box<[u16]>,
    hash_values: Box<[u16]>,
    hash_adjust: HashAdjust,
}

impl Tables {
    /// Generates the lookup tables.
    ///
    /// Panics if the perfect hash cannot be built, this doesn't depend on any
    /// input and would be a bug in the tables generation.
    pub fn new() -> Self {
        let now = Instant::now();

        let mut values = Values::default();
        let mut flushes = vec![0u16; PATTERNS];
        let mut unique = vec![0u16; PATTERNS];
        let mut paired = Vec::with_capacity(NUM_PAIRED);

        // Five distinct ranks that are not a straight.
        let high_cards = patterns(5, 0)
            .filter(|p| !STRAIGHTS.contains(p))
            .collect::<Vec<_>>();

        for &straight in &STRAIGHTS {
            flushes[straight as usize] = values.assign();
        }

        for quads in patterns(1, 0) {
            for kicker in patterns(1, quads) {
                let product = product(quads, 4) * product(kicker, 1);
                paired.push((product, values.assign()));
            }
        }

        for trips in patterns(1, 0) {
            for pair in patterns(1, trips) {
                let product = product(trips, 3) * product(pair, 2);
                paired.push((product, values.assign()));
            }
        }

        for &pattern in &high_cards {
            flushes[pattern as usize] = values.assign();
        }

        for &straight in &STRAIGHTS {
            unique[straight as usize] = values.assign();
        }

        for trips in patterns(1, 0) {
            for kickers in patterns(2, trips) {
                let product = product(trips, 3) * product(kickers, 1);
                paired.push((product, values.assign()));
            }
        }

        for pairs in patterns(2, 0) {
            for kicker in patterns(1, pairs) {
                let product = product(pairs, 2) * product(kicker, 1);
                paired.push((product, values.assign()));
            }
        }

        for pair in patterns(1, 0) {
            for kickers in patterns(3, pair) {
                let product = product(pair, 2) * product(kickers, 1);
                paired.push((product, values.assign()));
            }
        }

        for &pattern in &high_cards {
            unique[pattern as usize] = values.assign();
        }

        assert_eq!(values.count(), NUM_VALUES);
        assert_eq!(paired.len(), NUM_PAIRED);

        let products = paired.iter().map(|&(p, _)| p).collect::<Vec<_>>();
        let Some(hash_adjust) = HashAdjust::build(&products) else {
            panic!("Cannot build perfect hash for {} products", products.len());
        };

        let mut hash_values = vec![0u16; BUCKETS];
        for (product, value) in paired {
            hash_values[hash_adjust.bucket(product)] = value;
        }

        debug!("Lookup tables generated in {:?}", now.elapsed());

        Self {
            flushes: flushes.into_boxed_slice(),
            unique: unique.into_boxed_slice(),
            hash_values: hash_values.into_boxed_slice(),
            hash_adjust,
        }
    }

    /// Returns the value of a flush given its rank pattern.
    #[inline]
    pub fn flush(&self, pattern: usize) -> u16 {
        self.flushes[pattern]
    }

    /// Returns the value of a straight or high card hand given its rank
    /// pattern, or zero if the pattern has less than five ranks.
    #[inline]
    pub fn unique(&self, pattern: usize) -> u16 {
        self.unique[pattern]
    }

    /// Returns the value of a paired hand given its primes product.
    #[inline]
    pub fn paired(&self, product: u32) -> u16 {
        self.hash_values[self.hash_adjust.bucket(product)]
    }

    /// The flushes table indexed by rank pattern.
    pub fn flushes(&self) -> &[u16] {
        &self.flushes
    }

    /// The unique table indexed by rank pattern.
    pub fn unique_values(&self) -> &[u16] {
        &self.unique
    }

    /// The paired hands values indexed by hash bucket.
    pub fn hash_values(&self) -> &[u16] {
        &self.hash_values
    }

    /// The perfect hash adjust table.
    pub fn hash_adjust(&self) -> &HashAdjust {
        &self.hash_adjust
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}

/// Values counter.
#[derive(Default)]
struct Values(u16);

impl Values {
    fn assign(&mut self) -> u16 {
        self.0 += 1;
        self.0
    }

    fn count(&self) -> u16 {
        self.0
    }
}

/// Returns the rank patterns with `count` ranks that don't overlap `exclude`
/// from the strongest to the weakest.
///
/// For patterns with the same number of ranks a greater number means higher
/// ranks, so going down numerically gives the kickers ordering.
fn patterns(count: u32, exclude: u16) -> impl Iterator<Item = u16> {
    (0..PATTERNS as u16)
        .rev()
        .filter(move |p| p.count_ones() == count && p & exclude == 0)
}

/// Product of the primes of each rank in the pattern, each rank repeated
/// `count` times.
fn product(pattern: u16, count: u32) -> u32 {
    Rank::ranks()
        .filter(|&r| pattern & (1 << r as u16) != 0)
        .map(|r| r.prime().pow(count))
        .product()
}
