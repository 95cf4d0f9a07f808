// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Perfect hash for prime products.
//!
//! This is the [Paul Senzee's][senzee] variation of the Cactus Kev's evaluator
//! that replaces the binary search on prime products with a two stages hash: the
//! product is mixed into a 13 bits value `a` and a 9 bits value `b`, and the
//! bucket is `a ^ adjust[b]`. The adjust table is computed here for the fixed
//! set of products instead of being embedded as data.
//!
//! [senzee]: http://senzee.blogspot.com/2006/06/some-perfect-hash.html
use std::cmp::Reverse;

/// Number of entries in the adjust table.
pub const ADJUST_SIZE: usize = 512;

/// Number of hash buckets.
pub const BUCKETS: usize = 8192;

/// Mixes a product into its bucket seed and its adjust table index.
#[inline]
fn mix(product: u32) -> (usize, usize) {
    let mut key = product.wrapping_add(0xE91A_AA35);
    key ^= key >> 16;
    key = key.wrapping_add(key << 8);
    key ^= key >> 4;

    let seed = key.wrapping_add(key << 2) >> 19;
    let index = (key >> 8) & 0x1FF;
    (seed as usize, index as usize)
}

/// The adjust table of the perfect hash.
#[derive(Debug, Clone)]
pub struct HashAdjust(Box<[u16; ADJUST_SIZE]>);

impl HashAdjust {
    /// Builds an adjust table that maps each product to a different bucket.
    ///
    /// Keys sharing an adjust slot are placed together, the largest groups
    /// first, each group gets the smallest displacement that moves all its
    /// keys to free buckets. Returns `None` if the products cannot be placed,
    /// this includes duplicated products.
    pub fn build(products: &[u32]) -> Option<HashAdjust> {
        let mut groups = vec![Vec::new(); ADJUST_SIZE];
        for &product in products {
            let (seed, index) = mix(product);
            groups[index].push(seed);
        }

        let mut slots = (0..ADJUST_SIZE).collect::<Vec<_>>();
        slots.sort_by_key(|&slot| (Reverse(groups[slot].len()), slot));

        let mut used = vec![false; BUCKETS];
        let mut adjust = Box::new([0u16; ADJUST_SIZE]);

        for slot in slots {
            let group = &groups[slot];
            let displacement =
                (0..BUCKETS).find(|&d| group.iter().all(|&seed| !used[seed ^ d]))?;

            for &seed in group {
                if std::mem::replace(&mut used[seed ^ displacement], true) {
                    return None;
                }
            }

            adjust[slot] = displacement as u16;
        }

        Some(HashAdjust(adjust))
    }

    /// Returns the bucket for a product, always less than [BUCKETS].
    #[inline]
    pub fn bucket(&self, product: u32) -> usize {
        let (seed, index) = mix(product);
        seed ^ self.0[index] as usize
    }

    /// The adjust table entries.
    pub fn entries(&self) -> &[u16] {
        self.0.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn mix_known_values() {
        assert_eq!(mix(48), (545, 30));
        assert_eq!(mix(420), (545, 213));
        assert_eq!(mix(104_553_157), (2392, 190));
    }

    #[test]
    fn mix_in_range() {
        for product in [0, 1, 2, 32, 1 << 20, u32::MAX - 0xE91A_AA35, u32::MAX] {
            let (seed, index) = mix(product);
            assert!(seed < BUCKETS);
            assert!(index < ADJUST_SIZE);
        }
    }

    #[test]
    fn build_places_all_products() {
        // Products of all the pairs of primes below 100.
        let primes = [
            2u32, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73,
            79, 83, 89, 97,
        ];
        let products = primes
            .iter()
            .flat_map(|p| primes.iter().filter(move |q| *q >= p).map(move |q| p * q))
            .collect::<Vec<_>>();

        let adjust = HashAdjust::build(&products).unwrap();
        assert_eq!(adjust.entries().len(), ADJUST_SIZE);

        let buckets = products
            .iter()
            .map(|&p| adjust.bucket(p))
            .collect::<HashSet<_>>();
        assert_eq!(buckets.len(), products.len());
        assert!(buckets.iter().all(|&b| b < BUCKETS));
    }

    #[test]
    fn build_rejects_duplicates() {
        assert!(HashAdjust::build(&[6, 10, 6]).is_none());
    }

    #[test]
    fn build_empty() {
        let adjust = HashAdjust::build(&[]).unwrap();
        assert!(adjust.entries().iter().all(|&d| d == 0));
    }
}
