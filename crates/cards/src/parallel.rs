// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use std::thread;

use super::{Card, Deck};

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_tasks)
    /// and a slice of cards of length k. Hands are split among tasks by their
    /// first card, task `t` gets the hands starting at deck positions `t`,
    /// `t + num_tasks`, and so on.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        if k > n {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut hand = Vec::with_capacity(k);
                    for first in (task_id..=(n - k)).step_by(num_tasks) {
                        let rest = Deck {
                            cards: self.cards[first + 1..].to_vec(),
                        };

                        rest.for_each(k - 1, |tail| {
                            hand.clear();
                            hand.push(self.cards[first]);
                            hand.extend_from_slice(tail);
                            f(task_id, &hand);
                        });
                    }
                });
            }
        });
    }
}
