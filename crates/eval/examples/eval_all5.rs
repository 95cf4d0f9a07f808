// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// Distinct values  7462
//
// High Card:       1302540
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```

use std::time::Instant;

use pokerank_eval::*;

fn main() {
    let now = Instant::now();
    let evaluator = Evaluator::default();
    println!("Tables built in  {:.3}s", now.elapsed().as_secs_f64());

    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut seen = vec![false; 7463];

    Deck::default().for_each(HAND_SIZE, |hand| {
        if let Ok(value) = evaluator.eval(hand) {
            counts[value.rank() as usize] += 1;
            seen[value.value() as usize] = true;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Distinct values  {}", seen.iter().filter(|&&s| s).count());
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }
}
