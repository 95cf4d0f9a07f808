// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Command line commands.
use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Instant,
};

use pokerank_eval::{
    Card, Deck, Evaluator, HAND_SIZE, HandRank, Tables, format_hand, parse_card, parse_hand,
};

/// Number of hand categories.
const NUM_RANKS: usize = 9;

/// A command to run.
#[derive(Debug)]
pub enum Command {
    /// Evaluate hands given as text.
    Eval {
        /// The hands text.
        hands: Vec<String>,
    },
    /// Show cards encoding.
    Card {
        /// The cards text.
        cards: Vec<String>,
    },
    /// Evaluate all the hands in a deck.
    Stats {
        /// Number of parallel tasks.
        tasks: usize,
    },
}

/// The command line configuration.
#[derive(Debug)]
pub struct Config {
    /// The command to run.
    pub command: Command,
}

/// Runs a command.
pub fn run(config: Config) -> Result<()> {
    match config.command {
        Command::Eval { hands } => {
            let evaluator = evaluator();
            for text in &hands {
                let cards = parse_hand(text).with_context(|| format!("Hand {text:?}"))?;
                let value = evaluator
                    .eval(&cards)
                    .with_context(|| format!("Hand {text:?}"))?;
                println!("{}  {value}", format_hand(&cards));
            }
        }
        Command::Card { cards } => {
            for text in &cards {
                let card = parse_card(text)?;
                println!("{}", describe_card(card));
            }
        }
        Command::Stats { tasks } => {
            let evaluator = evaluator();
            let stats = Stats::collect(&evaluator, tasks)?;
            print!("{stats}");
        }
    }

    Ok(())
}

/// Creates an evaluator logging the tables generation time.
fn evaluator() -> Evaluator {
    let now = Instant::now();
    let evaluator = Evaluator::new(Arc::new(Tables::new()));
    debug!("Evaluator ready in {:.3}s", now.elapsed().as_secs_f64());
    evaluator
}

/// Returns a card encoding details.
fn describe_card(card: Card) -> String {
    format!(
        "{card}  0x{:08x}  rank={:?}({}) suit={:?}(0x{:04x}) prime={}",
        card.value(),
        card.rank(),
        card.rank_bits(),
        card.suit(),
        card.suit().flag(),
        card.prime(),
    )
}

/// Statistics for all the 5 cards hands.
#[derive(Debug)]
pub struct Stats {
    /// Number of hands for each category.
    pub counts: [u64; NUM_RANKS],
    /// Number of distinct values.
    pub distinct: usize,
    /// Elapsed seconds.
    pub elapsed: f64,
}

impl Stats {
    /// Evaluates all hands using `tasks` parallel tasks.
    pub fn collect(evaluator: &Evaluator, tasks: usize) -> Result<Stats> {
        if tasks == 0 {
            bail!("Number of tasks must be greater than zero");
        }

        info!("Evaluating all hands with {tasks} tasks");

        // Per task counters to reduce contention.
        let task_counters = (0..tasks)
            .map(|_| {
                (0..NUM_RANKS)
                    .map(|_| AtomicU64::new(0))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let seen = (0..=7462).map(|_| AtomicBool::new(false)).collect::<Vec<_>>();
        let errors = AtomicU64::new(0);

        let now = Instant::now();

        let count_hand = |task_id: usize, hand: &[Card]| match evaluator.eval(hand) {
            Ok(value) => {
                task_counters[task_id][value.rank() as usize].fetch_add(1, Ordering::Relaxed);
                seen[value.value() as usize].store(true, Ordering::Relaxed);
            }
            Err(_) => {
                errors.fetch_add(1, Ordering::Relaxed);
            }
        };

        let deck = Deck::default();
        if tasks == 1 {
            deck.for_each(HAND_SIZE, |hand| count_hand(0, hand));
        } else {
            deck.par_for_each(tasks, HAND_SIZE, count_hand);
        }

        let elapsed = now.elapsed().as_secs_f64();

        let errors = errors.load(Ordering::Relaxed);
        if errors > 0 {
            bail!("{errors} hands failed evaluation");
        }

        let mut counts = [0u64; NUM_RANKS];
        for (rank, count) in counts.iter_mut().enumerate() {
            *count = task_counters
                .iter()
                .map(|counters| counters[rank].load(Ordering::Relaxed))
                .sum();
        }

        let distinct = seen.iter().filter(|s| s.load(Ordering::Relaxed)).count();

        Ok(Stats {
            counts,
            distinct,
            elapsed,
        })
    }

    /// Total number of hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.total();
        writeln!(f, "Total hands      {total}")?;
        writeln!(f, "Distinct values  {}", self.distinct)?;
        writeln!(f, "Elapsed:         {:.3}s", self.elapsed)?;
        writeln!(f, "Hands/sec:       {:.0}\n", total as f64 / self.elapsed)?;

        for rank in HandRank::ranks() {
            let label = format!("{rank}:");
            writeln!(f, "{label:<17}{}", self.counts[rank as usize])?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_all_hands() {
        let evaluator = Evaluator::default();

        let stats = Stats::collect(&evaluator, 1).unwrap();
        assert_eq!(stats.total(), 2_598_960);
        assert_eq!(stats.distinct, 7462);
        assert_eq!(stats.counts[HandRank::StraightFlush as usize], 40);
        assert_eq!(stats.counts[HandRank::HighCard as usize], 1_302_540);

        let par_stats = Stats::collect(&evaluator, 4).unwrap();
        assert_eq!(par_stats.counts, stats.counts);
        assert_eq!(par_stats.distinct, stats.distinct);

        assert!(stats.to_string().contains("Full House:      3744"));
    }

    #[test]
    fn stats_zero_tasks() {
        assert!(Stats::collect(&Evaluator::default(), 0).is_err());
    }

    #[test]
    fn card_description() {
        let kd = parse_card("Kd").unwrap();
        assert_eq!(
            describe_card(kd),
            "Kd  0x08004b25  rank=King(11) suit=Diamonds(0x4000) prime=37"
        );
    }

    #[test]
    fn run_rejects_invalid_input() {
        let config = Config {
            command: Command::Eval {
                hands: vec!["As Ks Qs Js".to_string()],
            },
        };
        let err = run(config).unwrap_err();
        assert!(format!("{err:#}").contains("exactly 5 cards"));

        let config = Config {
            command: Command::Card {
                cards: vec!["1x".to_string()],
            },
        };
        assert!(run(config).is_err());
    }
}
