// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerank command line evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::{LevelFilter, error};
use std::process::ExitCode;

pub mod commands;
use commands::{Command, Config};

#[derive(Debug, Parser)]
#[clap(name = "pokerank", version, about = "Five cards poker hand evaluator")]
struct Cli {
    /// Enable debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Evaluates 5 cards hands, e.g. "As Ks Qs Js Ts".
    Eval {
        /// The hands to evaluate, one argument per hand.
        #[clap(required = true)]
        hands: Vec<String>,
    },
    /// Shows the encoding of cards, e.g. Kd.
    Card {
        /// The cards to show.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Evaluates all the 5 cards hands and prints per category counts.
    Stats {
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Eval { hands } => Command::Eval { hands },
            CliCommand::Card { cards } => Command::Card { cards },
            CliCommand::Stats { tasks } => Command::Stats {
                tasks: tasks as usize,
            },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        command: cli.command.into(),
    };

    match commands::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
