//! Debris CLI - play in the terminal or run headless simulations.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Debris - dodge and shoot falling space debris
#[derive(Parser, Debug)]
#[command(name = "debris")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write log records to this file (filter with RUST_LOG, default: info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play in the terminal (arrows steer, space fires, q quits)
    Play {
        /// Asset directory (default: built-in frames)
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Tic length in milliseconds (overrides config)
        #[arg(long)]
        tic_ms: Option<u64>,

        /// Never ring the terminal bell
        #[arg(long)]
        no_bell: bool,
    },

    /// Run a game headless and report the outcome
    Simulate {
        /// Surface rows
        #[arg(long, default_value = "30")]
        rows: u16,

        /// Surface columns
        #[arg(long, default_value = "80")]
        columns: u16,

        /// Maximum tics to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        tics: u64,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Steer and fire randomly instead of idling
        #[arg(long)]
        autopilot: bool,

        /// Asset directory (default: built-in frames)
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Check world invariants after every tic
        #[arg(long)]
        check_invariants: bool,

        /// Print the final screen
        #[arg(long)]
        screen: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Check an asset directory and optional config file
    Validate {
        /// Asset directory to validate
        #[arg(required = true)]
        assets: PathBuf,

        /// JSON config file to validate
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = cli::init_logging(args.log_file.as_deref()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match args.command {
        Commands::Play {
            assets,
            config,
            seed,
            tic_ms,
            no_bell,
        } => cli::play::execute(assets, config, seed, tic_ms, no_bell),

        Commands::Simulate {
            rows,
            columns,
            tics,
            seed,
            autopilot,
            assets,
            config,
            check_invariants,
            screen,
            format,
        } => cli::simulate::execute(&cli::simulate::Options {
            rows,
            columns,
            tics,
            seed,
            autopilot,
            assets,
            config,
            check_invariants,
            screen,
            format,
        }),

        Commands::Validate { assets, config } => cli::validate::execute(assets, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
