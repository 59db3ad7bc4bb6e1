//! Simulate command implementation - headless runs.

use super::output::{format_text, JsonOutcome};
use super::{load_assets, load_config, resolve_seed, CliError, OutputFormat};
use debris::invariants::check_invariants;
use debris::{Bounds, Game, HeadlessCanvas, StopReason};
use std::path::PathBuf;

/// Options for the simulate command.
#[derive(Debug)]
pub(crate) struct Options {
    pub(crate) rows: u16,
    pub(crate) columns: u16,
    pub(crate) tics: u64,
    pub(crate) seed: Option<u64>,
    pub(crate) autopilot: bool,
    pub(crate) assets: Option<PathBuf>,
    pub(crate) config: Option<PathBuf>,
    pub(crate) check_invariants: bool,
    pub(crate) screen: bool,
    pub(crate) format: OutputFormat,
}

/// Execute the simulate command.
///
/// Runs flat out (no tic delay) on a headless canvas.
///
/// # Errors
///
/// Returns an error if assets or config are invalid, or an invariant is
/// violated while checking is on.
pub(crate) fn execute(options: &Options) -> Result<(), CliError> {
    let assets = load_assets(options.assets.as_deref())?;
    let config = load_config(options.config.as_deref())?;
    let seed = resolve_seed(options.seed);
    let bounds = Bounds::new(options.rows, options.columns);

    let mut canvas = HeadlessCanvas::new(bounds);
    if options.autopilot {
        canvas = canvas.with_autopilot(seed);
    }
    let mut game = Game::new(&config, &assets, bounds, seed)?;

    let reason = loop {
        if let Some(reason) = game.finished() {
            break reason;
        }
        if game.scheduler().tic() >= options.tics {
            break StopReason::TicLimit;
        }
        game.tick(&mut canvas);

        if options.check_invariants {
            let violations = check_invariants(game.world());
            if let Some(first) = violations.first() {
                return Err(CliError::new(format!(
                    "tic {}: {first} ({} violations)",
                    game.scheduler().tic(),
                    violations.len()
                )));
            }
        }
    };

    let outcome = game.outcome(reason);
    let screen = options.screen.then(|| canvas.screen().to_lines());

    match options.format {
        OutputFormat::Text => {
            print!("{}", format_text(&outcome, seed));
            if let Some(lines) = screen {
                println!();
                for line in lines {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => {
            let json = JsonOutcome {
                seed,
                rows: options.rows,
                columns: options.columns,
                screen,
                outcome: &outcome,
            };
            let text = serde_json::to_string_pretty(&json)
                .map_err(|e| CliError::new(format!("Failed to serialize outcome: {e}")))?;
            println!("{text}");
        }
    }

    Ok(())
}
