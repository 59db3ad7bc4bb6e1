//! Play command implementation - the interactive game.

// clap hands over owned values
#![allow(clippy::needless_pass_by_value)]

use super::output::format_text;
use super::{load_assets, load_config, resolve_seed, CliError};
use debris::{Canvas, Game, Shutdown, TerminalCanvas};
use std::path::PathBuf;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if assets or config are invalid, the terminal is too
/// small, or the terminal fails.
pub(crate) fn execute(
    assets: Option<PathBuf>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    tic_ms: Option<u64>,
    no_bell: bool,
) -> Result<(), CliError> {
    let assets = load_assets(assets.as_deref())?;
    let mut config = load_config(config.as_deref())?;
    if let Some(tic_ms) = tic_ms {
        config.tic_ms = tic_ms;
    }
    if no_bell {
        config.bell = false;
    }
    let seed = resolve_seed(seed);

    let shutdown = Shutdown::new();
    let mut canvas = TerminalCanvas::enter(shutdown.clone(), config.bell)?;

    let result = Game::new(&config, &assets, canvas.bounds(), seed)
        .map_err(CliError::from)
        .and_then(|mut game| {
            game.run(&mut canvas, &shutdown, None)
                .map_err(CliError::from)
        });

    // Leave raw mode before printing anything
    canvas.restore()?;

    let outcome = result?;
    print!("{}", format_text(&outcome, seed));
    Ok(())
}
