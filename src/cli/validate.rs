//! Asset validation command implementation.

// clap hands over owned values
#![allow(clippy::needless_pass_by_value)]

use super::{load_config, CliError};
use debris::Assets;
use debris::canvas::frame_size;
use std::path::PathBuf;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the assets or the config file are invalid.
pub(crate) fn execute(assets: PathBuf, config: Option<PathBuf>) -> Result<(), CliError> {
    println!("Validating: {}", assets.display());
    println!();

    let loaded = Assets::load(&assets);
    print_check("Asset directory", loaded.is_ok());
    let loaded = loaded?;

    let config_result = load_config(config.as_deref());
    if let Some(path) = &config {
        print_check(&format!("Config {}", path.display()), config_result.is_ok());
    }
    let config = config_result?;

    let (ship_rows, ship_columns) = loaded.ship_size();
    let (banner_rows, banner_columns) = frame_size(loaded.game_over().text());

    println!();
    println!("Summary:");
    println!("  Ship:       {} frames, {ship_rows}x{ship_columns}", loaded.ship().len());
    println!("  Garbage:    {} frames", loaded.garbage().len());
    println!("  Explosion:  {} frames", loaded.explosion().len());
    println!("  Game over:  {banner_rows}x{banner_columns}");
    println!(
        "  Min screen: {}x{}",
        ship_rows + 2,
        ship_columns + 2
    );
    println!("  Spawn table: {} brackets", config.spawn_table.brackets().len());

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
