#![no_main]

use arbitrary::Arbitrary;
use debris::invariants::check_invariants;
use debris::world::{SpawnBracket, SpawnTable};
use debris::{Assets, Bounds, Controls, Direction, Game, GameConfig, HeadlessCanvas};
use libfuzzer_sys::fuzz_target;

/// Structured input for whole-game fuzzing.
#[derive(Arbitrary, Debug)]
struct TickInput {
    /// Game seed.
    seed: u64,
    /// Surface height (capped).
    rows: u8,
    /// Surface width (capped).
    columns: u8,
    /// Starting year offset from 1957.
    year_offset: u8,
    /// Spawn delay for every year.
    spawn_delay: u8,
    /// Obstacle fall speed in tenths of a row per tic.
    garbage_speed: u8,
    /// Hits an obstacle takes before breaking.
    health: u8,
    /// One entry per tic: (rows, columns, fire).
    controls: Vec<(i8, i8, bool)>,
}

fuzz_target!(|input: TickInput| {
    let bounds = Bounds::new(
        u16::from(input.rows % 60) + 12,
        u16::from(input.columns % 120) + 8,
    );
    let Ok(spawn_table) = SpawnTable::new(vec![SpawnBracket {
        from_year: 1900,
        delay_tics: u32::from(input.spawn_delay % 30) + 1,
    }]) else {
        return;
    };
    let config = GameConfig {
        tic_ms: 0,
        bell: false,
        start_year: 1957 + u32::from(input.year_offset % 100),
        garbage_speed: f64::from(input.garbage_speed % 30 + 1) / 10.0,
        obstacle_health: u32::from(input.health % 4) + 1,
        spawn_table,
        ..GameConfig::default()
    };

    let Ok(mut game) = Game::new(&config, &Assets::builtin(), bounds, input.seed) else {
        return;
    };
    let mut canvas = HeadlessCanvas::new(bounds);

    // Cap tics to keep runs fast
    for &(rows, columns, fire) in input.controls.iter().take(2000) {
        if game.finished().is_some() {
            break;
        }
        canvas.push_input(Controls {
            rows: Direction::from_delta(rows),
            columns: Direction::from_delta(columns),
            fire,
        });
        game.tick(&mut canvas);

        let violations = check_invariants(game.world());
        assert!(
            violations.is_empty(),
            "Invariants violated at tic {}: {:?}",
            game.scheduler().tic(),
            violations
        );
    }
});
