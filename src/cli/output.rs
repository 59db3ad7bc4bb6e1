//! Output formatting utilities for CLI.

use std::fmt::Write;

use debris::{Outcome, StopReason};
use serde::Serialize;

/// JSON-serializable run summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonOutcome<'a> {
    /// Random seed used.
    pub(super) seed: u64,
    /// Surface rows.
    pub(super) rows: u16,
    /// Surface columns.
    pub(super) columns: u16,
    /// Final screen, one string per row (present when requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) screen: Option<Vec<String>>,
    /// The outcome itself.
    #[serde(flatten)]
    pub(super) outcome: &'a Outcome,
}

fn describe(reason: StopReason) -> &'static str {
    match reason {
        StopReason::GameOver => "ship destroyed",
        StopReason::Shutdown => "stopped by player",
        StopReason::Exhausted => "no tasks left",
        StopReason::TicLimit => "tic limit reached",
    }
}

/// Format an outcome as human-readable text.
pub(super) fn format_text(outcome: &Outcome, seed: u64) -> String {
    let mut output = String::new();
    let stats = &outcome.stats;

    let _ = writeln!(output, "Game Result (seed: {seed})");
    let _ = writeln!(output, "  Ended: {}", describe(outcome.reason));
    let _ = writeln!(output, "  Tics: {}", outcome.tics);
    let _ = writeln!(output, "  Year: {}", outcome.year);
    if let Some(tic) = outcome.destroyed_at {
        let _ = writeln!(output, "  Ship destroyed on tic {tic}");
    }
    let _ = writeln!(
        output,
        "  Shots: {} fired, {} hits",
        stats.shots_fired, stats.hits
    );
    let _ = writeln!(
        output,
        "  Debris: {} spawned, {} destroyed, {} escaped",
        stats.obstacles_spawned, stats.obstacles_destroyed, stats.obstacles_escaped
    );

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use debris::Stats;

    fn outcome() -> Outcome {
        Outcome {
            reason: StopReason::GameOver,
            tics: 120,
            year: 1964,
            destroyed_at: Some(90),
            stats: Stats {
                shots_fired: 1,
                obstacles_spawned: 4,
                obstacles_escaped: 2,
                ..Stats::default()
            },
        }
    }

    #[test]
    fn test_text_mentions_result() {
        let text = format_text(&outcome(), 7);
        assert!(text.contains("seed: 7"));
        assert!(text.contains("ship destroyed"));
        assert!(text.contains("tic 90"));
        assert!(text.contains("4 spawned"));
    }

    #[test]
    fn test_json_is_flat() {
        let outcome = outcome();
        let json = serde_json::to_value(JsonOutcome {
            seed: 7,
            rows: 30,
            columns: 80,
            screen: None,
            outcome: &outcome,
        })
        .unwrap();
        assert_eq!(json["reason"], "game_over");
        assert_eq!(json["tics"], 120);
        assert_eq!(json["stats"]["obstacles_spawned"], 4);
        assert!(json.get("screen").is_none());
    }
}
