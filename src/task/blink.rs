//! Twinkling background star.

use super::{Context, Step, Task, TaskKind};
use crate::canvas::Emphasis;

/// Emphasis and hold time of each phase.
const PHASES: [(Emphasis, u32); 4] = [
    (Emphasis::Dim, 20),
    (Emphasis::Normal, 3),
    (Emphasis::Bold, 5),
    (Emphasis::Normal, 3),
];

/// A star cycling dim → normal → bold → normal forever.
#[derive(Debug, Clone, Copy)]
pub struct Blink {
    row: f64,
    column: f64,
    symbol: char,
    offset: u32,
    phase: Option<usize>,
}

impl Blink {
    /// Length of one full twinkle cycle in tics.
    pub const CYCLE_TICS: u32 = 31;

    /// Create a star; `offset` delays its first appearance by that many tics.
    #[must_use]
    pub const fn new(row: f64, column: f64, symbol: char, offset: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            offset,
            phase: None,
        }
    }
}

impl Task for Blink {
    fn kind(&self) -> TaskKind {
        TaskKind::Blink
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        let index = match self.phase {
            Some(index) => index,
            None => {
                self.phase = Some(0);
                if self.offset > 0 {
                    return Step::Sleep(self.offset);
                }
                0
            }
        };

        let (emphasis, tics) = PHASES[index];
        let mut buf = [0u8; 4];
        ctx.canvas
            .draw(self.row, self.column, self.symbol.encode_utf8(&mut buf), emphasis);
        self.phase = Some((index + 1) % PHASES.len());
        Step::Sleep(tics)
    }
}
