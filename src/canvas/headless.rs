//! In-memory canvas with scripted or random input.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Canvas, Controls, Emphasis, Screen};
use crate::geometry::Bounds;
use crate::physics::Direction;

/// A recorded draw or erase call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// Anchor row as passed by the task.
    pub row: f64,
    /// Anchor column as passed by the task.
    pub column: f64,
    /// Frame text.
    pub text: String,
    /// Emphasis for draws, `None` for erases.
    pub emphasis: Option<Emphasis>,
}

/// Random input source for unattended runs.
#[derive(Debug, Clone)]
struct Autopilot {
    rng: Pcg32,
}

impl Autopilot {
    fn next(&mut self) -> Controls {
        let direction = |rng: &mut Pcg32| Direction::from_delta(rng.random_range(-1..=1));
        let rows = direction(&mut self.rng);
        let columns = direction(&mut self.rng);
        Controls {
            rows,
            columns,
            fire: self.rng.random_bool(0.2),
        }
    }
}

/// Canvas that never touches a terminal.
///
/// Input comes from a queue of scripted [`Controls`]; when the queue is
/// empty, from the autopilot if one is attached, otherwise no input.
#[derive(Debug, Clone)]
pub struct HeadlessCanvas {
    screen: Screen,
    script: VecDeque<Controls>,
    autopilot: Option<Autopilot>,
    journal: Option<Vec<DrawCall>>,
    beeps: u32,
}

impl HeadlessCanvas {
    /// Create a bordered headless canvas.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            screen: Screen::bordered(bounds),
            script: VecDeque::new(),
            autopilot: None,
            journal: None,
            beeps: 0,
        }
    }

    /// Feed random controls, reproducible from `seed`, once the script runs out.
    #[must_use]
    pub fn with_autopilot(mut self, seed: u64) -> Self {
        self.autopilot = Some(Autopilot {
            rng: Pcg32::seed_from_u64(seed),
        });
        self
    }

    /// Record every draw and erase call.
    #[must_use]
    pub fn with_journal(mut self) -> Self {
        self.journal = Some(Vec::new());
        self
    }

    /// Queue controls for upcoming `read_input` calls.
    pub fn push_input(&mut self, controls: Controls) {
        self.script.push_back(controls);
    }

    /// The screen contents.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Recorded calls (empty unless [`HeadlessCanvas::with_journal`] was used).
    #[must_use]
    pub fn journal(&self) -> &[DrawCall] {
        self.journal.as_deref().unwrap_or_default()
    }

    /// Number of draw calls whose text is exactly `text`.
    #[must_use]
    pub fn draws_of(&self, text: &str) -> usize {
        self.journal()
            .iter()
            .filter(|call| call.emphasis.is_some() && call.text == text)
            .count()
    }

    /// Number of beeps requested.
    #[must_use]
    pub const fn beeps(&self) -> u32 {
        self.beeps
    }

    fn log(&mut self, row: f64, column: f64, text: &str, emphasis: Option<Emphasis>) {
        if let Some(journal) = &mut self.journal {
            journal.push(DrawCall {
                row,
                column,
                text: text.to_string(),
                emphasis,
            });
        }
    }
}

impl Canvas for HeadlessCanvas {
    fn bounds(&self) -> Bounds {
        self.screen.bounds()
    }

    fn draw(&mut self, row: f64, column: f64, text: &str, emphasis: Emphasis) {
        self.log(row, column, text, Some(emphasis));
        self.screen.draw(row, column, text, emphasis);
    }

    fn erase(&mut self, row: f64, column: f64, text: &str) {
        self.log(row, column, text, None);
        self.screen.erase(row, column, text);
    }

    fn read_input(&mut self) -> Controls {
        if let Some(controls) = self.script.pop_front() {
            return controls;
        }
        self.autopilot
            .as_mut()
            .map_or_else(Controls::default, Autopilot::next)
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_then_idle() {
        let mut canvas = HeadlessCanvas::new(Bounds::new(10, 10));
        canvas.push_input(Controls::fire());
        assert!(canvas.read_input().fire);
        assert_eq!(canvas.read_input(), Controls::default());
    }

    #[test]
    fn test_autopilot_is_reproducible() {
        let mut a = HeadlessCanvas::new(Bounds::new(10, 10)).with_autopilot(7);
        let mut b = HeadlessCanvas::new(Bounds::new(10, 10)).with_autopilot(7);
        for _ in 0..50 {
            assert_eq!(a.read_input(), b.read_input());
        }
    }

    #[test]
    fn test_journal_records_draws_and_erases() {
        let mut canvas = HeadlessCanvas::new(Bounds::new(10, 10)).with_journal();
        canvas.draw(2.0, 2.0, "*", Emphasis::Bold);
        canvas.erase(2.0, 2.0, "*");
        assert_eq!(canvas.journal().len(), 2);
        assert_eq!(canvas.draws_of("*"), 1);
        assert_eq!(canvas.journal()[1].emphasis, None);
    }

    #[test]
    fn test_journal_off_by_default() {
        let mut canvas = HeadlessCanvas::new(Bounds::new(10, 10));
        canvas.draw(2.0, 2.0, "*", Emphasis::Normal);
        assert!(canvas.journal().is_empty());
    }
}
