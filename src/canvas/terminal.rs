//! Crossterm-backed canvas for interactive play.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::{Canvas, Controls, Emphasis, Screen};
use crate::game::Shutdown;
use crate::geometry::Bounds;
use crate::physics::Direction;

/// The real terminal, in raw mode on the alternate screen.
///
/// Arrow keys steer, space fires, `q`, Esc or Ctrl-C request shutdown.
/// The terminal is restored when the canvas is dropped.
#[derive(Debug)]
pub struct TerminalCanvas {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    screen: Screen,
    shutdown: Shutdown,
    bell: bool,
    active: bool,
}

impl TerminalCanvas {
    /// Switch the terminal into game mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen are unavailable.
    pub fn enter(shutdown: Shutdown, bell: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let setup = || -> io::Result<_> {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, Hide)?;
            let (columns, rows) = crossterm::terminal::size()?;
            Ok((Terminal::new(CrosstermBackend::new(stdout))?, Bounds::new(rows, columns)))
        };
        let (terminal, bounds) = match setup() {
            Ok(parts) => parts,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
                let _ = disable_raw_mode();
                return Err(e);
            }
        };

        Ok(Self {
            terminal,
            screen: Screen::bordered(bounds),
            shutdown,
            bell,
            active: true,
        })
    }

    /// Leave game mode. Safe to call more than once.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be restored.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show)?;
        Ok(())
    }

    fn apply_key(&self, controls: &mut Controls, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Up => controls.rows = Direction::Decrease,
            KeyCode::Down => controls.rows = Direction::Increase,
            KeyCode::Left => controls.columns = Direction::Decrease,
            KeyCode::Right => controls.columns = Direction::Increase,
            KeyCode::Char(' ') => controls.fire = true,
            KeyCode::Char('q') | KeyCode::Esc => self.shutdown.request(),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.shutdown.request();
            }
            _ => {}
        }
    }
}

fn ring(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}

impl Drop for TerminalCanvas {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("failed to restore terminal: {e}");
        }
    }
}

impl Canvas for TerminalCanvas {
    fn bounds(&self) -> Bounds {
        self.screen.bounds()
    }

    fn draw(&mut self, row: f64, column: f64, text: &str, emphasis: Emphasis) {
        self.screen.draw(row, column, text, emphasis);
    }

    fn erase(&mut self, row: f64, column: f64, text: &str) {
        self.screen.erase(row, column, text);
    }

    fn read_input(&mut self) -> Controls {
        let mut controls = Controls::default();
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("input poll failed: {e}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    self.apply_key(&mut controls, key.code, key.modifiers);
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("input read failed: {e}");
                    break;
                }
            }
        }
        controls
    }

    fn beep(&mut self) {
        if !self.bell {
            return;
        }
        if let Err(e) = ring(self.terminal.backend_mut()) {
            log::debug!("bell failed: {e}");
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let screen = &self.screen;
        self.terminal
            .draw(|frame| frame.render_widget(screen, frame.area()))?;
        Ok(())
    }
}
