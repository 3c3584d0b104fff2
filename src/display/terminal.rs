//! Crossterm-backed terminal display

use std::io::{self, Stdout};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, warn};

use super::{ui, DisplaySink};
use crate::state::TimerView;

/// Puts the terminal back the way it was found when dropped
#[derive(Debug)]
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = RawModeGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!("Failed to leave alternate screen: {}", e);
        }
        debug!("Terminal restored");
    }
}

/// Draws timer views onto a ratatui terminal
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    _guard: Option<RawModeGuard>,
}

impl TerminalDisplay<CrosstermBackend<Stdout>> {
    /// Switch stdout to raw alternate-screen mode and draw there.
    ///
    /// The terminal is restored when the display is dropped.
    pub fn start() -> anyhow::Result<Self> {
        let guard = RawModeGuard::enter()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            _guard: Some(guard),
        })
    }
}

impl<B: Backend> TerminalDisplay<B> {
    /// Draw onto an already prepared backend, leaving terminal modes alone
    pub fn with_backend(backend: B) -> anyhow::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            _guard: None,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> DisplaySink for TerminalDisplay<B> {
    fn render(&mut self, view: &TimerView) -> anyhow::Result<()> {
        self.terminal.draw(|frame| ui::draw(frame, view))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    use crate::state::{Key, TimerState};

    fn screen(display: &TerminalDisplay<TestBackend>) -> String {
        let buffer = display.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_latest_view() {
        let mut display = TerminalDisplay::with_backend(TestBackend::new(50, 10)).unwrap();
        let mut state = TimerState::new(1500, false);

        display.render(&state.view()).unwrap();
        assert!(screen(&display).contains("25:00"));

        state.press(Key::Char('s'));
        display.render(&state.view()).unwrap();
        let text = screen(&display);
        assert!(text.contains("00:00"));
        assert!(!text.contains("25:00"));
        assert!(text.contains("STOPPED"));
    }

    #[test]
    fn test_release_build_unwinds_to_restore_terminal() {
        // RawModeGuard only runs on unwind; abort would leave raw mode on
        let manifest = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        assert!(!manifest.contains("panic = \"abort\""));
    }
}
