//! Events consumed by the timer event loop

/// A key press, reduced to what the timer cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
    /// Ctrl-C; raw mode delivers it as a key instead of SIGINT
    Interrupt,
}

impl Key {
    /// Quit keys win in every mode, including while editing
    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Char('q') | Key::Interrupt)
    }
}

/// Everything the producers can hand to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One second elapsed
    Tick,
    Key(Key),
    /// Terminal size changed, redraw without touching state
    Resize,
    /// Termination signal received
    Shutdown,
    /// The input source could not read the terminal
    InputFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(Key::Char('q').is_quit());
        assert!(Key::Interrupt.is_quit());
        assert!(!Key::Char('Q').is_quit());
        assert!(!Key::Esc.is_quit());
        assert!(!Key::Char('s').is_quit());
    }
}
