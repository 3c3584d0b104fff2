//! Display module
//! 
//! The timer never reads terminal state back; it only pushes views through
//! [`DisplaySink`].

pub mod terminal;
pub mod ui;

use crate::state::TimerView;

pub use terminal::TerminalDisplay;

/// Receives every new view of the timer
pub trait DisplaySink {
    fn render(&mut self, view: &TimerView) -> anyhow::Result<()>;
}
