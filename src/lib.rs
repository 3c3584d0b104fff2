//! Pomodoro TUI - A terminal countdown timer for the Pomodoro technique
//! 
//! This library provides the timer state machine, the duration parser, the
//! clock and keyboard event producers, and the terminal display they drive.

pub mod config;
pub mod display;
pub mod duration;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use display::{DisplaySink, TerminalDisplay};
pub use duration::{ParseError, Seconds};
pub use state::{Event, Key, Mode, TimerState, TimerView};
pub use tasks::{run_event_loop, ExitReason};
