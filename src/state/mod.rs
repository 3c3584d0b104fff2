//! State management module
//! 
//! This module contains the timer state, the events that drive it, and the
//! snapshot handed to the display.

pub mod events;
pub mod timer_state;

// Re-export main types
pub use events::{Event, Key};
pub use timer_state::{Mode, Notice, TimerState, TimerView, Transition};
