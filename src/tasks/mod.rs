//! Event producers and the event loop
//! 
//! The clock and input tasks run concurrently and hand their events to a
//! single channel. The event loop is the only consumer and the only code
//! that mutates the timer.

pub mod clock;
pub mod event_loop;
pub mod input;

use std::time::Duration;

// Re-export main functions
pub use clock::clock_task;
pub use event_loop::{run_event_loop, ExitReason};
pub use input::{input_task, map_terminal_event};

/// Period of the countdown clock
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Capacity of the producer-to-loop event channel
pub const EVENT_QUEUE_CAPACITY: usize = 64;
