//! The timer event loop: sole consumer of events and sole owner of the timer

use anyhow::bail;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

use crate::{
    display::DisplaySink,
    state::{Event, TimerState, Transition},
};

/// Why the event loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A quit key was pressed
    Quit,
    /// A termination signal arrived
    Signal,
    /// Every producer dropped its sender
    ProducersGone,
}

/// Consume events one at a time, apply them to `state`, and push a fresh
/// view to `display` after every visible change.
///
/// Events are handled strictly in arrival order; a transition always
/// completes, including its render, before the next event is read.
pub async fn run_event_loop<D: DisplaySink>(
    state: &mut TimerState,
    events: &mut Receiver<Event>,
    display: &mut D,
) -> anyhow::Result<ExitReason> {
    info!("Starting timer event loop");
    render(display, state);

    while let Some(event) = events.recv().await {
        let transition = match event {
            Event::Tick => state.tick(),
            Event::Key(key) => state.press(key),
            Event::Resize => Transition::Changed,
            Event::Shutdown => {
                info!("Shutdown signal received");
                return Ok(ExitReason::Signal);
            }
            Event::InputFailed(message) => bail!("Terminal input failed: {}", message),
        };

        match transition {
            Transition::Quit => {
                info!("Quit requested");
                return Ok(ExitReason::Quit);
            }
            Transition::Expired => info!("Time's up"),
            Transition::Changed | Transition::Unchanged => {}
        }

        if transition.needs_render() {
            debug!(
                "State now: mode={}, remaining={}s, configured={}s",
                state.mode().as_str(),
                state.remaining_seconds(),
                state.configured_seconds()
            );
            render(display, state);
        }
    }

    info!("All event producers stopped");
    Ok(ExitReason::ProducersGone)
}

fn render<D: DisplaySink>(display: &mut D, state: &TimerState) {
    if let Err(e) = display.render(&state.view()) {
        warn!("Failed to render timer: {}", e);
    }
}
