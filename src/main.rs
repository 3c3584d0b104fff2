//! Pomodoro TUI - A terminal countdown timer for the Pomodoro technique
//! 
//! This is the main entry point for the pomodoro-tui application.

use anyhow::Context;
use crossterm::event::EventStream;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tokio::sync::mpsc;
use tracing::{error, info};

use pomodoro_tui::{
    config::Config,
    display::TerminalDisplay,
    duration,
    state::TimerState,
    tasks::{clock_task, input_task, run_event_loop, EVENT_QUEUE_CAPACITY, TICK_INTERVAL},
    utils::{init_tracing, shutdown_signal_task},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    info!("Starting pomodoro-tui v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: duration={}, start={}",
          duration::format(config.duration), config.start);

    let signals = Signals::new([SIGTERM, SIGINT, SIGHUP])
        .context("Failed to install signal handlers")?;

    // Restored on drop, including the error paths below
    let mut display = TerminalDisplay::start().context("Failed to set up the terminal")?;
    let mut state = TimerState::new(config.duration, config.start);

    let (tx, mut rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
    tokio::spawn(clock_task(TICK_INTERVAL, tx.clone()));
    tokio::spawn(input_task(EventStream::new(), tx.clone()));
    tokio::spawn(shutdown_signal_task(signals, tx));

    let result = run_event_loop(&mut state, &mut rx, &mut display).await;
    drop(display);

    match result {
        Ok(reason) => {
            info!("Timer exited: {:?}", reason);
            Ok(())
        }
        Err(e) => {
            error!("Timer failed: {:#}", e);
            Err(e)
        }
    }
}
