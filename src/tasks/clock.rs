//! Clock source: one `Tick` per interval, regardless of timer mode

use std::time::Duration;
use tokio::{
    sync::mpsc::Sender,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::state::Event;

/// Background task that sends a tick every `period` until the loop goes away
pub async fn clock_task(period: Duration, tx: Sender<Event>) {
    info!("Starting clock task with a {:?} period", period);

    // first tick one full period after start, not immediately
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if tx.send(Event::Tick).await.is_err() {
                    break;
                }
            }
            _ = tx.closed() => break,
        }
    }

    debug!("Clock task stopped, event loop is gone");
}
