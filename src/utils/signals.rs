//! Signal handling for graceful shutdown

use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tokio::sync::mpsc::Sender;
use tracing::info;

use crate::state::Event;

/// Wait for a termination signal and ask the event loop to shut down
pub async fn shutdown_signal_task(mut signals: Signals, tx: Sender<Event>) {
    tokio::select! {
        Some(signal) = signals.next() => {
            info!("Received signal: {}", signal);
            let _ = tx.send(Event::Shutdown).await;
        }
        _ = tx.closed() => {}
    }
    signals.handle().close();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use signal_hook::consts::SIGHUP;
    use tokio::{sync::mpsc, time::timeout};

    #[tokio::test]
    async fn test_signal_sends_shutdown() {
        let signals = Signals::new([SIGHUP]).unwrap();
        let (tx, mut rx) = mpsc::channel(1);
        let handle = tokio::spawn(shutdown_signal_task(signals, tx));

        signal_hook::low_level::raise(SIGHUP).unwrap();

        let event = timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(event, Some(Event::Shutdown));
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_stops_when_loop_is_gone() {
        let signals = Signals::new([SIGHUP]).unwrap();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        timeout(Duration::from_secs(5), shutdown_signal_task(signals, tx))
            .await
            .unwrap();
    }
}
