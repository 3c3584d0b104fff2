//! Input source: raw terminal events turned into timer events

use std::io;
use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::stream::{Stream, StreamExt};
use tokio::sync::mpsc::Sender;
use tracing::{debug, error, info};

use crate::state::{Event, Key};

/// Translate a crossterm event into a timer event.
///
/// Returns `None` for anything the timer ignores (mouse, focus, paste,
/// key releases, unmapped keys).
pub fn map_terminal_event(event: TerminalEvent) -> Option<Event> {
    match event {
        TerminalEvent::Key(key) => map_key(key).map(Event::Key),
        TerminalEvent::Resize(_, _) => Some(Event::Resize),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Key::Interrupt),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        _ => None,
    }
}

/// Background task forwarding terminal input to the event loop.
///
/// Ends when the stream ends, the loop goes away, or reading fails. A read
/// failure is reported to the loop as `InputFailed`.
pub async fn input_task<S>(mut events: S, tx: Sender<Event>)
where
    S: Stream<Item = io::Result<TerminalEvent>> + Unpin,
{
    info!("Starting input task");

    loop {
        let next = tokio::select! {
            next = events.next() => next,
            _ = tx.closed() => break,
        };

        let event = match next {
            Some(Ok(raw)) => match map_terminal_event(raw) {
                Some(event) => event,
                None => continue,
            },
            Some(Err(e)) => {
                error!("Failed to read terminal input: {}", e);
                let _ = tx.send(Event::InputFailed(e.to_string())).await;
                break;
            }
            None => break,
        };

        if tx.send(event).await.is_err() {
            break;
        }
    }

    debug!("Input task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_map_keys() {
        assert_eq!(map_terminal_event(press(KeyCode::Char('e'))), Some(Event::Key(Key::Char('e'))));
        assert_eq!(map_terminal_event(press(KeyCode::Char(' '))), Some(Event::Key(Key::Char(' '))));
        assert_eq!(map_terminal_event(press(KeyCode::Enter)), Some(Event::Key(Key::Enter)));
        assert_eq!(map_terminal_event(press(KeyCode::Esc)), Some(Event::Key(Key::Esc)));
        assert_eq!(map_terminal_event(press(KeyCode::Backspace)), Some(Event::Key(Key::Backspace)));
        assert_eq!(map_terminal_event(press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_map_modifiers() {
        let ctrl_c = TerminalEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_terminal_event(ctrl_c), Some(Event::Key(Key::Interrupt)));

        let ctrl_r = TerminalEvent::Key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(map_terminal_event(ctrl_r), None);

        let shifted = TerminalEvent::Key(KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT));
        assert_eq!(map_terminal_event(shifted), Some(Event::Key(Key::Char('E'))));
    }

    #[test]
    fn test_ignores_release_and_other_events() {
        let release = TerminalEvent::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_terminal_event(release), None);
        assert_eq!(map_terminal_event(TerminalEvent::FocusGained), None);
        assert_eq!(map_terminal_event(TerminalEvent::Resize(80, 24)), Some(Event::Resize));
    }

    #[tokio::test]
    async fn test_forwards_mapped_events_in_order() {
        let raw = vec![
            Ok(press(KeyCode::Char('e'))),
            Ok(TerminalEvent::FocusLost),
            Ok(press(KeyCode::Char('5'))),
            Ok(press(KeyCode::Enter)),
        ];
        let (tx, mut rx) = mpsc::channel(8);
        input_task(futures::stream::iter(raw), tx).await;

        assert_eq!(rx.recv().await, Some(Event::Key(Key::Char('e'))));
        assert_eq!(rx.recv().await, Some(Event::Key(Key::Char('5'))));
        assert_eq!(rx.recv().await, Some(Event::Key(Key::Enter)));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_read_error_reported() {
        let raw = vec![
            Ok(press(KeyCode::Char('r'))),
            Err(io::Error::new(io::ErrorKind::Other, "tty gone")),
            Ok(press(KeyCode::Char('s'))),
        ];
        let (tx, mut rx) = mpsc::channel(8);
        input_task(futures::stream::iter(raw), tx).await;

        assert_eq!(rx.recv().await, Some(Event::Key(Key::Char('r'))));
        assert_eq!(rx.recv().await, Some(Event::InputFailed("tty gone".to_string())));
        assert_eq!(rx.recv().await, None);
    }
}
