//! Timer state structure and transitions

use chrono::{DateTime, Local};
use tracing::{info, warn};

use super::Key;
use crate::duration::{self, Seconds};

/// What the timer is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Not counting; remaining time is kept (fresh, reset, paused or expired)
    Idle,
    Running,
    /// Halted by `s`; remaining time is zero
    Stopped,
    /// Typing a new duration into the edit buffer
    Editing,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "ready",
            Mode::Running => "running",
            Mode::Stopped => "stopped",
            Mode::Editing => "editing",
        }
    }
}

/// Transient message shown until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// An edit commit was rejected; holds the text that failed to parse
    InvalidFormat(String),
    /// The countdown reached zero
    Expired { at: DateTime<Local> },
}

/// Result of feeding one event to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing visible changed
    Unchanged,
    Changed,
    /// Countdown hit zero on this tick; the state also changed
    Expired,
    /// A quit key was pressed
    Quit,
}

impl Transition {
    /// Whether the display needs a fresh view
    pub fn needs_render(&self) -> bool {
        matches!(self, Transition::Changed | Transition::Expired)
    }
}

/// Snapshot of everything the display needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    pub mode: Mode,
    pub remaining: String,
    pub remaining_seconds: Seconds,
    pub configured_seconds: Seconds,
    /// Present only while editing
    pub edit_buffer: Option<String>,
    pub notice: Option<Notice>,
}

impl TimerView {
    /// Fraction of the configured duration still left, in `0.0..=1.0`
    pub fn ratio_remaining(&self) -> f64 {
        if self.configured_seconds == 0 {
            0.0
        } else {
            (self.remaining_seconds as f64 / self.configured_seconds as f64).clamp(0.0, 1.0)
        }
    }
}

/// The single timer owned by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    mode: Mode,
    configured_seconds: Seconds,
    remaining_seconds: Seconds,
    edit_buffer: String,
    notice: Option<Notice>,
}

impl TimerState {
    /// Create a timer counting down from `configured_seconds`.
    ///
    /// With `auto_start` the timer begins in `Running`, unless there is
    /// nothing to count down.
    pub fn new(configured_seconds: Seconds, auto_start: bool) -> Self {
        let mode = if auto_start && configured_seconds > 0 {
            Mode::Running
        } else {
            Mode::Idle
        };

        Self {
            mode,
            configured_seconds,
            remaining_seconds: configured_seconds,
            edit_buffer: String::new(),
            notice: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn configured_seconds(&self) -> Seconds {
        self.configured_seconds
    }

    pub fn remaining_seconds(&self) -> Seconds {
        self.remaining_seconds
    }

    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Build the snapshot pushed to the display
    pub fn view(&self) -> TimerView {
        TimerView {
            mode: self.mode,
            remaining: duration::format(self.remaining_seconds),
            remaining_seconds: self.remaining_seconds,
            configured_seconds: self.configured_seconds,
            edit_buffer: (self.mode == Mode::Editing).then(|| self.edit_buffer.clone()),
            notice: self.notice.clone(),
        }
    }

    /// Advance the countdown by one second. Ignored unless running.
    pub fn tick(&mut self) -> Transition {
        if self.mode != Mode::Running {
            return Transition::Unchanged;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return Transition::Changed;
        }

        info!("Countdown of {} finished", duration::format(self.configured_seconds));
        self.mode = Mode::Idle;
        self.notice = Some(Notice::Expired { at: Local::now() });
        Transition::Expired
    }

    /// Apply a key press according to the current mode
    pub fn press(&mut self, key: Key) -> Transition {
        if key.is_quit() {
            return Transition::Quit;
        }

        let before = self.clone();
        self.notice = None;

        match self.mode {
            Mode::Editing => self.press_while_editing(key),
            Mode::Idle | Mode::Running | Mode::Stopped => self.press_command(key),
        }

        if *self == before {
            Transition::Unchanged
        } else {
            Transition::Changed
        }
    }

    fn press_command(&mut self, key: Key) {
        match key {
            Key::Char('e') => self.begin_edit(),
            Key::Char('r') => self.reset(),
            Key::Char('s') => self.stop(),
            Key::Char(' ') => self.toggle(),
            Key::Enter => self.start(),
            _ => {}
        }
    }

    fn press_while_editing(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.edit_buffer.push(c),
            Key::Backspace => {
                self.edit_buffer.pop();
            }
            Key::Enter => self.commit_edit(),
            Key::Esc => {
                self.edit_buffer.clear();
                self.mode = Mode::Idle;
            }
            Key::Interrupt => {}
        }
    }

    /// Editing is blocked while the countdown runs
    fn begin_edit(&mut self) {
        if self.mode != Mode::Running {
            self.edit_buffer.clear();
            self.mode = Mode::Editing;
        }
    }

    fn commit_edit(&mut self) {
        let text = std::mem::take(&mut self.edit_buffer);
        self.mode = Mode::Idle;

        match duration::parse(&text) {
            Ok(seconds) => {
                info!("Duration set to {}", duration::format(seconds));
                self.configured_seconds = seconds;
                self.remaining_seconds = seconds;
            }
            Err(e) => {
                warn!("Rejected edit: {}", e);
                self.notice = Some(Notice::InvalidFormat(text));
            }
        }
    }

    fn reset(&mut self) {
        self.remaining_seconds = self.configured_seconds;
        if self.mode == Mode::Stopped {
            self.mode = Mode::Idle;
        }
    }

    fn stop(&mut self) {
        self.remaining_seconds = 0;
        self.mode = Mode::Stopped;
    }

    fn start(&mut self) {
        if self.mode != Mode::Running && self.remaining_seconds > 0 {
            self.mode = Mode::Running;
        }
    }

    /// Space starts a halted timer and pauses a running one
    fn toggle(&mut self) {
        if self.mode == Mode::Running {
            self.mode = Mode::Idle;
        } else {
            self.start();
        }
    }
}
