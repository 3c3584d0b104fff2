//! Configuration and CLI argument handling

use std::path::PathBuf;
use clap::Parser;

use crate::duration::{self, Seconds};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "pomodoro-tui")]
#[command(about = "A terminal Pomodoro countdown timer")]
#[command(version)]
#[command(after_help = r#"KEY BINDINGS:
    space       Start, or pause while running
    enter       Start
    e           Edit the duration (not while running)
    r           Reset to the configured duration
    s           Stop and zero the timer
    q, Ctrl-C   Quit

WHILE EDITING:
    enter       Apply the typed duration
    esc         Cancel
    backspace   Delete the last character"#)]
pub struct Config {
    /// Countdown duration as mm:ss or hh:mm:ss
    #[arg(default_value = "25:00", value_parser = duration::parse)]
    pub duration: Seconds,

    /// Start counting down immediately
    #[arg(short, long)]
    pub start: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file (the terminal is taken by the timer)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
