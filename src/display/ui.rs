//! UI rendering

use figlet_rs::FIGfont;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::state::{Mode, Notice, TimerView};

const EDIT_TITLE: &str = "Session timer (format hh:mm:ss)";
const EDIT_WIDTH: u16 = 36;
/// Rows used by everything other than the remaining time
const FIXED_ROWS: u16 = 8;

/// Main draw function
pub fn draw(f: &mut Frame, view: &TimerView) {
    let time = time_lines(&view.remaining, f.area());
    let time_height = u16::try_from(time.len()).unwrap_or(u16::MAX);

    let chunks = Layout::vertical([
        Constraint::Min(0),              // Top padding
        Constraint::Length(1),           // Mode
        Constraint::Length(time_height), // Remaining time
        Constraint::Length(1),           // Gap
        Constraint::Length(1),           // Progress
        Constraint::Length(1),           // Notice
        Constraint::Length(3),           // Edit box
        Constraint::Min(0),              // Bottom padding
        Constraint::Length(1),           // Footer
    ])
    .split(f.area());

    let accent = mode_color(view.mode);

    let mode = Paragraph::new(Span::styled(
        view.mode.as_str().to_uppercase(),
        Style::default().fg(accent),
    ))
    .alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    let time_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let remaining = Paragraph::new(
        time.into_iter()
            .map(|line| Line::from(Span::styled(line, time_style)))
            .collect::<Vec<_>>(),
    )
    .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(Color::Black))
        .ratio(view.ratio_remaining())
        .label("");
    f.render_widget(gauge, centered(chunks[4], EDIT_WIDTH));

    if let Some(notice) = &view.notice {
        f.render_widget(notice_line(notice).alignment(Alignment::Center), chunks[5]);
    }

    if let Some(buffer) = &view.edit_buffer {
        draw_edit_box(f, buffer, centered(chunks[6], EDIT_WIDTH));
    }

    draw_footer(f, view.mode, chunks[8]);
}

/// Big figlet digits when they fit next to the fixed rows, else one plain line
fn time_lines(text: &str, area: Rect) -> Vec<String> {
    if let Some(lines) = figlet_lines(text) {
        let height = lines.len();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        if height <= usize::from(area.height.saturating_sub(FIXED_ROWS))
            && width <= usize::from(area.width)
        {
            return lines;
        }
    }
    vec![text.to_string()]
}

/// Render `text` in the standard figlet font, dropping blank trailing rows
pub fn figlet_lines(text: &str) -> Option<Vec<String>> {
    let font = FIGfont::standard().ok()?;
    let figure = font.convert(text)?;

    let mut lines: Vec<String> = figure.to_string().lines().map(str::to_string).collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    (!lines.is_empty()).then_some(lines)
}

fn draw_edit_box(f: &mut Frame, buffer: &str, area: Rect) {
    let input = Paragraph::new(buffer).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(EDIT_TITLE),
    );
    f.render_widget(input, area);

    let typed = u16::try_from(buffer.chars().count()).unwrap_or(u16::MAX);
    let max_x = area.right().saturating_sub(2);
    f.set_cursor_position((area.x.saturating_add(typed).saturating_add(1).min(max_x), area.y + 1));
}

fn draw_footer(f: &mut Frame, mode: Mode, area: Rect) {
    let keys: &[(&str, &str)] = match mode {
        Mode::Editing => &[("enter", "apply"), ("esc", "cancel"), ("bksp", "delete"), ("q", "quit")],
        Mode::Running => &[("space", "pause"), ("r", "reset"), ("s", "stop"), ("q", "quit")],
        Mode::Idle | Mode::Stopped => &[
            ("space", "start"),
            ("e", "edit"),
            ("r", "reset"),
            ("s", "stop"),
            ("q", "quit"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in keys {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan).bold()));
        spans.push(Span::raw(format!(" {action}  ")));
    }

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}

fn notice_line(notice: &Notice) -> Paragraph<'static> {
    match notice {
        Notice::InvalidFormat(text) => Paragraph::new(Span::styled(
            format!("Invalid format {text:?}, expected hh:mm:ss or mm:ss"),
            Style::default().fg(Color::Red),
        )),
        Notice::Expired { at } => Paragraph::new(Span::styled(
            format!("Time's up! Finished at {}", at.format("%H:%M:%S")),
            Style::default().fg(Color::Green).bold(),
        )),
    }
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Idle => Color::Gray,
        Mode::Running => Color::Green,
        Mode::Stopped => Color::Red,
        Mode::Editing => Color::Yellow,
    }
}

/// Horizontally center a box of `width` inside `area`
fn centered(area: Rect, width: u16) -> Rect {
    let [middle] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    middle
}
