//! Terminal rendering for the interactive timer.
//!
//! One frame per engine mutation: heading, progress bar, clock,
//! completion markers, key help. The layout is a fixed grid on the
//! alternate screen, redrawn in full each time.

use std::io::{stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use focusring_core::{Renderer, SessionType, Snapshot};

const BAR_WIDTH: usize = 24;

/// Session accent colors: tomato for work, green for short breaks, blue
/// for long breaks.
fn session_color(kind: SessionType) -> Color {
    match kind {
        SessionType::Pomodoro => Color::Rgb {
            r: 0xff,
            g: 0x63,
            b: 0x47,
        },
        SessionType::ShortBreak => Color::Rgb {
            r: 0x4c,
            g: 0xaf,
            b: 0x50,
        },
        SessionType::LongBreak => Color::Rgb {
            r: 0x21,
            g: 0x96,
            b: 0xf3,
        },
    }
}

/// `MM:SS` with both fields zero-padded. Minutes grow past two digits
/// rather than wrapping.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Bar with filled cells proportional to the time remaining, draining as
/// the session runs.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One marker per completed pomodoro, or the empty-state line.
pub fn completion_line(count: u32) -> String {
    if count == 0 {
        "No pomodoros completed yet".to_string()
    } else {
        let mut line = String::new();
        for i in 0..count {
            if i > 0 {
                line.push(' ');
            }
            line.push('●');
        }
        line
    }
}

fn heading(snapshot: &Snapshot) -> String {
    let mut heading = snapshot.session_type.label().to_string();
    if snapshot.session_type == SessionType::Pomodoro {
        heading.push_str(&format!(
            "  ·  Session {} of {}",
            snapshot.cycle_position, snapshot.cycle_length
        ));
    }
    heading
}

fn clock_line(snapshot: &Snapshot) -> String {
    let mut line = format_clock(snapshot.time_remaining);
    if snapshot.is_muted {
        line.push_str("  ·  muted");
    }
    line
}

fn key_help(snapshot: &Snapshot) -> String {
    let space = if snapshot.is_running { "pause" } else { "start" };
    let sound = if snapshot.is_muted { "unmute" } else { "mute" };
    format!("[space] {space}   [s] skip   [r] reset   [m] {sound}   [q] quit")
}

/// Draws each frame to the terminal the watch loop owns.
#[derive(Default)]
pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw(&self, snapshot: &Snapshot) -> std::io::Result<()> {
        let mut out = stdout();
        let accent = session_color(snapshot.session_type);

        queue!(out, Clear(ClearType::All))?;
        queue!(out, MoveTo(2, 1), SetForegroundColor(accent))?;
        write!(out, "{}", heading(snapshot))?;
        queue!(out, MoveTo(2, 3))?;
        write!(
            out,
            "{}",
            progress_bar(snapshot.progress_fraction(), BAR_WIDTH)
        )?;
        queue!(out, ResetColor, MoveTo(2, 5))?;
        write!(out, "{}", clock_line(snapshot))?;
        queue!(out, MoveTo(2, 7), SetForegroundColor(accent))?;
        write!(out, "{}", completion_line(snapshot.completed_today))?;
        queue!(out, MoveTo(2, 9), SetForegroundColor(Color::DarkGrey))?;
        write!(out, "{}", key_help(snapshot))?;
        queue!(out, ResetColor)?;
        out.flush()
    }
}

impl Renderer for TermRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        // A terminal write failure must not take the engine down.
        let _ = self.draw(snapshot);
    }
}

/// Discards frames. One-shot commands print JSON instead of drawing.
pub struct Silent;

impl Renderer for Silent {
    fn render(&mut self, _snapshot: &Snapshot) {}
}
