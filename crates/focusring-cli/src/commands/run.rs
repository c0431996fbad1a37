//! The interactive timer.
//!
//! Runs the engine under a raw-mode terminal loop: key presses become
//! engine commands, and a rolling one-second deadline delivers `tick()`
//! while the countdown runs. The loop owns the cadence; the engine's
//! clock subscription only tracks whether ticks are wanted.

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

use focusring_core::{Config, Database, PomodoroEngine, SessionPlan, SystemClock};

use crate::chime::DesktopChime;
use crate::render::TermRenderer;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ToggleStartPause,
    Skip,
    Reset,
    ToggleMute,
    Quit,
}

pub fn run(fast: bool, auto_start: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let plan = if fast {
        SessionPlan::fast()
    } else {
        config.plan()
    };

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    let result = watch(plan, auto_start || config.auto_start_next);
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

fn watch(plan: SessionPlan, auto_start: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut engine = PomodoroEngine::new(
        plan,
        Box::new(SystemClock::new()),
        Box::new(db),
        Box::new(DesktopChime),
        Box::new(TermRenderer::new()),
    )
    .with_auto_start(auto_start);

    let mut next_tick = Instant::now() + TICK_INTERVAL;
    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match action_for(key) {
                        Some(Action::Quit) => return Ok(()),
                        Some(Action::ToggleStartPause) => {
                            engine.toggle_start_pause();
                        }
                        Some(Action::Skip) => {
                            engine.skip();
                        }
                        Some(Action::Reset) => {
                            engine.reset();
                        }
                        Some(Action::ToggleMute) => {
                            engine.toggle_mute();
                        }
                        None => {}
                    }
                }
            }
        }
        if Instant::now() >= next_tick {
            engine.tick();
            next_tick += TICK_INTERVAL;
        }
    }
}

fn action_for(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::ToggleStartPause),
        KeyCode::Char('s') => Some(Action::Skip),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('m') => Some(Action::ToggleMute),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keymap_matches_the_help_line() {
        assert_eq!(
            action_for(press(KeyCode::Char(' '))),
            Some(Action::ToggleStartPause)
        );
        assert_eq!(action_for(press(KeyCode::Char('s'))), Some(Action::Skip));
        assert_eq!(action_for(press(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(
            action_for(press(KeyCode::Char('m'))),
            Some(Action::ToggleMute)
        );
        assert_eq!(action_for(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('c'))), None);
    }
}
