use focusring_core::{Config, Database, PomodoroEngine, SystemClock};

use crate::{chime, render};

/// Print the state a fresh timer would start from: configured durations,
/// today's completion count, and the persisted mute flag. Countdown state
/// lives only inside a running `focusring run`.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let engine = PomodoroEngine::new(
        config.plan(),
        Box::new(SystemClock::new()),
        Box::new(db),
        Box::new(chime::Silent),
        Box::new(render::Silent),
    );
    println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    Ok(())
}
