use focusring_core::daily::{self, DailyRecord};
use focusring_core::Database;

use crate::render;

/// Today's completed pomodoros, as markers or as the raw record.
pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let today = daily::today_utc();
    let count = DailyRecord::load_count(&db, today);

    if json {
        let record = DailyRecord { date: today, count };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", render::completion_line(count));
        if count > 0 {
            println!("{count} completed today");
        }
    }
    Ok(())
}
