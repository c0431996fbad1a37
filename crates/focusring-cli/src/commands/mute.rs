use focusring_core::daily;
use focusring_core::Database;

/// Flip the persisted mute flag. A watch session started afterwards picks
/// the new value up.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::open()?;
    let muted = !daily::load_muted(&db);
    daily::save_muted(&mut db, muted);
    println!("{}", if muted { "muted" } else { "unmuted" });
    Ok(())
}
