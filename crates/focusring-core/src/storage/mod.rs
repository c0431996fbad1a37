mod database;

pub use database::Database;

use std::io;
use std::path::PathBuf;

/// Returns `~/.config/focusring[-dev]/` based on FOCUSRING_ENV.
///
/// Set FOCUSRING_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSRING_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusring-dev")
    } else {
        base_dir.join("focusring")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
