//! Session-end sound and notification.

use std::io::Write;

use focusring_core::Chime;
use notify_rust::Notification;

/// Terminal bell plus a desktop notification. Both are best-effort: the
/// timer keeps running without a bell or a notification daemon.
pub struct DesktopChime;

impl Chime for DesktopChime {
    fn play(&mut self) {
        let mut out = std::io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();

        let _ = Notification::new()
            .summary("focusring")
            .body("Session complete")
            .show();
    }
}

/// No-op chime for the one-shot commands.
pub struct Silent;

impl Chime for Silent {
    fn play(&mut self) {}
}
