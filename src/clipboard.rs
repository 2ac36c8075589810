use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Copies `text` to the system clipboard.
///
/// With `clear_after`, the process stays alive for that many seconds and then
/// overwrites the clipboard, so the password does not linger. Ctrl-C during
/// the hold clears immediately instead of leaving the password behind.
pub fn copy(text: &str, clear_after: Option<u64>) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to copy to clipboard")?;

    let Some(secs) = clear_after else {
        return Ok(());
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .context("failed to install Ctrl-C handler")?;

    eprintln!("clipboard clears in {secs}s (Ctrl-C to clear now)");

    let deadline = Instant::now() + Duration::from_secs(secs);
    while Instant::now() < deadline && !interrupted.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(100));
    }

    clipboard
        .set_text(String::new())
        .context("failed to clear clipboard")?;
    eprintln!("clipboard cleared");

    Ok(())
}
