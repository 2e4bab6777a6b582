use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the thread that forwards terminal input to the main loop.
///
/// Inputs:
/// - `event_tx`: Channel for terminal events
/// - `event_thread_cancelled`: Set on shutdown to stop the thread
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is observed promptly.
/// - Transient read errors are ignored; a closed channel ends the thread.
pub fn spawn_event_thread(
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    std::thread::spawn(move || {
        while !event_thread_cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    let Ok(ev) = crossterm::event::read() else {
                        continue;
                    };
                    if event_thread_cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err()
                    {
                        break;
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
