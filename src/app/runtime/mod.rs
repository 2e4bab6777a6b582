use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{Terminal, backend::CrosstermBackend, backend::TestBackend};
use tokio::select;

use crate::logic::{apply_response, request_for_route};
use crate::sources::CatalogClient;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
pub mod init;
pub mod workers;

use background::spawn_event_thread;
use channels::Channels;
use init::initialize_app_state;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that runs the app without a terminal (tests, CI).
pub const HEADLESS_ENV: &str = "GUITARSHOP_TEST_HEADLESS";

/// What: Run the guitar shop TUI end-to-end.
///
/// Inputs:
/// - `settings_path`: Settings file holding endpoint, timeout and language
/// - `endpoint_override`: GraphQL endpoint taking precedence over the settings file
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal or HTTP client setup failure.
///
/// Details:
/// - Startup: ensures the settings file, restores the persisted locale, builds the
///   GraphQL client and spawns the catalog workers.
/// - Event loop: renders a frame, then waits for either a terminal event or a worker
///   response. Responses are applied only when they answer the latest request of
///   their screen.
/// - Headless (`GUITARSHOP_TEST_HEADLESS=1`): renders a single frame into an
///   off-screen buffer without fetching and returns.
pub async fn run(settings_path: &Path, endpoint_override: Option<String>) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");

    let mut app = initialize_app_state(settings_path);
    let mut settings = crate::theme::load_settings(settings_path);
    if let Some(endpoint) = endpoint_override {
        settings.endpoint = endpoint;
    }
    tracing::info!(
        endpoint = %settings.endpoint,
        timeout_secs = settings.request_timeout_secs,
        locale = %app.locale.current(),
        headless,
        "starting"
    );
    let client = CatalogClient::new(
        settings.endpoint.clone(),
        Duration::from_secs(settings.request_timeout_secs),
    )?;
    let mut channels = Channels::new(Arc::new(client));

    if headless {
        let mut terminal = Terminal::new(TestBackend::new(100, 32))?;
        terminal.draw(|f| ui(f, &app))?;
        return Ok(());
    }

    setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    request_for_route(&mut app, &channels.requester);

    loop {
        if let Err(e) = terminal.draw(|f| ui(f, &app)) {
            tracing::warn!(error = %e, "frame draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(&ev, &mut app, &channels.requester) {
                    break;
                }
            }
            Some(response) = channels.response_rx.recv() => {
                apply_response(&mut app, response);
            }
            else => break,
        }
    }

    tracing::debug!("main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    restore_terminal()?;
    Ok(())
}
