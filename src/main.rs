//! guitarshop binary entrypoint kept minimal. The full runtime lives in `guitarshop::app`.

mod args;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use guitarshop::{app, theme, util};

struct GuitarshopTimer;

impl tracing_subscriber::fmt::time::FormatTime for GuitarshopTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        w.write_str(&util::log_timestamp())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `log_level`: Default filter when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `~/.config/guitarshop/logs/guitarshop.log` through a non-blocking
///   appender; falls back to stderr when the file cannot be opened.
fn init_logging(log_level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("guitarshop.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(GuitarshopTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(GuitarshopTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = args::Args::parse();
    init_logging(&args::determine_log_level(&args));

    if let Some(code) = args::process_args(&args).await {
        std::process::exit(code);
    }

    tracing::info!("guitarshop starting");
    if let Err(err) = app::run(&theme::settings_path(), args.endpoint.clone()).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("{err}");
    }
    tracing::info!("guitarshop exited");
}
