//! Guitar shop application module: terminal lifecycle, event loop and workers.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{HEADLESS_ENV, run};

// Re-export pieces used by integration tests and the CLI.
pub use runtime::init::initialize_app_state;
pub use runtime::workers;
