// End-to-end runtime smoke test (headless)
// - Runs guitarshop::app::run with GUITARSHOP_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - Headless mode renders one frame off-screen and returns, so the run must finish Ok.

use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_renders_and_returns() {
    unsafe {
        std::env::set_var(guitarshop::app::HEADLESS_ENV, "1");
    }
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = dir.path().join("settings.conf");

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        guitarshop::app::run(&settings, Some("http://127.0.0.1:9/graphql".into())),
    )
    .await
    .expect("headless run finishes");
    if let Err(e) = result {
        panic!("app::run returned error: {e:?}");
    }
    // First start writes the settings skeleton.
    assert!(settings.exists());
}
