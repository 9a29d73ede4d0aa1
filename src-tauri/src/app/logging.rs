//! Usage: Tracing setup (console plus rolling file in the app log dir).

use std::sync::OnceLock;

use tauri::Manager;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// The non-blocking writer stops flushing once its guard drops.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

pub(crate) fn init<R: tauri::Runtime>(app: &tauri::AppHandle<R>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = tracing_subscriber::fmt::layer().with_target(false);

    let file = app
        .path()
        .app_log_dir()
        .ok()
        .and_then(|dir| std::fs::create_dir_all(&dir).ok().map(|_| dir))
        .map(|dir| {
            let appender = tracing_appender::rolling::daily(dir, "drive-auth-setup.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
        });

    if tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .is_err()
    {
        // Already initialized (repeat init from tests).
        return;
    }

    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge not installed: {err}");
    }
    tracing::info!("logging initialized");
}
