mod app;
mod commands;
mod domain;
mod infra;
mod oauth;
mod shared;
pub mod test_support;

pub(crate) use shared::blocking;

use app::setup_state::SetupState;
use commands::*;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .manage(SetupState::default())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            crate::app::logging::init(app.handle());

            // Global panic hook: ensure any panic is written to disk logs for post-mortem
            // diagnosis. Payload is intentionally NOT logged to avoid leaking user data
            // (consistent with blocking.rs).
            std::panic::set_hook(Box::new(|panic_info| {
                let location = panic_info
                    .location()
                    .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::error!(
                    location = %location,
                    "PANIC: application panicked at {location}. Check the log file for context leading up to this panic."
                );
            }));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            workflow_status,
            credentials_select,
            token_path_select,
            authorize_and_save,
            app_about_get
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|_app_handle, _event| {});
}
