//! Usage: Tauri commands for the three-step authorization workflow.

use std::path::PathBuf;

use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::app::setup_state::SetupState;
use crate::blocking;
use crate::domain::workflow::WorkflowSnapshot;
use crate::oauth::installed_flow;
use crate::shared::error::AppResult;
use crate::shared::mutex_ext::MutexExt;

#[tauri::command]
pub(crate) fn workflow_status(state: tauri::State<'_, SetupState>) -> WorkflowSnapshot {
    state.0.lock_or_recover().snapshot()
}

#[tauri::command]
pub(crate) async fn credentials_select(
    app: tauri::AppHandle,
    state: tauri::State<'_, SetupState>,
) -> Result<WorkflowSnapshot, String> {
    let picker = app.clone();
    let pick = move || -> AppResult<Option<PathBuf>> {
        Ok(picker
            .dialog()
            .file()
            .set_title("Select Google Client Secret JSON")
            .add_filter("JSON Files", &["json"])
            .blocking_pick_file()
            .and_then(|f| f.into_path().ok()))
    };
    let selection = blocking::run("credentials_select_dialog", pick).await?;

    let mut workflow = state.0.lock_or_recover();
    if let Some(path) = &selection {
        tracing::info!(path = %path.display(), "credentials file selected");
    }
    workflow.select_credentials(selection);
    Ok(workflow.snapshot())
}

#[tauri::command]
pub(crate) async fn token_path_select(
    app: tauri::AppHandle,
    state: tauri::State<'_, SetupState>,
) -> Result<WorkflowSnapshot, String> {
    let picker = app.clone();
    let pick = move || -> AppResult<Option<PathBuf>> {
        Ok(picker
            .dialog()
            .file()
            .set_title("Select location to save token")
            .add_filter("JSON Files", &["json"])
            .set_file_name("token.json")
            .blocking_save_file()
            .and_then(|f| f.into_path().ok()))
    };
    let selection = blocking::run("token_path_select_dialog", pick).await?;

    let mut workflow = state.0.lock_or_recover();
    if let Some(path) = &selection {
        tracing::info!(path = %path.display(), "token save location selected");
    }
    workflow.select_token_path(selection);
    Ok(workflow.snapshot())
}

/// Re-checks the preconditions, runs the browser consent and stores the
/// token. Every failure ends here as an alert plus a status-line update;
/// nothing terminates the process and the user may simply retry.
#[tauri::command]
pub(crate) async fn authorize_and_save(
    app: tauri::AppHandle,
    state: tauri::State<'_, SetupState>,
) -> Result<WorkflowSnapshot, String> {
    let ready = state.0.lock_or_recover().ensure_ready();

    let result = match ready {
        Ok(inputs) => {
            installed_flow::authorize_and_store(&app, &inputs.credentials_path, &inputs.token_path)
                .await
                .map(|_record| inputs.token_path)
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(token_path) => {
            let snapshot = {
                let mut workflow = state.0.lock_or_recover();
                workflow.mark_authorized();
                workflow.snapshot()
            };
            tracing::info!(token_path = %token_path.display(), "token stored");
            show_modal(
                &app,
                "Success",
                format!("Token stored to {}", token_path.display()),
                MessageDialogKind::Info,
            )
            .await;
            Ok(snapshot)
        }
        Err(err) => {
            state.0.lock_or_recover().note_failure(&err);
            tracing::warn!(code = err.code(), "authorization attempt failed: {}", err);
            show_modal(
                &app,
                "Error",
                err.message().to_string(),
                MessageDialogKind::Error,
            )
            .await;
            Err(err.into())
        }
    }
}

async fn show_modal(
    app: &tauri::AppHandle,
    title: &str,
    message: String,
    kind: MessageDialogKind,
) {
    let app = app.clone();
    let title = title.to_string();
    let _ = blocking::run("workflow_modal", move || -> AppResult<bool> {
        Ok(app
            .dialog()
            .message(&message)
            .title(&title)
            .kind(kind)
            .blocking_show())
    })
    .await;
}
