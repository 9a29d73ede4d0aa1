//! Usage: Public test helpers for integration tests.

use std::path::{Path, PathBuf};

use crate::domain::workflow::AuthWorkflow;
use crate::shared::error::AppResult;

fn serialize_json(value: impl serde::Serialize) -> AppResult<serde_json::Value> {
    Ok(serde_json::to_value(value)
        .map_err(|e| format!("STORAGE_ERROR: failed to serialize json: {e}"))?)
}

/// Display-free handle on the workflow state machine.
#[derive(Default)]
pub struct WorkflowHarness(AuthWorkflow);

impl WorkflowHarness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_credentials(&mut self, selection: Option<&Path>) -> bool {
        self.0.select_credentials(selection.map(Path::to_path_buf))
    }

    pub fn select_token_path(&mut self, selection: Option<&Path>) -> bool {
        self.0.select_token_path(selection.map(Path::to_path_buf))
    }

    /// Runs the authorize precondition check; `Ok` carries the two paths.
    pub fn ensure_ready(&self) -> Result<(PathBuf, PathBuf), String> {
        self.0
            .ensure_ready()
            .map(|inputs| (inputs.credentials_path, inputs.token_path))
            .map_err(Into::into)
    }

    /// Applies the status-line update for a failed attempt (`CODE: message`).
    pub fn note_failure(&mut self, error: String) {
        self.0.note_failure(&error.into());
    }

    pub fn mark_authorized(&mut self) {
        self.0.mark_authorized();
    }

    pub fn snapshot_json(&self) -> AppResult<serde_json::Value> {
        serialize_json(self.0.snapshot())
    }
}

pub fn drive_scopes() -> Vec<String> {
    crate::oauth::installed_flow::DRIVE_SCOPES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn token_record_write_json(path: &Path, record: serde_json::Value) -> AppResult<()> {
    let record: crate::infra::token_store::StoredCredential = serde_json::from_value(record)
        .map_err(|e| format!("STORAGE_ERROR: invalid token record json: {e}"))?;
    crate::infra::token_store::write_record(path, &record)
}

pub fn token_record_read_json(path: &Path) -> AppResult<serde_json::Value> {
    let record = crate::infra::token_store::read_record(path)?;
    serialize_json(record)
}

pub async fn authorize_and_store_json<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    credentials_path: &Path,
    token_path: &Path,
) -> AppResult<serde_json::Value> {
    let record =
        crate::oauth::installed_flow::authorize_and_store(app, credentials_path, token_path)
            .await?;
    serialize_json(record)
}
