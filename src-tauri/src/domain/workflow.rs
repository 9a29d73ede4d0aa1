//! Usage: Pure state machine for the three-step authorization workflow.
//!
//! Button callbacks are modeled as transitions over an explicit state value
//! so the authorize preconditions stay testable without a display.

use std::path::PathBuf;

use crate::shared::error::{AppError, AppResult, AUTH_FAILED, CREDENTIALS_FILE, MISSING_INPUT, STORAGE_ERROR};

pub(crate) const STATUS_PICK_CREDENTIALS: &str =
    "Authenticate with Google Drive and save your token.";
pub(crate) const STATUS_CREDENTIALS_SELECTED: &str =
    "Credentials file selected. Now choose where to save your token.";
pub(crate) const STATUS_TOKEN_PATH_SELECTED: &str =
    "Token path selected. Click 'Authorize and Save Token' to continue.";
pub(crate) const STATUS_AUTHORIZED: &str = "Token saved! You can close this window.";

const STATUS_MISSING_CREDENTIALS: &str = "Select a valid credentials JSON file.";
const STATUS_MISSING_TOKEN_PATH: &str = "Select a valid token save location.";
const STATUS_CREDENTIALS_UNREADABLE: &str =
    "Credentials file not found. Select a valid JSON file.";
const STATUS_AUTH_FAILED: &str = "Authentication failed. Try again.";
const STATUS_STORAGE_FAILED: &str = "An error occurred while saving the token. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SetupStep {
    AwaitingCredentials,
    AwaitingTokenPath,
    ReadyToAuthorize,
    Authorized,
}

/// Paths the authorize action runs with once preconditions hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthorizeInputs {
    pub(crate) credentials_path: PathBuf,
    pub(crate) token_path: PathBuf,
}

/// Serializable view of the workflow for the window (label text + button
/// enablement). Enablement is a display convenience only; `ensure_ready`
/// re-checks the paths.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub(crate) struct WorkflowSnapshot {
    pub(crate) credentials_path: Option<String>,
    pub(crate) token_path: Option<String>,
    pub(crate) step: SetupStep,
    pub(crate) token_select_enabled: bool,
    pub(crate) authorize_enabled: bool,
    pub(crate) status_line: String,
}

#[derive(Debug)]
pub(crate) struct AuthWorkflow {
    credentials_path: Option<PathBuf>,
    token_path: Option<PathBuf>,
    authorized: bool,
    status_line: String,
}

impl Default for AuthWorkflow {
    fn default() -> Self {
        Self {
            credentials_path: None,
            token_path: None,
            authorized: false,
            status_line: STATUS_PICK_CREDENTIALS.to_string(),
        }
    }
}

impl AuthWorkflow {
    /// Applies a credentials-file selection. `None` means the dialog was
    /// cancelled and nothing changes.
    pub(crate) fn select_credentials(&mut self, selection: Option<PathBuf>) -> bool {
        let Some(path) = selection else {
            return false;
        };
        self.credentials_path = Some(path);
        if !self.authorized {
            self.status_line = STATUS_CREDENTIALS_SELECTED.to_string();
        }
        true
    }

    /// Applies a token-save-path selection. `None` means the dialog was
    /// cancelled and nothing changes.
    pub(crate) fn select_token_path(&mut self, selection: Option<PathBuf>) -> bool {
        let Some(path) = selection else {
            return false;
        };
        self.token_path = Some(path);
        if !self.authorized {
            self.status_line = STATUS_TOKEN_PATH_SELECTED.to_string();
        }
        true
    }

    /// Authorize precondition check. Fails with a distinct missing-input
    /// error per path; credentials are checked first.
    pub(crate) fn ensure_ready(&self) -> AppResult<AuthorizeInputs> {
        let credentials_path = self
            .credentials_path
            .clone()
            .ok_or_else(|| AppError::new(MISSING_INPUT, "no credentials file selected"))?;
        let token_path = self
            .token_path
            .clone()
            .ok_or_else(|| AppError::new(MISSING_INPUT, "no token save location selected"))?;
        Ok(AuthorizeInputs {
            credentials_path,
            token_path,
        })
    }

    /// Terminal success state.
    pub(crate) fn mark_authorized(&mut self) {
        self.authorized = true;
        self.status_line = STATUS_AUTHORIZED.to_string();
    }

    /// Updates the status line after a failed authorize attempt. The stored
    /// paths are left alone so the user can retry from where they stopped.
    pub(crate) fn note_failure(&mut self, error: &AppError) {
        self.status_line = match error.code() {
            MISSING_INPUT => {
                if self.credentials_path.is_none() {
                    STATUS_MISSING_CREDENTIALS
                } else {
                    STATUS_MISSING_TOKEN_PATH
                }
            }
            CREDENTIALS_FILE => STATUS_CREDENTIALS_UNREADABLE,
            AUTH_FAILED => STATUS_AUTH_FAILED,
            STORAGE_ERROR => STATUS_STORAGE_FAILED,
            _ => STATUS_STORAGE_FAILED,
        }
        .to_string();
    }

    pub(crate) fn step(&self) -> SetupStep {
        if self.authorized {
            SetupStep::Authorized
        } else if self.credentials_path.is_some() && self.token_path.is_some() {
            SetupStep::ReadyToAuthorize
        } else if self.credentials_path.is_some() {
            SetupStep::AwaitingTokenPath
        } else {
            SetupStep::AwaitingCredentials
        }
    }

    pub(crate) fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            credentials_path: self
                .credentials_path
                .as_ref()
                .map(|p| p.display().to_string()),
            token_path: self.token_path.as_ref().map(|p| p.display().to_string()),
            step: self.step(),
            token_select_enabled: self.credentials_path.is_some(),
            authorize_enabled: self.credentials_path.is_some() && self.token_path.is_some(),
            status_line: self.status_line.clone(),
        }
    }
}
