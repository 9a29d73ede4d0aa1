//! Usage: Token persistence for the installed-app flow (custom yup-oauth2 storage).

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use yup_oauth2::storage::{TokenInfo, TokenStorage};

use crate::shared::error::{AppError, AppResult, STORAGE_ERROR};
use crate::shared::mutex_ext::MutexExt;

/// Credential record written to the user-chosen token path. Rewritten
/// wholesale on every successful authorization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub(crate) struct StoredCredential {
    pub(crate) access_token: Option<String>,
    pub(crate) refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id_token: Option<String>,
    pub(crate) scopes: Vec<String>,
    /// Unix seconds; `None` for tokens without a reported expiry.
    pub(crate) expires_at: Option<i64>,
}

impl StoredCredential {
    fn from_token_info(scopes: &[&str], token: TokenInfo) -> Self {
        Self {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            id_token: token.id_token,
            scopes: scopes.iter().map(|s| s.to_string()).collect(),
            expires_at: token.expires_at.map(|t| t.unix_timestamp()),
        }
    }
}

/// Storage handed to the authenticator. `get` never returns a cached token,
/// so every run drives a fresh browser consent; `set` persists the record
/// and remembers write failures for the flow layer to classify.
#[derive(Clone)]
pub(crate) struct TokenSink {
    path: PathBuf,
    stored: Arc<Mutex<Option<StoredCredential>>>,
    write_error: Arc<Mutex<Option<AppError>>>,
}

impl TokenSink {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            stored: Arc::new(Mutex::new(None)),
            write_error: Arc::new(Mutex::new(None)),
        }
    }

    pub(crate) fn stored_record(&self) -> Option<StoredCredential> {
        self.stored.lock_or_recover().clone()
    }

    pub(crate) fn take_write_error(&self) -> Option<AppError> {
        self.write_error.lock_or_recover().take()
    }
}

#[async_trait]
impl TokenStorage for TokenSink {
    async fn set(&self, scopes: &[&str], token: TokenInfo) -> anyhow::Result<()> {
        let record = StoredCredential::from_token_info(scopes, token);
        match write_record(&self.path, &record) {
            Ok(()) => {
                *self.stored.lock_or_recover() = Some(record);
                Ok(())
            }
            Err(err) => {
                *self.write_error.lock_or_recover() = Some(err.clone());
                Err(anyhow::Error::new(err))
            }
        }
    }

    async fn get(&self, _target_scopes: &[&str]) -> Option<TokenInfo> {
        None
    }
}

/// Creates the parent directory if needed, writes the record wholesale and
/// restricts the file mode to owner read/write.
pub(crate) fn write_record(path: &Path, record: &StoredCredential) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::new(
                    STORAGE_ERROR,
                    format!("failed to create token directory {}: {e}", parent.display()),
                )
            })?;
        }
    }

    let content = serde_json::to_vec_pretty(record).map_err(|e| {
        AppError::new(STORAGE_ERROR, format!("failed to serialize token: {e}"))
    })?;
    std::fs::write(path, content).map_err(|e| {
        AppError::new(
            STORAGE_ERROR,
            format!("failed to write token file {}: {e}", path.display()),
        )
    })?;
    restrict_to_owner(path).map_err(|e| {
        AppError::new(
            STORAGE_ERROR,
            format!(
                "failed to restrict permissions on {}: {e}",
                path.display()
            ),
        )
    })?;

    tracing::info!(path = %path.display(), "token record written");
    Ok(())
}

pub(crate) fn read_record(path: &Path) -> AppResult<StoredCredential> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::new(
            STORAGE_ERROR,
            format!("failed to read token file {}: {e}", path.display()),
        )
    })?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::new(
            STORAGE_ERROR,
            format!("token file {} is malformed: {e}", path.display()),
        )
    })
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o600);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
