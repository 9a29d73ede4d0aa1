//! Usage: Runs the installed-app authorization and classifies its failures.

use std::io;
use std::path::Path;

use yup_oauth2::{InstalledFlowAuthenticator, InstalledFlowReturnMethod};

use crate::infra::token_store::{StoredCredential, TokenSink};
use crate::oauth::browser_delegate::OpenInBrowser;
use crate::shared::error::{AppError, AppResult, AUTH_FAILED, CREDENTIALS_FILE, STORAGE_ERROR};

/// Drive scope granted to the stored token. Fixed for the whole process.
pub(crate) const DRIVE_SCOPES: &[&str] = &["https://www.googleapis.com/auth/drive.file"];

/// Drives the full authorization: loads the client secret, opens the consent
/// page, waits on the ephemeral localhost redirect, and leaves the credential
/// record at `token_path` through the sink. Blocks until consent completes
/// or fails; there is no cancellation.
pub(crate) async fn authorize_and_store<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    credentials_path: &Path,
    token_path: &Path,
) -> AppResult<StoredCredential> {
    let secret = yup_oauth2::read_application_secret(credentials_path)
        .await
        .map_err(|e| classify_secret_error(credentials_path, &e))?;

    let sink = TokenSink::new(token_path);
    let auth = InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
        .flow_delegate(Box::new(OpenInBrowser::new(app.clone())))
        .with_storage(Box::new(sink.clone()))
        .build()
        .await
        .map_err(|e| {
            AppError::new(
                AUTH_FAILED,
                format!("failed to start the authorization flow: {e}"),
            )
        })?;

    tracing::info!(scopes = ?DRIVE_SCOPES, "waiting for browser consent");
    if let Err(err) = auth.token(DRIVE_SCOPES).await {
        // A failed token write surfaces through the library error too; the
        // sink's own record wins so storage failures keep their category.
        if let Some(write_err) = sink.take_write_error() {
            return Err(write_err);
        }
        return Err(AppError::new(
            AUTH_FAILED,
            format!("authorization failed: {err}"),
        ));
    }

    let record = sink.stored_record().ok_or_else(|| {
        AppError::new(
            STORAGE_ERROR,
            "authorization completed but no token record was stored",
        )
    })?;
    tracing::info!(token_path = %token_path.display(), "authorization complete");
    Ok(record)
}

/// `read_application_secret` folds both I/O and parse failures into
/// `io::Error`; unreadable files are credentials-file errors while malformed
/// contents belong to the auth category.
fn classify_secret_error(path: &Path, err: &io::Error) -> AppError {
    match err.kind() {
        io::ErrorKind::InvalidData => AppError::new(
            AUTH_FAILED,
            format!(
                "{} is not a valid OAuth client secret document: {err}",
                path.display()
            ),
        ),
        _ => AppError::new(
            CREDENTIALS_FILE,
            format!("cannot read credentials file {}: {err}", path.display()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_a_credentials_error() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let classified = classify_secret_error(Path::new("/tmp/missing.json"), &err);
        assert_eq!(classified.code(), CREDENTIALS_FILE);
        assert!(classified.message().contains("/tmp/missing.json"));
    }

    #[test]
    fn unreadable_file_is_a_credentials_error() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let classified = classify_secret_error(Path::new("/tmp/secret.json"), &err);
        assert_eq!(classified.code(), CREDENTIALS_FILE);
    }

    #[test]
    fn malformed_contents_are_an_auth_error() {
        let err = io::Error::new(io::ErrorKind::InvalidData, "expected value");
        let classified = classify_secret_error(Path::new("/tmp/secret.json"), &err);
        assert_eq!(classified.code(), AUTH_FAILED);
    }

    #[test]
    fn scope_set_is_the_single_drive_scope() {
        assert_eq!(
            DRIVE_SCOPES,
            ["https://www.googleapis.com/auth/drive.file"]
        );
    }
}
