//! Usage: Run blocking work (dialogs, file I/O) off the async runtime with a stable label.

use crate::shared::error::{AppError, AppResult};

pub async fn run<T, E>(
    label: &'static str,
    f: impl FnOnce() -> Result<T, E> + Send + 'static,
) -> AppResult<T>
where
    T: Send + 'static,
    E: Into<AppError> + Send + 'static,
{
    match tauri::async_runtime::spawn_blocking(f).await {
        Ok(result) => result.map_err(Into::into),
        // Join failures never carry panic payloads to the UI; those may contain user data.
        Err(tauri::Error::JoinError(join)) if join.is_panic() => {
            tracing::error!(label, "blocking task panicked");
            Err(AppError::new("TASK_JOIN", format!("{label}: task panicked")))
        }
        Err(_) => {
            tracing::warn!(label, "blocking task did not complete");
            Err(AppError::new(
                "TASK_JOIN",
                format!("{label}: task did not complete"),
            ))
        }
    }
}
