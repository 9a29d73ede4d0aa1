//! Usage: Unified application error model (maps failures to `CODE: message` strings).

pub type AppResult<T> = Result<T, AppError>;

/// Credentials path or token path unset at authorize time.
pub const MISSING_INPUT: &str = "MISSING_INPUT";
/// Selected client-secret file does not exist or is unreadable.
pub const CREDENTIALS_FILE: &str = "CREDENTIALS_FILE";
/// The external OAuth flow failed (denied consent, network, bad secret contents).
pub const AUTH_FAILED: &str = "AUTH_FAILED";
/// Directory creation, serialization or write failed while persisting the token.
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";

#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct AppError {
    code: String,
    message: String,
}

impl AppError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Recognizes a leading `CODE:` prefix (uppercase ASCII, digits, underscores).
fn split_code_message(raw: &str) -> Option<(&str, &str)> {
    let msg = raw.trim();
    if msg.is_empty() {
        return None;
    }

    let (maybe_code, rest) = msg.split_once(':')?;
    let code = maybe_code.trim();
    let mut chars = code.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    if !chars.all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_') {
        return None;
    }
    Some((code, rest.trim()))
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        if let Some((code, rest)) = split_code_message(&value) {
            let message = if rest.is_empty() { value.trim() } else { rest };
            return AppError::new(code.to_string(), message.to_string());
        }
        AppError::new("INTERNAL_ERROR", value)
    }
}

impl From<&'static str> for AppError {
    fn from(value: &'static str) -> Self {
        AppError::from(value.to_string())
    }
}

impl From<AppError> for String {
    fn from(value: AppError) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_parses_code_prefix() {
        let err = AppError::from("MISSING_INPUT: no credentials file selected".to_string());
        assert_eq!(err.code(), MISSING_INPUT);
        assert_eq!(err.message(), "no credentials file selected");
    }

    #[test]
    fn from_string_without_code_is_internal() {
        let err = AppError::from("something went sideways".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn lowercase_prefix_is_not_a_code() {
        let err = AppError::from("path: /tmp/x is missing".to_string());
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn display_round_trips_through_string() {
        let err = AppError::new(STORAGE_ERROR, "disk full");
        let rendered: String = err.clone().into();
        assert_eq!(rendered, "STORAGE_ERROR: disk full");
        let reparsed = AppError::from(rendered);
        assert_eq!(reparsed.code(), err.code());
        assert_eq!(reparsed.message(), err.message());
    }
}
