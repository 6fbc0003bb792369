use crate::errors::domain::{classify_io_error, DomainError, ErrorCode, IoErrorHint};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayErrorCode {
    NotFound,
    PermissionDenied,
    ReadFailed,
    ParseFailed,
    InvalidShape,
}

impl ErrorCode for PlayErrorCode {
    fn as_code_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::ReadFailed => "read_failed",
            Self::ParseFailed => "parse_failed",
            Self::InvalidShape => "invalid_shape",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayError {
    code: PlayErrorCode,
    message: String,
}

impl PlayError {
    pub fn new(code: PlayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> PlayErrorCode {
        self.code
    }

    pub(super) fn from_io_error(path: &Path, error: std::io::Error) -> Self {
        let code = match classify_io_error(&error) {
            IoErrorHint::NotFound => PlayErrorCode::NotFound,
            IoErrorHint::PermissionDenied => PlayErrorCode::PermissionDenied,
            _ => PlayErrorCode::ReadFailed,
        };
        Self::new(code, format!("Cannot read {}: {error}", path.display()))
    }

    pub(super) fn from_json_error(path: &Path, error: serde_json::Error) -> Self {
        // serde_json reports a type mismatch (e.g. an object at the top level)
        // as a data error; everything else is broken syntax or truncation.
        let code = if error.is_data() {
            PlayErrorCode::InvalidShape
        } else {
            PlayErrorCode::ParseFailed
        };
        Self::new(code, format!("Cannot parse {}: {error}", path.display()))
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PlayError {}

impl DomainError for PlayError {
    fn code_str(&self) -> &'static str {
        self.code.as_code_str()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

pub type PlayResult<T> = Result<T, PlayError>;
