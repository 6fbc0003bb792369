use playfinder::errors::domain::{DomainError, ErrorCode};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsErrorCode {
    DataDirUnavailable,
    ReadFailed,
    ParseFailed,
    SerializeFailed,
    WriteFailed,
}

impl ErrorCode for SettingsErrorCode {
    fn as_code_str(self) -> &'static str {
        match self {
            Self::DataDirUnavailable => "data_dir_unavailable",
            Self::ReadFailed => "read_failed",
            Self::ParseFailed => "parse_failed",
            Self::SerializeFailed => "serialize_failed",
            Self::WriteFailed => "write_failed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SettingsError {
    code: SettingsErrorCode,
    message: String,
}

impl SettingsError {
    pub fn new(code: SettingsErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn code(&self) -> SettingsErrorCode {
        self.code
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SettingsError {}

impl DomainError for SettingsError {
    fn code_str(&self) -> &'static str {
        self.code.as_code_str()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
