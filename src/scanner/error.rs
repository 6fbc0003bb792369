use crate::errors::{
    api_error::ApiResult,
    domain::{self, DomainError, ErrorCode},
};
use crate::fs_utils::FsUtilsError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorCode {
    InvalidDirectory,
    NoConditions,
}

impl ErrorCode for ScanErrorCode {
    fn as_code_str(self) -> &'static str {
        match self {
            Self::InvalidDirectory => "invalid_directory",
            Self::NoConditions => "no_conditions",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanError {
    code: ScanErrorCode,
    message: String,
}

impl ScanError {
    pub fn new(code: ScanErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ScanErrorCode {
        self.code
    }

    pub(super) fn invalid_directory(error: FsUtilsError) -> Self {
        Self::new(
            ScanErrorCode::InvalidDirectory,
            format!("Please choose a valid directory: {error}"),
        )
    }

    pub(super) fn no_conditions() -> Self {
        Self::new(
            ScanErrorCode::NoConditions,
            "Enter at least one character name to search for",
        )
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ScanError {}

impl DomainError for ScanError {
    fn code_str(&self) -> &'static str {
        self.code.as_code_str()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

pub type ScanResult<T> = Result<T, ScanError>;

pub fn map_api_result<T>(result: ScanResult<T>) -> ApiResult<T> {
    domain::map_api_result(result)
}
