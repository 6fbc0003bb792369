use crate::errors::domain::{DomainError, ErrorCode};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionErrorCode {
    InvalidKind,
    EmptyTerm,
}

impl ErrorCode for ConditionErrorCode {
    fn as_code_str(self) -> &'static str {
        match self {
            Self::InvalidKind => "invalid_kind",
            Self::EmptyTerm => "empty_term",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionError {
    code: ConditionErrorCode,
    message: String,
}

impl ConditionError {
    pub fn new(code: ConditionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ConditionErrorCode {
        self.code
    }
}

impl fmt::Display for ConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConditionError {}

impl DomainError for ConditionError {
    fn code_str(&self) -> &'static str {
        self.code.as_code_str()
    }

    fn message(&self) -> &str {
        &self.message
    }
}
