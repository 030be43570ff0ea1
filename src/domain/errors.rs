// src/domain/errors.rs
use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Why a candidate record was rejected. Each kind names the offending field
/// where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field")]
pub enum ValidationErrorKind {
    MissingField(&'static str),
    InvalidEmail,
    InvalidEnum(&'static str),
    InvalidType(&'static str),
    InvalidTimestamp,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing field '{field}'"),
            Self::InvalidEmail => f.write_str("invalid email"),
            Self::InvalidEnum(field) => write!(f, "value of '{field}' is not an allowed variant"),
            Self::InvalidType(field) => write!(f, "field '{field}' has the wrong type"),
            Self::InvalidTimestamp => f.write_str("updated_at must not precede created_at"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("validation error: {kind}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }

    pub fn missing(field: &'static str) -> Self {
        Self::new(ValidationErrorKind::MissingField(field))
    }

    pub fn invalid_enum(field: &'static str) -> Self {
        Self::new(ValidationErrorKind::InvalidEnum(field))
    }

    pub fn invalid_type(field: &'static str) -> Self {
        Self::new(ValidationErrorKind::InvalidType(field))
    }

    pub fn invalid_email() -> Self {
        Self::new(ValidationErrorKind::InvalidEmail)
    }

    pub fn invalid_timestamp() -> Self {
        Self::new(ValidationErrorKind::InvalidTimestamp)
    }
}

impl From<ValidationErrorKind> for ValidationError {
    fn from(kind: ValidationErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
