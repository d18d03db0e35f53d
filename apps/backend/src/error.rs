use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;

/// RFC 7807-style payload handed to embedding applications.
///
/// The crate has no HTTP surface of its own; the surrounding application
/// decides how to transport this (response body, RPC error, toast, ...).
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Forbidden: {detail}")]
    Forbidden { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Forbidden { .. } => ErrorCode::Forbidden,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Human-readable detail for this error
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Forbidden { detail } => detail.clone(),
            AppError::Db { detail } => detail.clone(),
            AppError::DbUnavailable { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
        }
    }

    /// Suggested HTTP-equivalent status for transports that want one
    pub fn status(&self) -> u16 {
        match self {
            AppError::Validation { .. } => 400,
            AppError::Conflict { .. } => 409,
            AppError::NotFound { .. } => 404,
            AppError::Forbidden { .. } => 403,
            AppError::Db { .. } => 500,
            AppError::DbUnavailable { .. } => 503,
            AppError::Config { .. } => 500,
            AppError::Internal { .. } => 500,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn problem_details(&self) -> ProblemDetails {
        let code = self.code();
        ProblemDetails {
            type_: format!("https://clubhub.app/errors/{}", code.as_str()),
            title: Self::humanize_code(code.as_str()),
            status: self.status(),
            detail: self.detail(),
            code: code.to_string(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::internal(format!("env var error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(crate::infra::db_errors::map_db_err(e))
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: match kind {
                    ValidationKind::VotingExpired => ErrorCode::VotingExpired,
                    ValidationKind::InvalidPlayer => ErrorCode::InvalidPlayer,
                    ValidationKind::MissingFirstPlace => ErrorCode::MissingFirstPlace,
                    ValidationKind::DuplicateNomination => ErrorCode::DuplicateNomination,
                    _ => ErrorCode::ValidationError,
                },
                detail,
            },
            DomainError::Conflict(kind, detail) => AppError::Conflict {
                code: match kind {
                    ConflictKind::AlreadyVoted => ErrorCode::AlreadyVoted,
                    ConflictKind::VotingClosed => ErrorCode::VotingClosed,
                    ConflictKind::AlreadyClosed => ErrorCode::AlreadyClosed,
                    _ => ErrorCode::Conflict,
                },
                detail,
            },
            DomainError::NotFound(kind, detail) => AppError::NotFound {
                code: match kind {
                    NotFoundKind::Match => ErrorCode::MatchNotFound,
                    NotFoundKind::Player => ErrorCode::PlayerNotFound,
                    NotFoundKind::Session => ErrorCode::SessionNotFound,
                    _ => ErrorCode::NotFound,
                },
                detail,
            },
            DomainError::Forbidden(detail) => AppError::Forbidden { detail },
            DomainError::Infra(kind, detail) => match kind {
                InfraErrorKind::DbUnavailable => AppError::DbUnavailable { detail },
                InfraErrorKind::Timeout => AppError::Db { detail },
                InfraErrorKind::Config => AppError::Config { detail },
                InfraErrorKind::Other(_) => AppError::Db { detail },
            },
        }
    }
}
