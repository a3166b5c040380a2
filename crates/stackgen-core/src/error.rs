//! Unified error handling for Stackgen Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stackgen Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Errors from the domain layer (business logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl Error {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit-code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid input (names, flags).
    Validation,
    /// Required prior state is missing or the target is unsuitable.
    Precondition,
    /// A Create-mode write conflicted with existing content.
    Conflict,
    /// A named member or artifact was not found.
    NotFound,
    /// An external tool failed (non-fatal to written artifacts).
    External,
    /// Unexpected internal failure.
    Internal,
}

/// Convenient result type alias.
pub type Result<T> = std::result::Result<T, Error>;
