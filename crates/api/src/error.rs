// Copyright (C) 2026 The shift-sched authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shift_sched_domain::DomainError;
use shift_sched_persistence::PersistenceError;

use crate::codec::CodecError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract. Each variant carries the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The presented credentials do not match the registry.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the message meant for the client, without the variant prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::AuthenticationFailed { reason } => reason,
            Self::InvalidInput { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::Internal { message } => message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: format!("Persistence error: {err}"),
        }
    }
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        Self::InvalidInput {
            field: String::from("cid"),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidTimeSlot { .. } => "timeSlot",
        DomainError::InvalidDayOfWeek { .. } => "dayOfWeek",
        DomainError::InvalidName(_) => "name",
        DomainError::InvalidOrganizationName(_) => "organization",
        DomainError::DateParseError { .. } => "hireDate",
    };
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}
