use thiserror::Error;

use crate::domain::identity::Role;
use crate::domain::policy::Action;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Permission denied: {role} may not {action}")]
    PermissionDenied { role: Role, action: Action },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Validation: {0}")]
    Validation(String),
}
