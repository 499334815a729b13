use thiserror::Error;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserProfilesError {
    #[error("Invalid identity: '{identity}' contains no digits")]
    InvalidIdentity { identity: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("A save is already in progress")]
    SaveInProgress,
}

impl UserProfilesError {
    pub fn invalid_identity(identity: impl Into<String>) -> Self {
        Self::InvalidIdentity {
            identity: identity.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}

impl From<crate::domain::error::DomainError> for UserProfilesError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            InvalidIdentity { identity } => Self::invalid_identity(identity),
            Persistence { message } => Self::persistence(message),
        }
    }
}
