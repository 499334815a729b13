use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid identity: '{identity}' contains no digits")]
    InvalidIdentity { identity: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl DomainError {
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
