use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Automobile not found: {vin}")]
    AutoNotFound { vin: String },

    #[error("Automobile with VIN '{vin}' already exists")]
    VinAlreadyExists { vin: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    pub fn auto_not_found(vin: impl Into<String>) -> Self {
        Self::AutoNotFound { vin: vin.into() }
    }

    pub fn vin_already_exists(vin: impl Into<String>) -> Self {
        Self::VinAlreadyExists { vin: vin.into() }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
