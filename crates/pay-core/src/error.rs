//! # Payment Error Types
//!
//! Typed error handling for the feegate payment backend.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Client omitted a required identity field
    #[error("Missing fields")]
    MissingFields,

    /// Submitted identity is not on the allow-list
    #[error("Invalid institute or roll number")]
    IdentityMismatch,

    /// Network/HTTP error communicating with the gateway
    #[error("Gateway unavailable: {0}")]
    GatewayUnavailable(String),

    /// Gateway answered with an error response
    #[error("Gateway rejected request [{provider}]: {message}")]
    GatewayRejected { provider: String, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns true if the error came from talking to the gateway
    pub fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            PaymentError::GatewayUnavailable(_)
                | PaymentError::GatewayRejected { .. }
                | PaymentError::Serialization(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::MissingFields => 400,
            PaymentError::IdentityMismatch => 400,
            PaymentError::Configuration(_) => 500,
            PaymentError::GatewayUnavailable(_) => 500,
            PaymentError::GatewayRejected { .. } => 500,
            PaymentError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
