//! Domain error types for Pragatix.
//!
//! These errors represent domain-level failures that can occur during
//! business operations. They are more specific than infrastructure errors
//! and can be handled appropriately at the application layer.

use thiserror::Error;

/// Domain errors related to user registration.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("User already exists")]
    EmailTaken,

    #[error("Registration failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}
