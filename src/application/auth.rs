//! User registration use-case: validate, check uniqueness, create.

use crate::domain::{RegistrationError, User};
use crate::infra::db::repository::UserRepository;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields submitted with a registration attempt. Absent fields deserialize
/// to empty strings so validation can answer instead of the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegistrationService {
    users: UserRepository,
}

impl RegistrationService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Registers a new user.
    ///
    /// Empty fields count as missing, matching the form contract. The email
    /// pre-check produces the conflict answer; the unique index on the store
    /// backs it up, so a duplicate racing past the pre-check still surfaces
    /// as [`RegistrationError::EmailTaken`] instead of a created record.
    pub fn register(&self, request: RegistrationRequest) -> Result<User, RegistrationError> {
        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
            return Err(RegistrationError::MissingFields);
        }

        if self.users.find_by_email(&request.email)?.is_some() {
            return Err(RegistrationError::EmailTaken);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            password: request.password,
            created_at: Utc::now().to_rfc3339(),
        };
        match self.users.insert(&user) {
            Ok(()) => Ok(user),
            Err(err) if is_unique_violation(&err) => Err(RegistrationError::EmailTaken),
            Err(err) => Err(err.into()),
        }
    }
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<rusqlite::Error>(),
        Some(rusqlite::Error::SqliteFailure(failure, _))
            if failure.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
