//! Customer domain entity and its write payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Customer domain entity.
///
/// `password` holds the stored hash while the entity is inside the service
/// and is cleared by [`Customer::redacted`] before it is handed to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique customer identifier (server assigned)
    pub id: Uuid,
    /// Display name
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Ada Lovelace"))]
    pub name: Option<String>,
    /// Email address, unique across customers
    #[cfg_attr(feature = "openapi", schema(example = "ada@example.com"))]
    pub email: String,
    /// Always empty on responses
    #[cfg_attr(feature = "openapi", schema(example = ""))]
    pub password: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Date of birth
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl Customer {
    /// Clear the password so the entity can leave the service boundary.
    pub fn redacted(mut self) -> Self {
        self.password.clear();
        self
    }

    /// Check whether the password field has been cleared
    pub fn is_redacted(&self) -> bool {
        self.password.is_empty()
    }
}

/// Customer write payload (create and full-replace update).
///
/// Any `id` supplied by the caller is accepted on the wire but never trusted:
/// create assigns a fresh id and update takes the id from the path.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    /// Ignored by the service
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Display name
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Ada Lovelace"))]
    pub name: Option<String>,
    /// Email address
    #[validate(email(message = "email must be a valid address"))]
    #[cfg_attr(feature = "openapi", schema(example = "ada@example.com"))]
    pub email: String,
    /// Plain text password
    #[cfg_attr(feature = "openapi", schema(example = "s3cret!"))]
    pub password: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Date of birth (ISO 8601)
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl CustomerPayload {
    /// Run the structural checks and return the payload unchanged if it passes.
    pub fn validated(self) -> DomainResult<Self> {
        self.validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        Ok(self)
    }

    /// Build the entity to store under `id` with an already hashed password.
    pub fn into_customer(self, id: Uuid, password: Password) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            password: password.into_string(),
            phone: self.phone,
            birth_date: self.birth_date,
        }
    }
}
