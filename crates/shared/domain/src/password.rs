//! Password value object.
//!
//! Customers submit plain text passwords on create and update; only the
//! Argon2 hash is ever stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Hashed password.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password.
    ///
    /// # Errors
    /// Returns a hashing error if the Argon2 backend fails.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::Hashing(e.to_string()))?
            .to_string();

        Ok(Self { hash })
    }

    pub fn into_string(self) -> String {
        self.hash
    }
}

#[cfg(test)]
impl Password {
    pub(crate) fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    fn as_str(&self) -> &str {
        &self.hash
    }

    fn verify(&self, plain_text: &str) -> bool {
        use argon2::password_hash::{PasswordHash, PasswordVerifier};

        PasswordHash::new(&self.hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
