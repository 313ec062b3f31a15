//! Credential Hash Service.

use crate::{AuthError, Result as AuthErrorResult};

use acct_core::ErrorLocation;

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core,
    },
};

/// One-way hash and verify of account passwords
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable
    fn verify(&self, hash: &str, plaintext: &str) -> AuthErrorResult<bool>;
}

/// Argon2id with the crate's default parameters, PHC-encoded with a random salt
#[derive(Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    #[track_caller]
    fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut rand_core::OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn verify(&self, hash: &str, plaintext: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::Hashing {
            message: format!("stored hash is not a PHC string: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
