use crate::{Result as UserErrorResult, UserError, UserRepository};

use acct_auth::CredentialHasher;
use acct_core::validation::{validate_email, validate_password};
use acct_core::{Profile, ProfileEdit, User};

use std::sync::{Arc, OnceLock};

use log::{debug, info, warn};

/// Plaintext behind the hash verified when the login email is unknown
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Signup, login and profile editing on top of [`UserRepository`]
pub struct AccountService {
    users: Arc<UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
    /// Hash of [`DECOY_PASSWORD`], made on first use by the configured hasher
    decoy_hash: OnceLock<String>,
}

impl AccountService {
    pub fn new(users: Arc<UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self {
            users,
            hasher,
            decoy_hash: OnceLock::new(),
        }
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// `Validation` for a malformed email, a weak password or a mismatched
    /// confirmation; `EmailConflict` when the email is taken.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> UserErrorResult<User> {
        let email = email.trim();
        validate_email(email)?;

        if password != confirm_password {
            return Err(UserError::validation(
                "passwords do not match",
                "confirmPassword",
            ));
        }
        validate_password(password)?;

        let password_hash = self.hasher.hash(password)?;
        let user = self.users.create(&User::new(email, password_hash)).await?;

        info!("New account {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Check credentials. Unknown email and wrong password both come back
    /// as `InvalidCredentials`, and both pay for one hash verification.
    pub async fn login(&self, email: &str, password: &str) -> UserErrorResult<User> {
        let user = match self.users.find_by_email(email.trim()).await {
            Ok(user) => user,
            Err(e) if e.is_not_found() => {
                debug!("Login for unknown email");
                self.verify_decoy(password);
                return Err(UserError::invalid_credentials());
            }
            Err(e) => return Err(e),
        };

        if !self.hasher.verify(&user.password_hash, password)? {
            debug!("Login with wrong password for user {}", user.id);
            return Err(UserError::invalid_credentials());
        }

        Ok(user)
    }

    /// Spend the same hashing work as a real password check; the outcome is ignored
    fn verify_decoy(&self, password: &str) {
        let decoy = self.decoy_hash.get_or_init(|| {
            self.hasher.hash(DECOY_PASSWORD).unwrap_or_else(|e| {
                warn!("Failed to hash decoy password: {}", e);
                String::new()
            })
        });
        let _ = self.hasher.verify(decoy, password);
    }

    /// Create or overwrite the profile of the account behind `email`
    pub async fn edit_profile(
        &self,
        email: &str,
        nickname: &str,
        birthday: &str,
        description: &str,
    ) -> UserErrorResult<Profile> {
        let edit = ProfileEdit::parse(nickname, birthday, description)?;
        let user = self.users.find_by_email(email).await?;

        self.users.add_profile(user.id, &edit).await
    }

    /// The account behind `email` together with its profile
    pub async fn profile(&self, email: &str) -> UserErrorResult<(User, Profile)> {
        let user = self.users.find_by_email(email).await?;
        let profile = self.users.find_profile_by_user(user.id).await?;

        Ok((user, profile))
    }
}
