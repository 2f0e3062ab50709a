use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email/password pair against the stored digest.
    ///
    /// Returns `AuthError::InvalidCredentials` for both unknown emails and
    /// wrong passwords so the response never reveals which one failed.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_digest) {
            return Err(AuthError::InvalidCredentials.into());
        }

        User::from_entity(user)
    }
}

/// Hashes a password with Argon2 and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verifies a password against a stored digest. An unparsable digest counts
/// as a failed verification rather than an error.
pub fn verify_password(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
