//! User factory for creating test user entities.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Password stored for factory-created users unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Factory for creating test users with customizable fields.
///
/// Defaults: unique name and email, "admin" profile (most tests exercise the
/// admin API), and [`DEFAULT_PASSWORD`] hashed into a real Argon2 digest so
/// login flows verify against it.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    profile: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            profile: "admin".to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash factory password: {}", e)))?
            .to_string();

        entity::user::ActiveModel {
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            profile: ActiveValue::Set(self.profile),
            password_digest: ActiveValue::Set(digest),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific profile ("admin" or "client").
pub async fn create_user_with_profile(
    db: &DatabaseConnection,
    profile: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).profile(profile).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.name.is_empty());
        assert!(user.email.contains('@'));
        assert_eq!(user.profile, "admin");
        assert_ne!(user.password_digest, DEFAULT_PASSWORD);

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = UserFactory::new(db)
            .name("Custom User")
            .email("custom@example.com")
            .profile("client")
            .build()
            .await?;

        assert_eq!(user.name, "Custom User");
        assert_eq!(user.email, "custom@example.com");
        assert_eq!(user.profile, "client");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(User).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.email, user2.email);
        assert_ne!(user1.name, user2.name);

        Ok(())
    }
}
