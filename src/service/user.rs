use sea_orm::DatabaseConnection;

use crate::{
    data::{
        loading::{LoadedPage, LoadingParams},
        user::UserRepository,
    },
    error::AppError,
    model::{
        blank,
        user::{NewUser, Profile, User, UserChanges, UserParams},
    },
    service::auth::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn load_page(&self, params: &LoadingParams) -> Result<LoadedPage<User>, AppError> {
        let page = UserRepository::new(self.db).get_paginated(params).await?;

        page.try_map(User::from_entity)
    }

    pub async fn create(&self, params: UserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let mut errors = params.validate(true);
        if !blank(&params.email) {
            let email = params.email.as_deref().unwrap_or_default();
            if repo.email_taken(email, None).await? {
                errors.add("email", "has already been taken");
            }
        }
        errors.into_result()?;

        // Validation guarantees presence and membership of these fields.
        let record = NewUser {
            name: params.name.clone().unwrap_or_default(),
            email: params.email.clone().unwrap_or_default(),
            profile: params
                .profile
                .as_deref()
                .and_then(Profile::parse)
                .unwrap_or(Profile::Client),
            password_digest: hash_password(params.password.as_deref().unwrap_or_default())?,
        };

        let created = repo.create(record).await?;

        User::from_entity(created)
    }

    /// Partial update. Returns None when the user does not exist; validation
    /// runs against the merged attribute set so untouched fields keep their
    /// stored values.
    pub async fn update(&self, id: i32, params: UserParams) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let current = User::from_entity(existing)?;

        let merged = params.clone().merge_into(&current);
        let mut errors = merged.validate(false);
        if !blank(&merged.email) {
            let email = merged.email.as_deref().unwrap_or_default();
            if repo.email_taken(email, Some(id)).await? {
                errors.add("email", "has already been taken");
            }
        }
        errors.into_result()?;

        let password_digest = match params.password.as_deref() {
            Some(password) if !password.trim().is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        let changes = UserChanges {
            name: params.name,
            email: params.email,
            profile: params.profile.as_deref().and_then(Profile::parse),
            password_digest,
        };

        let updated = repo.update(id, changes).await?;

        User::from_entity(updated).map(Some)
    }

    /// Returns true when a user was deleted, false when the id was unknown.
    pub async fn destroy(&self, id: i32) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
