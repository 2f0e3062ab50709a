//! User repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    data::loading::{LoadedPage, LoadingParams, ModelLoader, SearchableEntity},
    model::user::{NewUser, Profile, UserChanges},
};

impl SearchableEntity for entity::prelude::User {
    fn column_for(field: &str) -> Option<Self::Column> {
        match field {
            "id" => Some(entity::user::Column::Id),
            "name" => Some(entity::user::Column::Name),
            "email" => Some(entity::user::Column::Email),
            "profile" => Some(entity::user::Column::Profile),
            _ => None,
        }
    }
}

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, record: NewUser) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(record.name),
            email: ActiveValue::Set(record.email),
            profile: ActiveValue::Set(record.profile.as_str().to_string()),
            password_digest: ActiveValue::Set(record.password_digest),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks email uniqueness, optionally excluding the record being
    /// updated.
    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = excluding {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if any admin-profile user exists. Used during startup to decide
    /// whether to seed the bootstrap admin.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Profile.eq(Profile::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Applies the supplied column changes, leaving unset fields untouched.
    pub async fn update(
        &self,
        id: i32,
        changes: UserChanges,
    ) -> Result<entity::user::Model, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = changes.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(profile) = changes.profile {
            active_model.profile = ActiveValue::Set(profile.as_str().to_string());
        }
        if let Some(password_digest) = changes.password_digest {
            active_model.password_digest = ActiveValue::Set(password_digest);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_paginated(
        &self,
        params: &LoadingParams,
    ) -> Result<LoadedPage<entity::user::Model>, DbErr> {
        ModelLoader::new(self.db)
            .load(entity::prelude::User::find(), params)
            .await
    }
}
