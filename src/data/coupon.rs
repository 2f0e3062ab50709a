use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    data::loading::{LoadedPage, LoadingParams, ModelLoader, SearchableEntity},
    model::coupon::{CouponChanges, NewCoupon},
};

impl SearchableEntity for entity::prelude::Coupon {
    fn column_for(field: &str) -> Option<Self::Column> {
        match field {
            "id" => Some(entity::coupon::Column::Id),
            "code" => Some(entity::coupon::Column::Code),
            "status" => Some(entity::coupon::Column::Status),
            "discount_value" => Some(entity::coupon::Column::DiscountValue),
            "due_date" => Some(entity::coupon::Column::DueDate),
            _ => None,
        }
    }
}

pub struct CouponRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, record: NewCoupon) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            code: ActiveValue::Set(record.code),
            status: ActiveValue::Set(record.status.as_str().to_string()),
            discount_value: ActiveValue::Set(record.discount_value),
            due_date: ActiveValue::Set(record.due_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::coupon::Model>, DbErr> {
        entity::prelude::Coupon::find_by_id(id).one(self.db).await
    }

    /// Applies the supplied column changes, leaving unset fields untouched.
    pub async fn update(
        &self,
        id: i32,
        changes: CouponChanges,
    ) -> Result<entity::coupon::Model, DbErr> {
        let coupon = entity::prelude::Coupon::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Coupon with id {} not found",
                id
            )))?;

        let mut active_model: entity::coupon::ActiveModel = coupon.into();
        if let Some(code) = changes.code {
            active_model.code = ActiveValue::Set(code);
        }
        if let Some(status) = changes.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(discount_value) = changes.discount_value {
            active_model.discount_value = ActiveValue::Set(discount_value);
        }
        if let Some(due_date) = changes.due_date {
            active_model.due_date = ActiveValue::Set(due_date);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Coupon::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_paginated(
        &self,
        params: &LoadingParams,
    ) -> Result<LoadedPage<entity::coupon::Model>, DbErr> {
        ModelLoader::new(self.db)
            .load(entity::prelude::Coupon::find(), params)
            .await
    }
}
