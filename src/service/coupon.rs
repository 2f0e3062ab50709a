use sea_orm::DatabaseConnection;

use crate::{
    data::{
        coupon::CouponRepository,
        loading::{LoadedPage, LoadingParams},
    },
    error::AppError,
    model::coupon::{Coupon, CouponChanges, CouponParams, CouponStatus, NewCoupon},
};

pub struct CouponService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn load_page(&self, params: &LoadingParams) -> Result<LoadedPage<Coupon>, AppError> {
        let page = CouponRepository::new(self.db).get_paginated(params).await?;

        page.try_map(Coupon::from_entity)
    }

    pub async fn create(&self, params: CouponParams) -> Result<Coupon, AppError> {
        let repo = CouponRepository::new(self.db);

        params.validate().into_result()?;

        // Validation guarantees presence and membership of these fields.
        let record = NewCoupon {
            code: params.code.clone().unwrap_or_default(),
            status: params
                .status
                .as_deref()
                .and_then(CouponStatus::parse)
                .unwrap_or(CouponStatus::Inactive),
            discount_value: params.discount_value.unwrap_or_default(),
            due_date: params.due_date.unwrap_or_default(),
        };

        let created = repo.create(record).await?;

        Coupon::from_entity(created)
    }

    /// Partial update. Returns None when the coupon does not exist;
    /// validation runs against the merged attribute set so untouched fields
    /// keep their stored values.
    pub async fn update(&self, id: i32, params: CouponParams) -> Result<Option<Coupon>, AppError> {
        let repo = CouponRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let current = Coupon::from_entity(existing)?;

        let merged = params.clone().merge_into(&current);
        merged.validate().into_result()?;

        let changes = CouponChanges {
            code: params.code,
            status: params.status.as_deref().and_then(CouponStatus::parse),
            discount_value: params.discount_value,
            due_date: params.due_date,
        };

        let updated = repo.update(id, changes).await?;

        Coupon::from_entity(updated).map(Some)
    }

    /// Returns true when a coupon was deleted, false when the id was unknown.
    pub async fn destroy(&self, id: i32) -> Result<bool, AppError> {
        let repo = CouponRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
