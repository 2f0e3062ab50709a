use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test coupons with customizable fields.
pub struct CouponFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    status: String,
    discount_value: f64,
    due_date: DateTime<Utc>,
}

impl<'a> CouponFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("COUPON-{}", id),
            status: "active".to_string(),
            discount_value: 10.0,
            due_date: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn discount_value(mut self, discount_value: f64) -> Self {
        self.discount_value = discount_value;
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = due_date;
        self
    }

    pub async fn build(self) -> Result<entity::coupon::Model, DbErr> {
        entity::coupon::ActiveModel {
            code: ActiveValue::Set(self.code),
            status: ActiveValue::Set(self.status),
            discount_value: ActiveValue::Set(self.discount_value),
            due_date: ActiveValue::Set(self.due_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a coupon with default values.
pub async fn create_coupon(db: &DatabaseConnection) -> Result<entity::coupon::Model, DbErr> {
    CouponFactory::new(db).build().await
}
