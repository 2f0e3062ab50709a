use chrono::{DateTime, Utc};

use crate::{
    dto::coupon::{CouponAttributesDto, CouponDto},
    error::{validation::ValidationErrors, AppError},
    model::blank,
};

/// Lifecycle state of a discount coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponStatus {
    Active,
    Inactive,
}

impl CouponStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    pub id: i32,
    pub code: String,
    pub status: CouponStatus,
    pub discount_value: f64,
    pub due_date: DateTime<Utc>,
}

impl Coupon {
    pub fn from_entity(entity: entity::coupon::Model) -> Result<Self, AppError> {
        let status = CouponStatus::parse(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown status '{}' stored for coupon {}",
                entity.status, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            code: entity.code,
            status,
            discount_value: entity.discount_value,
            due_date: entity.due_date,
        })
    }

    pub fn into_dto(self) -> CouponDto {
        CouponDto {
            id: self.id,
            code: self.code,
            status: self.status.as_str().to_string(),
            discount_value: self.discount_value,
            due_date: self.due_date,
        }
    }
}

/// Client-supplied coupon attributes for create and update operations.
#[derive(Debug, Clone, Default)]
pub struct CouponParams {
    pub code: Option<String>,
    pub status: Option<String>,
    pub discount_value: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
}

impl CouponParams {
    pub fn from_dto(dto: CouponAttributesDto) -> Self {
        Self {
            code: dto.code,
            status: dto.status,
            discount_value: dto.discount_value,
            due_date: dto.due_date,
        }
    }

    pub fn merge_into(self, current: &Coupon) -> CouponParams {
        CouponParams {
            code: self.code.or_else(|| Some(current.code.clone())),
            status: self
                .status
                .or_else(|| Some(current.status.as_str().to_string())),
            discount_value: self.discount_value.or(Some(current.discount_value)),
            due_date: self.due_date.or(Some(current.due_date)),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if blank(&self.code) {
            errors.add("code", "can't be blank");
        }

        if blank(&self.status) {
            errors.add("status", "can't be blank");
        } else if CouponStatus::parse(self.status.as_deref().unwrap_or_default()).is_none() {
            errors.add("status", "is not included in the list");
        }

        match self.discount_value {
            None => errors.add("discount_value", "can't be blank"),
            Some(value) if value <= 0.0 => errors.add("discount_value", "must be greater than 0"),
            _ => {}
        }

        if self.due_date.is_none() {
            errors.add("due_date", "can't be blank");
        }

        errors
    }
}

/// Finalized attributes for inserting a coupon, produced after validation.
#[derive(Debug, Clone)]
pub struct NewCoupon {
    pub code: String,
    pub status: CouponStatus,
    pub discount_value: f64,
    pub due_date: DateTime<Utc>,
}

/// Column-level changes for an update; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CouponChanges {
    pub code: Option<String>,
    pub status: Option<CouponStatus>,
    pub discount_value: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
}
