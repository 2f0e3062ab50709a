use chrono::{TimeZone, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::AppError,
    model::coupon::{CouponParams, CouponStatus},
    service::coupon::CouponService,
};

fn valid_params() -> CouponParams {
    CouponParams {
        code: Some("WELCOME10".to_string()),
        status: Some("active".to_string()),
        discount_value: Some(10.0),
        due_date: Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
    }
}

/// Creating with valid params adds exactly one coupon.
#[tokio::test]
async fn create_with_valid_params_adds_coupon() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coupon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = CouponService::new(db).create(valid_params()).await?;

    assert_eq!(coupon.code, "WELCOME10");
    assert_eq!(coupon.status, CouponStatus::Active);
    assert_eq!(entity::prelude::Coupon::find().count(db).await?, 1);

    Ok(())
}

/// Missing required fields: one error key per field, nothing persisted.
#[tokio::test]
async fn create_with_missing_fields_keys_each_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coupon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CouponService::new(db).create(CouponParams::default()).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    for field in ["code", "status", "discount_value", "due_date"] {
        assert!(errors.contains(field), "missing error for {}", field);
    }
    assert_eq!(entity::prelude::Coupon::find().count(db).await?, 0);

    Ok(())
}

/// Non-positive discounts are rejected.
#[tokio::test]
async fn create_rejects_non_positive_discount() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coupon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = CouponParams {
        discount_value: Some(0.0),
        ..valid_params()
    };
    let result = CouponService::new(db).create(params).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.contains("discount_value"));

    Ok(())
}

/// Statuses outside the enum are rejected.
#[tokio::test]
async fn create_rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coupon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = CouponParams {
        status: Some("expired".to_string()),
        ..valid_params()
    };
    let result = CouponService::new(db).create(params).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.contains("status"));

    Ok(())
}

/// Updating one field leaves every other field at its prior value.
#[tokio::test]
async fn update_changes_only_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coupon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = factory::create_coupon(db).await?;

    let params = CouponParams {
        code: Some("My new Coupon".to_string()),
        ..Default::default()
    };
    let updated = CouponService::new(db)
        .update(coupon.id, params)
        .await?
        .unwrap();

    assert_eq!(updated.code, "My new Coupon");
    assert_eq!(updated.status.as_str(), coupon.status);
    assert_eq!(updated.discount_value, coupon.discount_value);

    Ok(())
}

/// Invalid update params keep the stored values untouched.
#[tokio::test]
async fn update_rejects_blank_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coupon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = factory::create_coupon(db).await?;
    let original_code = coupon.code.clone();

    let params = CouponParams {
        code: Some("".to_string()),
        ..Default::default()
    };
    let result = CouponService::new(db).update(coupon.id, params).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected validation error");
    };
    assert!(errors.contains("code"));

    let stored = entity::prelude::Coupon::find_by_id(coupon.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.code, original_code);

    Ok(())
}

/// Destroy removes exactly one coupon; unknown ids report not-found.
#[tokio::test]
async fn destroy_removes_one_coupon() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Coupon)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coupon = factory::create_coupon(db).await?;

    let deleted = CouponService::new(db).destroy(coupon.id).await?;
    assert!(deleted);
    assert_eq!(entity::prelude::Coupon::find().count(db).await?, 0);

    let missing = CouponService::new(db).destroy(coupon.id).await?;
    assert!(!missing);

    Ok(())
}
