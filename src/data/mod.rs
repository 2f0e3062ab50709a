//! Database repository layer for all catalog entities.
//!
//! Repositories own the SeaORM queries for each resource and hand entity
//! models back to the service layer, which converts them into domain models.
//! The `loading` module holds the generic search/order/pagination helper the
//! index endpoints share.

pub mod coupon;
pub mod game;
pub mod loading;
pub mod system_requirement;
pub mod user;

#[cfg(test)]
mod test;
