//! HTTP request handlers.
//!
//! Controllers stay thin: check access through the session guard, convert
//! DTOs into operation params, call the matching service, and map the result
//! onto a status code and response body.

pub mod auth;
pub mod coupon;
pub mod game;
pub mod system_requirement;
pub mod user;
