//! Wire-level request and response bodies.
//!
//! Request payloads are wrapped in the singular resource key
//! (`{"user": {...}}`) and carry every attribute as optional, so a PATCH can
//! send just the fields it changes. Responses are keyed by the singular or
//! plural resource name; list responses add a `meta` object with pagination
//! counts.

pub mod api;
pub mod auth;
pub mod coupon;
pub mod game;
pub mod system_requirement;
pub mod user;
