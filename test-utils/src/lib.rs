//! Gamestore Test Utils
//!
//! Shared testing utilities for the gamestore application. Offers a builder
//! for test contexts backed by in-memory SQLite databases plus FactoryBot-style
//! factories for every catalog entity.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_catalog_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let game = factory::game::create_game(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
