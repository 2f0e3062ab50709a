//! Factory methods for creating test data.
//!
//! Each catalog entity has a factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign keys themselves: creating a game
//! without a system requirement creates one on the fly.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user(&db).await?;
//!
//! // Customize through the builder
//! let coupon = factory::coupon::CouponFactory::new(&db)
//!     .code("BLACKFRIDAY")
//!     .status("inactive")
//!     .build()
//!     .await?;
//! ```

pub mod coupon;
pub mod game;
pub mod helpers;
pub mod system_requirement;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use coupon::create_coupon;
pub use game::create_game;
pub use system_requirement::create_system_requirement;
pub use user::{create_user, create_user_with_profile};
