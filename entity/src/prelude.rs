pub use super::coupon::Entity as Coupon;
pub use super::game::Entity as Game;
pub use super::system_requirement::Entity as SystemRequirement;
pub use super::user::Entity as User;
