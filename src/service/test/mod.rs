mod coupon;
mod game;
mod system_requirement;
