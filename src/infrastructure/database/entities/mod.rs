//! Database entities module

pub mod booking;
pub mod item;
pub mod user;

pub use booking::Entity as Booking;
pub use item::Entity as Item;
pub use user::Entity as User;
