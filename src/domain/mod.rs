pub mod booking;
pub mod error;
pub mod item;
pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingInfo, BookingState, BookingStatus, PastBoundary};
pub use error::{DomainError, DomainResult};
pub use item::Item;
pub use repositories::RepositoryProvider;
pub use user::User;
