//! SeaORM repository implementations

pub mod booking_repository;
pub mod item_repository;
pub mod repository_provider;
pub mod user_repository;

pub use booking_repository::SeaOrmBookingRepository;
pub use item_repository::SeaOrmItemRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use user_repository::SeaOrmUserRepository;
