//! # LendHub Booking Service
//!
//! Booking subsystem of a peer-to-peer item lending platform: users
//! reserve items listed by other users, owners approve or reject, and
//! listings can be filtered by reservation state and time position.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, the booking state engine and
//!   repository traits
//! - **application**: Use-case orchestration (authorization, transitions)
//! - **infrastructure**: Persistence (SeaORM/SQLite, in-memory)
//! - **interfaces**: HTTP REST API with Swagger documentation
//! - **shared**: Cross-cutting helpers (pagination, shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::{init_database, DatabaseConfig, Migrator, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
