//! Identity collaborator
//!
//! Resolves user ids for authorization comparisons and booker summaries.

pub mod model;
pub mod repository;

pub use model::User;
pub use repository::UserRepository;
