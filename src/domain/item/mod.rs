//! Item collaborator
//!
//! The booking core consumes items as read-only context.

pub mod model;
pub mod repository;

pub use model::Item;
pub use repository::ItemRepository;
