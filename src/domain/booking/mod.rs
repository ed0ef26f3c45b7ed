//! Booking aggregate
//!
//! Contains the Booking entity, the pure state engine, and the repository
//! interface.

pub mod model;
pub mod repository;
pub mod state;

pub use model::{BookerSummary, Booking, BookingInfo, BookingStatus, ItemSummary};
pub use repository::BookingRepository;
pub use state::{
    classify, derive_last_and_next, is_past, matches, transition, validate_create, BookingState,
    PastBoundary, TimePosition,
};
