//! Application layer — use-case orchestration over the domain.

pub mod booking_service;

pub use booking_service::{BookingDraft, BookingService};
