//! Booking repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::Booking;
use super::state::BookingState;
use crate::domain::DomainResult;
use crate::shared::Pagination;

/// Store interface consumed by the booking service.
///
/// Listing queries return bookings ordered by `start` descending and apply
/// the state filter against the caller-supplied `now`. Authorization is
/// never applied here; the service layer owns it.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Booking>>;

    /// All bookings made by a user, filtered and paginated
    async fn find_all_by_booker(
        &self,
        booker_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>>;

    /// All bookings against items owned by a user, filtered and paginated
    async fn find_all_by_item_owner(
        &self,
        owner_id: i64,
        state: BookingState,
        now: DateTime<Utc>,
        page: Pagination,
    ) -> DomainResult<Vec<Booking>>;

    /// All bookings of one item, any status (last/next derivation and
    /// comment eligibility)
    async fn find_all_by_item(&self, item_id: i64) -> DomainResult<Vec<Booking>>;

    /// Insert a new booking; the returned copy carries the assigned id
    async fn save(&self, booking: Booking) -> DomainResult<Booking>;

    /// Persist a status change to an existing booking
    async fn update(&self, booking: Booking) -> DomainResult<Booking>;

    /// Delete a booking by ID
    async fn delete_by_id(&self, id: i64) -> DomainResult<()>;
}
