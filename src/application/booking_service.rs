//! Booking service — the orchestrator behind the booking use cases.
//!
//! Enforces authorization, delegates validation and transitions to the
//! state engine, and persists through the repository provider. Every
//! operation is a single request-scoped read-modify-write; store failures
//! propagate to the caller unchanged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::booking::{
    derive_last_and_next, is_past, transition, validate_create, Booking, BookingInfo,
    BookingState, PastBoundary,
};
use crate::domain::{DomainError, DomainResult, Item, RepositoryProvider, User};
use crate::shared::Pagination;

/// Incoming reservation request, already deserialized and field-validated
/// at the API edge.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub item_id: i64,
}

/// Orchestrator for the booking use cases.
///
/// Authorization rules live here, never in the store:
/// - read/delete of a specific booking: booker or item owner, anyone else
///   gets `NotFound` (existence is not leaked);
/// - approve/reject: item owner only (`UserConflict`);
/// - create: anyone but the item owner, against an available item.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    past_boundary: PastBoundary,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, past_boundary: PastBoundary) -> Self {
        Self {
            repos,
            past_boundary,
        }
    }

    /// Fetch one booking as booker or item owner.
    pub async fn find_by_id(&self, user_id: i64, booking_id: i64) -> DomainResult<BookingInfo> {
        let user = self.require_user(user_id).await?;
        let booking = self.require_booking(booking_id).await?;
        let item = self.require_item(booking.item_id).await?;

        if booking.booker_id != user.id && item.owner_id != user.id {
            // authorization-as-not-found: don't reveal the booking exists
            return Err(DomainError::not_found("Booking", "id", booking_id));
        }
        self.to_info(booking).await
    }

    /// List a user's own bookings, newest start first.
    pub async fn find_all_by_booker(
        &self,
        user_id: i64,
        state: &str,
        page: Pagination,
    ) -> DomainResult<Vec<BookingInfo>> {
        let user = self.require_user(user_id).await?;
        let state = BookingState::parse(state)?;
        let now = Utc::now();

        let bookings = self
            .repos
            .bookings()
            .find_all_by_booker(user.id, state, now, page)
            .await?;
        self.to_infos(bookings).await
    }

    /// List bookings against a user's items, newest start first.
    pub async fn find_all_by_item_owner(
        &self,
        user_id: i64,
        state: &str,
        page: Pagination,
    ) -> DomainResult<Vec<BookingInfo>> {
        let user = self.require_user(user_id).await?;
        let state = BookingState::parse(state)?;
        let now = Utc::now();

        let bookings = self
            .repos
            .bookings()
            .find_all_by_item_owner(user.id, state, now, page)
            .await?;
        self.to_infos(bookings).await
    }

    /// Create a booking in `Waiting` status.
    pub async fn save(&self, draft: BookingDraft, user_id: i64) -> DomainResult<BookingInfo> {
        let user = self.require_user(user_id).await?;
        let item = self.require_item(draft.item_id).await?;

        validate_create(&item, user.id, draft.start, draft.end)?;

        let booking = Booking::new(draft.start, draft.end, item.id, user.id);
        let saved = self.repos.bookings().save(booking).await?;
        debug!(booking_id = saved.id, item_id = item.id, "booking created");
        self.to_info(saved).await
    }

    /// Approve or reject a `Waiting` booking. Item owner only.
    pub async fn update(
        &self,
        user_id: i64,
        booking_id: i64,
        approved: bool,
    ) -> DomainResult<BookingInfo> {
        let user = self.require_user(user_id).await?;
        let booking = self.require_booking(booking_id).await?;
        let item = self.require_item(booking.item_id).await?;

        if item.owner_id != user.id {
            return Err(DomainError::UserConflict {
                user_id: user.id,
                item_id: item.id,
            });
        }

        let updated = transition(&booking, approved)?;
        let saved = self.repos.bookings().update(updated).await?;
        debug!(booking_id = saved.id, status = %saved.status, "booking decided");
        self.to_info(saved).await
    }

    /// Delete a booking as booker or item owner.
    pub async fn delete_by_id(&self, user_id: i64, booking_id: i64) -> DomainResult<()> {
        let user = self.require_user(user_id).await?;
        let booking = self.require_booking(booking_id).await?;
        let item = self.require_item(booking.item_id).await?;

        if booking.booker_id != user.id && item.owner_id != user.id {
            return Err(DomainError::not_found("Booking", "id", booking_id));
        }
        self.repos.bookings().delete_by_id(booking.id).await
    }

    // ── Contract exposed to the item/comment collaborators ─────

    /// Bookings of an item that have elapsed per the configured boundary.
    /// Status is irrelevant here: a booking that ran its window counts even
    /// if the owner never decided it.
    pub async fn find_past_bookings(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<Booking>> {
        let bookings = self.repos.bookings().find_all_by_item(item_id).await?;
        Ok(bookings
            .into_iter()
            .filter(|b| is_past(b, now, self.past_boundary))
            .collect())
    }

    /// Whether the user holds an elapsed booking of the item.
    pub async fn is_booker_of(
        &self,
        user_id: i64,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let past = self.find_past_bookings(item_id, now).await?;
        Ok(past.iter().any(|b| b.booker_id == user_id))
    }

    /// Gate for comment creation: the user must have an elapsed booking of
    /// the item.
    pub async fn check_comment_eligibility(
        &self,
        user_id: i64,
        item_id: i64,
    ) -> DomainResult<()> {
        let user = self.require_user(user_id).await?;
        let item = self.require_item(item_id).await?;

        if self.is_booker_of(user.id, item.id, Utc::now()).await? {
            Ok(())
        } else {
            Err(DomainError::CommentForbidden {
                user_id: user.id,
                item_id: item.id,
            })
        }
    }

    /// Nearest past / nearest future approved booking of an item. Both or
    /// neither.
    pub async fn last_and_next(
        &self,
        item_id: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<Option<(Booking, Booking)>> {
        let item = self.require_item(item_id).await?;
        let approved: Vec<Booking> = self
            .repos
            .bookings()
            .find_all_by_item(item.id)
            .await?
            .into_iter()
            .filter(Booking::is_approved)
            .collect();
        Ok(derive_last_and_next(&approved, now))
    }

    /// Per-owner listing summary: each listed item with its last/next
    /// approved booking pair, when both exist.
    pub async fn owner_item_summaries(
        &self,
        owner_id: i64,
    ) -> DomainResult<Vec<(Item, Option<(Booking, Booking)>)>> {
        let owner = self.require_user(owner_id).await?;
        let now = Utc::now();
        let items = self.repos.items().find_all_by_owner(owner.id).await?;

        let mut summaries = Vec::with_capacity(items.len());
        for item in items {
            let summary = self.last_and_next(item.id, now).await?;
            summaries.push((item, summary));
        }
        Ok(summaries)
    }

    // ── Lookup helpers ─────────────────────────────────────────

    async fn require_user(&self, id: i64) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", id))
    }

    async fn require_item(&self, id: i64) -> DomainResult<Item> {
        self.repos
            .items()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item", "id", id))
    }

    async fn require_booking(&self, id: i64) -> DomainResult<Booking> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", "id", id))
    }

    async fn to_info(&self, booking: Booking) -> DomainResult<BookingInfo> {
        let item = self.require_item(booking.item_id).await?;
        let booker = self.require_user(booking.booker_id).await?;
        Ok(BookingInfo {
            id: booking.id,
            start: booking.start,
            end: booking.end,
            status: booking.status,
            item: crate::domain::booking::ItemSummary {
                id: item.id,
                name: item.name,
            },
            booker: crate::domain::booking::BookerSummary {
                id: booker.id,
                name: booker.name,
            },
        })
    }

    async fn to_infos(&self, bookings: Vec<Booking>) -> DomainResult<Vec<BookingInfo>> {
        let mut infos = Vec::with_capacity(bookings.len());
        for booking in bookings {
            infos.push(self.to_info(booking).await?);
        }
        Ok(infos)
    }
}

// ── Tests ──────────────────────────────────────────────────────
