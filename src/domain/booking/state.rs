//! Booking state engine
//!
//! Pure functions, no I/O. Every time-dependent function takes `now` as an
//! explicit parameter so classification stays deterministic under test;
//! nothing in this module reads the wall clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Booking, BookingStatus};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::item::Item;

/// Listing filter parsed from the `state` query parameter.
///
/// Closed set; [`BookingState::parse`] is a case-sensitive exact match and
/// anything else is `UnknownState`. There is deliberately no catch-all
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    pub fn parse(s: &str) -> DomainResult<Self> {
        match s {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(DomainError::UnknownState(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Temporal relation of a booking window to a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePosition {
    Current,
    Past,
    Future,
}

/// Classify a booking's window relative to `now`.
///
/// Total over the three positions for any window with `start < end`:
/// `Past` iff `end <= now`, `Current` iff `start <= now < end`,
/// `Future` iff `start > now`.
pub fn classify(booking: &Booking, now: DateTime<Utc>) -> TimePosition {
    if booking.end <= now {
        TimePosition::Past
    } else if booking.start <= now {
        TimePosition::Current
    } else {
        TimePosition::Future
    }
}

/// Which endpoint marks a booking as "elapsed enough".
///
/// `End` counts a booking once its window is fully over; `Start` counts it
/// as soon as it has begun. Applies only to the elapsed-booking predicate
/// (comment eligibility, past-booking queries); the listing classification
/// in [`classify`] is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PastBoundary {
    #[default]
    End,
    Start,
}

/// Whether the booking has elapsed per the configured boundary.
pub fn is_past(booking: &Booking, now: DateTime<Utc>, boundary: PastBoundary) -> bool {
    match boundary {
        PastBoundary::End => booking.end <= now,
        PastBoundary::Start => booking.start <= now,
    }
}

/// Filter predicate behind the six listing tokens.
///
/// `Current`/`Past`/`Future` select by time position, `Waiting`/`Rejected`
/// by status regardless of time, `All` matches everything.
pub fn matches(booking: &Booking, state: BookingState, now: DateTime<Utc>) -> bool {
    match state {
        BookingState::All => true,
        BookingState::Current => classify(booking, now) == TimePosition::Current,
        BookingState::Past => classify(booking, now) == TimePosition::Past,
        BookingState::Future => classify(booking, now) == TimePosition::Future,
        BookingState::Waiting => booking.status == BookingStatus::Waiting,
        BookingState::Rejected => booking.status == BookingStatus::Rejected,
    }
}

/// Validate a requested reservation against the target item and requester.
///
/// The resulting booking, if any, is constructed `Waiting` by the caller.
pub fn validate_create(
    item: &Item,
    requester_id: i64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DomainResult<()> {
    if item.owner_id == requester_id {
        return Err(DomainError::OwnerConflict {
            user_id: requester_id,
            item_id: item.id,
        });
    }
    if !item.available {
        return Err(DomainError::ItemUnavailable(item.id));
    }
    if start >= end {
        return Err(DomainError::InvalidRange(format!(
            "start={} must be strictly before end={}",
            start, end
        )));
    }
    Ok(())
}

/// Apply the owner's decision to a `Waiting` booking.
///
/// The only place a booking status ever changes. `Approved`, `Rejected`
/// and `Canceled` are terminal.
pub fn transition(booking: &Booking, approved: bool) -> DomainResult<Booking> {
    if booking.status != BookingStatus::Waiting {
        return Err(DomainError::InvalidStatus {
            id: booking.id,
            status: booking.status.to_string(),
        });
    }
    let mut updated = booking.clone();
    updated.status = if approved {
        BookingStatus::Approved
    } else {
        BookingStatus::Rejected
    };
    Ok(updated)
}

/// Derive an item's nearest past and nearest future approved booking.
///
/// `last` has the greatest `start` among `start < now`, `next` the
/// smallest `start` among `start > now`. Returns both or neither — a
/// half-populated summary is never produced.
pub fn derive_last_and_next(
    approved: &[Booking],
    now: DateTime<Utc>,
) -> Option<(Booking, Booking)> {
    let last = approved
        .iter()
        .filter(|b| b.start < now)
        .max_by_key(|b| b.start);
    let next = approved
        .iter()
        .filter(|b| b.start > now)
        .min_by_key(|b| b.start);
    match (last, next) {
        (Some(l), Some(n)) => Some((l.clone(), n.clone())),
        _ => None,
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking_at(start_offset_h: i64, end_offset_h: i64) -> Booking {
        let now = Utc::now();
        Booking::new(
            now + Duration::hours(start_offset_h),
            now + Duration::hours(end_offset_h),
            1,
            3,
        )
    }

    fn item(owner_id: i64, available: bool) -> Item {
        Item {
            id: 1,
            owner_id,
            name: "drill".to_string(),
            description: None,
            available,
        }
    }

    // ── state filter parsing ───────────────────────────────────

    #[test]
    fn parse_accepts_all_six_tokens() {
        for (token, state) in [
            ("ALL", BookingState::All),
            ("CURRENT", BookingState::Current),
            ("PAST", BookingState::Past),
            ("FUTURE", BookingState::Future),
            ("WAITING", BookingState::Waiting),
            ("REJECTED", BookingState::Rejected),
        ] {
            assert_eq!(BookingState::parse(token).unwrap(), state);
            assert_eq!(state.as_str(), token);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        for bad in ["all", "Past", "future ", "UNSUPPORTED_STATUS", ""] {
            match BookingState::parse(bad) {
                Err(DomainError::UnknownState(s)) => assert_eq!(s, bad),
                other => panic!("expected UnknownState, got {:?}", other),
            }
        }
    }

    // ── classification ─────────────────────────────────────────

    #[test]
    fn classify_is_total_and_disjoint() {
        let now = Utc::now();
        let past = booking_at(-4, -2);
        let current = booking_at(-1, 1);
        let future = booking_at(2, 4);

        assert_eq!(classify(&past, now), TimePosition::Past);
        assert_eq!(classify(&current, now), TimePosition::Current);
        assert_eq!(classify(&future, now), TimePosition::Future);
    }

    #[test]
    fn classify_boundary_instants() {
        let now = Utc::now();
        // start == now: current, not future
        let starting = Booking::new(now, now + Duration::hours(1), 1, 3);
        assert_eq!(classify(&starting, now), TimePosition::Current);
        // end == now: past, not current
        let ending = Booking::new(now - Duration::hours(1), now, 1, 3);
        assert_eq!(classify(&ending, now), TimePosition::Past);
    }

    #[test]
    fn matches_by_status_ignores_time() {
        let now = Utc::now();
        let mut future = booking_at(2, 4);
        assert!(matches(&future, BookingState::Waiting, now));
        assert!(!matches(&future, BookingState::Rejected, now));

        future.status = BookingStatus::Rejected;
        assert!(matches(&future, BookingState::Rejected, now));
        assert!(!matches(&future, BookingState::Waiting, now));

        // status filters are orthogonal to time position
        assert!(matches(&future, BookingState::Future, now));
    }

    #[test]
    fn matches_all_is_unconditional() {
        let now = Utc::now();
        for b in [booking_at(-4, -2), booking_at(-1, 1), booking_at(2, 4)] {
            assert!(matches(&b, BookingState::All, now));
        }
    }

    // ── past boundary ──────────────────────────────────────────

    #[test]
    fn past_boundary_start_admits_begun_booking() {
        let now = Utc::now();
        let running = booking_at(-1, 1);
        assert!(!is_past(&running, now, PastBoundary::End));
        assert!(is_past(&running, now, PastBoundary::Start));
    }

    #[test]
    fn past_boundary_agrees_on_fully_elapsed() {
        let now = Utc::now();
        let done = booking_at(-4, -2);
        assert!(is_past(&done, now, PastBoundary::End));
        assert!(is_past(&done, now, PastBoundary::Start));

        let upcoming = booking_at(2, 4);
        assert!(!is_past(&upcoming, now, PastBoundary::End));
        assert!(!is_past(&upcoming, now, PastBoundary::Start));
    }

    // ── creation validation ────────────────────────────────────

    #[test]
    fn owner_cannot_book_own_item() {
        let now = Utc::now();
        let err = validate_create(
            &item(3, true),
            3,
            now + Duration::days(1),
            now + Duration::days(2),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::OwnerConflict { user_id: 3, .. }));
    }

    #[test]
    fn unavailable_item_is_rejected() {
        let now = Utc::now();
        let err = validate_create(
            &item(1, false),
            3,
            now + Duration::days(1),
            now + Duration::days(2),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::ItemUnavailable(1)));
    }

    #[test]
    fn inverted_and_empty_ranges_are_rejected() {
        let now = Utc::now();
        let err = validate_create(
            &item(1, true),
            3,
            now + Duration::days(2),
            now + Duration::days(1),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidRange(_)));

        let instant = now + Duration::days(1);
        let err = validate_create(&item(1, true), 3, instant, instant).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRange(_)));
    }

    #[test]
    fn owner_conflict_wins_over_other_failures() {
        // owner booking an unavailable item with an inverted range still
        // reports the ownership conflict
        let now = Utc::now();
        let err = validate_create(
            &item(3, false),
            3,
            now + Duration::days(2),
            now + Duration::days(1),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::OwnerConflict { .. }));
    }

    #[test]
    fn valid_request_passes() {
        let now = Utc::now();
        assert!(validate_create(
            &item(1, true),
            3,
            now + Duration::days(1),
            now + Duration::days(2)
        )
        .is_ok());
    }

    // ── transitions ────────────────────────────────────────────

    #[test]
    fn waiting_transitions_to_approved_or_rejected() {
        let waiting = booking_at(2, 4);
        let approved = transition(&waiting, true).unwrap();
        assert_eq!(approved.status, BookingStatus::Approved);

        let rejected = transition(&waiting, false).unwrap();
        assert_eq!(rejected.status, BookingStatus::Rejected);

        // everything else is untouched
        assert_eq!(approved.start, waiting.start);
        assert_eq!(approved.end, waiting.end);
        assert_eq!(approved.item_id, waiting.item_id);
        assert_eq!(approved.booker_id, waiting.booker_id);
    }

    #[test]
    fn terminal_states_reject_any_transition() {
        for status in [
            BookingStatus::Approved,
            BookingStatus::Rejected,
            BookingStatus::Canceled,
        ] {
            let mut b = booking_at(2, 4);
            b.status = status;
            for approved in [true, false] {
                let err = transition(&b, approved).unwrap_err();
                assert!(matches!(err, DomainError::InvalidStatus { .. }));
            }
        }
    }

    // ── last / next derivation ─────────────────────────────────

    fn approved_at(id: i64, start_offset_h: i64) -> Booking {
        let mut b = booking_at(start_offset_h, start_offset_h + 1);
        b.id = id;
        b.status = BookingStatus::Approved;
        b
    }

    #[test]
    fn nearest_past_and_future_are_selected() {
        let now = Utc::now();
        let set = vec![
            approved_at(1, -48),
            approved_at(2, -2),
            approved_at(3, 3),
            approved_at(4, 72),
        ];
        let (last, next) = derive_last_and_next(&set, now).unwrap();
        assert_eq!(last.id, 2);
        assert_eq!(next.id, 3);
    }

    #[test]
    fn both_or_neither() {
        let now = Utc::now();
        assert!(derive_last_and_next(&[], now).is_none());
        // only past bookings
        assert!(derive_last_and_next(&[approved_at(1, -48), approved_at(2, -2)], now).is_none());
        // only future bookings
        assert!(derive_last_and_next(&[approved_at(3, 3)], now).is_none());
    }
}
