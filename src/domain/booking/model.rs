//! Booking domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Booking lifecycle status.
///
/// Created as `Waiting`; moved to `Approved` or `Rejected` exactly once by
/// the owner decision. All three of `Approved`/`Rejected`/`Canceled` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Awaiting the item owner's decision
    Waiting,
    /// Approved by the item owner
    Approved,
    /// Rejected by the item owner
    Rejected,
    /// Canceled (terminal; no shipped transition produces it)
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parse the stored column value. Unknown values are a data bug, not
    /// user input, so this is strict.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "WAITING" => Some(Self::Waiting),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            "CANCELED" => Some(Self::Canceled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reservation of an item for a time window, owned by a booker.
///
/// `item_id` and `booker_id` are weak references; the booking never owns
/// or mutates the item (availability is an owner-controlled field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Unique booking ID, assigned by the store on insert
    pub id: i64,
    /// Window start (inclusive); invariant `start < end`
    pub start: DateTime<Utc>,
    /// Window end (exclusive)
    pub end: DateTime<Utc>,
    /// Current lifecycle status
    pub status: BookingStatus,
    /// Reserved item
    pub item_id: i64,
    /// Requesting user
    pub booker_id: i64,
    /// When the booking was created
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Build a new `Waiting` booking draft. The store assigns the real id
    /// on insert.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, item_id: i64, booker_id: i64) -> Self {
        Self {
            id: 0,
            start,
            end,
            status: BookingStatus::Waiting,
            item_id,
            booker_id,
            created_at: Utc::now(),
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.status == BookingStatus::Waiting
    }

    pub fn is_approved(&self) -> bool {
        self.status == BookingStatus::Approved
    }
}

/// Denormalized item summary attached to a [`BookingInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub id: i64,
    pub name: String,
}

/// Denormalized booker summary attached to a [`BookingInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookerSummary {
    pub id: i64,
    pub name: String,
}

/// Booking plus resolved item and booker summaries, returned to API
/// clients. Computed on read, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingInfo {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item: ItemSummary,
    pub booker: BookerSummary,
}

// ── Tests ──────────────────────────────────────────────────────
