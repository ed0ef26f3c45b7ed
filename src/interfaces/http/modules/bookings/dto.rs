//! Booking DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::domain::booking::BookingInfo;

/// Request to create a new booking
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "window_is_ordered"))]
pub struct CreateBookingRequest {
    /// Window start (RFC 3339)
    pub start: chrono::DateTime<chrono::Utc>,
    /// Window end (RFC 3339)
    pub end: chrono::DateTime<chrono::Utc>,
    /// Item to reserve
    #[serde(alias = "itemId")]
    #[validate(range(min = 1, message = "item_id must be positive"))]
    pub item_id: i64,
}

fn window_is_ordered(req: &CreateBookingRequest) -> Result<(), ValidationError> {
    if req.start < req.end {
        Ok(())
    } else {
        let mut err = ValidationError::new("window");
        err.message = Some("start must be before end".into());
        Err(err)
    }
}

/// Query parameters for booking listings
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBookingsParams {
    /// Listing filter: ALL, CURRENT, PAST, FUTURE, WAITING or REJECTED
    #[serde(default = "default_state")]
    pub state: String,
    /// Number of bookings to skip. Default: 0
    #[serde(default)]
    pub from: u64,
    /// Maximum number of bookings to return. Default: 10
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_state() -> String {
    "ALL".to_string()
}

fn default_size() -> u64 {
    10
}

/// Query parameter for the owner decision
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DecisionParams {
    /// `true` approves the booking, `false` rejects it
    pub approved: bool,
}

/// Item summary embedded in booking responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemSummaryDto {
    pub id: i64,
    pub name: String,
}

/// Booker summary embedded in booking responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookerDto {
    pub id: i64,
    pub name: String,
}

/// Booking details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingInfoDto {
    pub id: i64,
    /// Window start (RFC 3339)
    pub start: String,
    /// Window end (RFC 3339)
    pub end: String,
    /// WAITING, APPROVED, REJECTED or CANCELED
    pub status: String,
    pub item: ItemSummaryDto,
    pub booker: BookerDto,
}

impl From<BookingInfo> for BookingInfoDto {
    fn from(info: BookingInfo) -> Self {
        Self {
            id: info.id,
            start: info.start.to_rfc3339(),
            end: info.end.to_rfc3339(),
            status: info.status.as_str().to_string(),
            item: ItemSummaryDto {
                id: info.item.id,
                name: info.item.name,
            },
            booker: BookerDto {
                id: info.booker.id,
                name: info.booker.name,
            },
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
