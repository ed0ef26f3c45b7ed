//! Shared HTTP plumbing: response envelope, error mapping, extractors.

pub mod user_id;
pub mod validated_json;

pub use user_id::XUserId;
pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response wrapper.
///
/// Every REST endpoint returns data in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on failure
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// HTTP status for a domain failure.
///
/// Authorization failures on reads surface as `NotFound` in the domain, so
/// 404 doubles as the "not yours" answer. Ownership violations on writes
/// are explicit and map to 403.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::OwnerConflict { .. } | DomainError::UserConflict { .. } => {
            StatusCode::FORBIDDEN
        }
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::UnknownState(_)
        | DomainError::InvalidRange(_)
        | DomainError::ItemUnavailable(_)
        | DomainError::InvalidStatus { .. }
        | DomainError::CommentForbidden { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Turn a domain failure into the envelope + status handlers return.
pub fn reject<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (status_for(&err), Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = DomainError::not_found("Booking", "id", 7);
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn ownership_violations_map_to_403() {
        let owner = DomainError::OwnerConflict {
            user_id: 1,
            item_id: 2,
        };
        let non_owner = DomainError::UserConflict {
            user_id: 1,
            item_id: 2,
        };
        assert_eq!(status_for(&owner), StatusCode::FORBIDDEN);
        assert_eq!(status_for(&non_owner), StatusCode::FORBIDDEN);
    }

    #[test]
    fn validation_failures_map_to_400() {
        for err in [
            DomainError::UnknownState("NOPE".to_string()),
            DomainError::InvalidRange("start after end".to_string()),
            DomainError::ItemUnavailable(3),
            DomainError::InvalidStatus {
                id: 1,
                status: "APPROVED".to_string(),
            },
            DomainError::CommentForbidden {
                user_id: 1,
                item_id: 2,
            },
        ] {
            assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = DomainError::Database("connection lost".to_string());
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn envelope_shape() {
        let ok = ApiResponse::success(42);
        assert!(ok.success);
        assert_eq!(ok.data, Some(42));
        assert!(ok.error.is_none());

        let failed = ApiResponse::<i32>::error("boom");
        assert!(!failed.success);
        assert!(failed.data.is_none());
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }
}
