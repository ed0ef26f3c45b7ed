//! `X-User-Id` header extractor
//!
//! Every booking endpoint acts on behalf of a user identified by the
//! `X-User-Id` request header. A missing or non-numeric header is a
//! malformed request, answered with 400 before the handler runs. Whether
//! the user actually exists is checked by the service layer.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;

use super::ApiResponse;

pub const USER_ID_HEADER: &str = "X-User-Id";

/// Acting user id taken from the `X-User-Id` header.
pub struct XUserId(pub i64);

impl<S> FromRequestParts<S> for XUserId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse<()>>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts.headers.get(USER_ID_HEADER).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "Missing {} header",
                    USER_ID_HEADER
                ))),
            )
        })?;

        let id = raw
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(format!(
                        "Invalid {} header: expected an integer",
                        USER_ID_HEADER
                    ))),
                )
            })?;

        Ok(XUserId(id))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;

    async fn handler(XUserId(user_id): XUserId) -> String {
        user_id.to_string()
    }

    fn app() -> Router {
        Router::new().route("/whoami", get(handler))
    }

    async fn send(req: Request<Body>) -> axum::http::Response<Body> {
        use tower::Service;
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    #[tokio::test]
    async fn numeric_header_is_extracted() {
        let req = Request::builder()
            .uri("/whoami")
            .header(USER_ID_HEADER, "42")
            .body(Body::empty())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_header_is_400() {
        let req = Request::builder().uri("/whoami").body(Body::empty()).unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_header_is_400() {
        let req = Request::builder()
            .uri("/whoami")
            .header(USER_ID_HEADER, "alice")
            .body(Body::empty())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
