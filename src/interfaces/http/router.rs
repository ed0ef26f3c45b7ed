//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::get,
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BookingService;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::bookings::{self, BookingAppState};
use crate::interfaces::http::modules::health::{self, HealthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Bookings
        bookings::get_booking,
        bookings::list_bookings,
        bookings::list_owner_bookings,
        bookings::create_booking,
        bookings::decide_booking,
        bookings::delete_booking,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Bookings
            bookings::CreateBookingRequest,
            bookings::BookingInfoDto,
            bookings::ItemSummaryDto,
            bookings::BookerDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Bookings", description = "Item reservation lifecycle: create, approve or reject, list, delete"),
    ),
    info(
        title = "LendHub Booking API",
        version = "1.0.0",
        description = "REST API for the peer-to-peer item lending booking service"
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    service: Arc<BookingService>,
    db: DatabaseConnection,
    metrics_handle: PrometheusHandle,
) -> Router {
    let booking_state = BookingAppState { service };

    let health_state = HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = MetricsState {
        handle: metrics_handle,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/owner", get(bookings::list_owner_bookings))
        .route(
            "/{booking_id}",
            get(bookings::get_booking)
                .patch(bookings::decide_booking)
                .delete(bookings::delete_booking),
        )
        .with_state(booking_state);

    let swagger_routes =
        SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Prometheus scrape endpoint
        .route(
            "/metrics",
            get(prometheus_metrics).with_state(metrics_state),
        )
        // Bookings
        .nest("/bookings", booking_routes)
        // Middleware
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
