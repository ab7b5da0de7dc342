pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::booking::handlers as booking;
use crate::catalog::handlers as catalog;
use crate::estimator::handlers as estimator;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/products", get(catalog::handle_list_products))
        .route("/api/v1/products/:key", get(catalog::handle_get_product))
        // Estimator
        .route("/api/v1/estimate", get(estimator::handle_estimate))
        .route(
            "/api/v1/session",
            get(estimator::handle_get_session).patch(estimator::handle_update_session),
        )
        // Booking dialog
        .route(
            "/api/v1/booking",
            get(booking::handle_get_dialog).patch(booking::handle_edit_dialog),
        )
        .route("/api/v1/booking/open", post(booking::handle_open_dialog))
        .route("/api/v1/booking/cancel", post(booking::handle_cancel_dialog))
        .route("/api/v1/booking/submit", post(booking::handle_submit))
        .with_state(state)
}
