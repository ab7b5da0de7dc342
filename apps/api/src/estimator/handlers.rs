use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::booking::session::{Session, SessionUpdate};
use crate::catalog::{find_by_key, ProductKey};
use crate::errors::AppError;
use crate::estimator::format::{format_area, format_price};
use crate::estimator::{estimate_raw, Estimate};
use crate::state::AppState;

/// Human-readable figures rendered next to the numeric estimate.
#[derive(Debug, Serialize)]
pub struct DisplayFigures {
    pub area: String,
    pub market_price: String,
    pub your_price: String,
}

pub fn display_figures(estimate: &Estimate, currency: &str) -> DisplayFigures {
    DisplayFigures {
        area: format!("{} m²", format_area(estimate.area_sq_m)),
        market_price: format_price(estimate.market_price, currency),
        your_price: format_price(estimate.your_price, currency),
    }
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub width: String,
    pub height: String,
    pub product: ProductKey,
    pub dialog_open: bool,
    pub estimate: Estimate,
    pub display: DisplayFigures,
}

pub fn session_view(session: &Session, currency: &str) -> SessionView {
    let estimate = session.current_estimate();
    let display = display_figures(&estimate, currency);
    SessionView {
        width: session.width_raw.clone(),
        height: session.height_raw.clone(),
        product: session.product,
        dialog_open: session.dialog.is_some(),
        estimate,
        display,
    }
}

#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
    pub product: String,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub product: ProductKey,
    pub estimate: Estimate,
    pub display: DisplayFigures,
}

/// GET /api/v1/estimate?width=&height=&product=
///
/// Stateless: raw strings in, figures out. Malformed dimensions degrade to
/// zero-valued output; only an unknown product key is an error.
pub async fn handle_estimate(
    State(state): State<AppState>,
    Query(query): Query<EstimateQuery>,
) -> Result<Json<EstimateResponse>, AppError> {
    let product = find_by_key(&query.product)?;
    let estimate = estimate_raw(&query.width, &query.height, product);
    let display = display_figures(&estimate, &state.config.currency);
    Ok(Json(EstimateResponse {
        product: product.key,
        estimate,
        display,
    }))
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.session.read().await;
    Ok(Json(session_view(&session, &state.config.currency)))
}

/// PATCH /api/v1/session
/// Updates any of width/height/product; derived figures are recomputed
/// synchronously and returned.
pub async fn handle_update_session(
    State(state): State<AppState>,
    Json(update): Json<SessionUpdate>,
) -> Result<Json<SessionView>, AppError> {
    let mut session = state.session.write().await;
    session.apply_update(update)?;
    Ok(Json(session_view(&session, &state.config.currency)))
}
