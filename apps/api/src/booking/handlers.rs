use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::booking::session::{BookingDraft, DraftUpdate, SubmitRequest};
use crate::errors::AppError;
use crate::estimator::handlers::{display_figures, session_view, DisplayFigures, SessionView};
use crate::estimator::Estimate;
use crate::state::AppState;

/// The open dialog as the client sees it: the editable draft plus the
/// quick estimate for the dialog's own copy of dimensions/product.
#[derive(Debug, Serialize)]
pub struct DraftView {
    #[serde(flatten)]
    pub draft: BookingDraft,
    pub quick_estimate: Estimate,
    pub display: DisplayFigures,
}

fn draft_view(draft: &BookingDraft, currency: &str) -> DraftView {
    let quick_estimate = draft.quick_estimate();
    let display = display_figures(&quick_estimate, currency);
    DraftView {
        draft: draft.clone(),
        quick_estimate,
        display,
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub request_id: Uuid,
    pub outbound_url: String,
    pub request: BookingDraft,
    /// Top-level state after the commit — the draft's edits are promoted.
    pub session: SessionView,
}

/// POST /api/v1/booking/open
/// Closed → Open. Seeds the draft from current top-level state.
pub async fn handle_open_dialog(
    State(state): State<AppState>,
) -> Result<Json<DraftView>, AppError> {
    let mut session = state.session.write().await;
    let draft = session.open_dialog(&state.config.currency);
    Ok(Json(draft_view(draft, &state.config.currency)))
}

/// GET /api/v1/booking
pub async fn handle_get_dialog(
    State(state): State<AppState>,
) -> Result<Json<DraftView>, AppError> {
    let session = state.session.read().await;
    let draft = session
        .dialog
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No open booking dialog".to_string()))?;
    Ok(Json(draft_view(draft, &state.config.currency)))
}

/// PATCH /api/v1/booking
/// Edits the draft; dimension/product changes refresh the default message.
pub async fn handle_edit_dialog(
    State(state): State<AppState>,
    Json(update): Json<DraftUpdate>,
) -> Result<Json<DraftView>, AppError> {
    let mut session = state.session.write().await;
    let draft = session.edit_draft(update, &state.config.currency)?;
    Ok(Json(draft_view(draft, &state.config.currency)))
}

/// POST /api/v1/booking/cancel
/// Open → Closed, discarding edits.
pub async fn handle_cancel_dialog(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    let mut session = state.session.write().await;
    session.cancel_dialog()?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/booking/submit
/// Validates, commits the draft into top-level state, and returns the
/// outbound link for the caller to open. Fire-and-forget from here on.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let mut session = state.session.write().await;
    let outcome = session.submit(request, &state.config.whatsapp_number)?;

    info!(
        "Booking request {} submitted: product={} size={}cm×{}cm name={} phone={} preferred={} rush_visit={}",
        outcome.request_id,
        outcome.request.product,
        outcome.request.width_raw,
        outcome.request.height_raw,
        outcome.request.name,
        outcome.request.phone,
        outcome.request.preferred,
        outcome.request.rush_visit,
    );

    let view = session_view(&session, &state.config.currency);
    Ok(Json(SubmitResponse {
        request_id: outcome.request_id,
        outbound_url: outcome.outbound_url,
        request: outcome.request,
        session: view,
    }))
}
