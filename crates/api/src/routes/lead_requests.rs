//! Lead request route handlers for the signed-in rep.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use domain::models::{LeadRequest, LeadRequestStatus};
use persistence::repositories::LeadRequestRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Create lead request routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_requests).post(create_request))
}

#[derive(Debug, Serialize)]
pub struct LeadRequestsResponse {
    pub total: usize,
    pub requests: Vec<LeadRequest>,
}

/// List the rep's lead requests, newest first.
///
/// GET /api/v1/lead-requests
#[axum::debug_handler(state = AppState)]
async fn list_requests(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<LeadRequestsResponse>, ApiError> {
    let repo = LeadRequestRepository::new(state.pool.clone());
    let requests = repo.for_member(user.email()).await?;

    Ok(Json(LeadRequestsResponse {
        total: requests.len(),
        requests,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct CreateLeadRequest {
    #[validate(custom(function = "shared::validation::validate_lead_quantity"))]
    quantity: i32,
    #[validate(length(min = 1, max = 100))]
    industry: String,
    #[validate(length(min = 1, max = 100))]
    region: String,
    #[validate(length(max = 2000))]
    notes: Option<String>,
}

/// Submit a request for new leads. Requests start pending.
///
/// POST /api/v1/lead-requests
#[axum::debug_handler(state = AppState)]
async fn create_request(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateLeadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let values = Document::new()
        .set("quantity", request.quantity)
        .set("industry", request.industry)
        .set("region", request.region)
        .set("notes", request.notes)
        .set("status", LeadRequestStatus::Pending.to_string())
        .set("requested_by", user.email());

    let repo = LeadRequestRepository::new(state.pool.clone());
    let created = repo.create(&values).await?;

    info!(rep = %user.email(), "Submitted lead request");

    // A create that returns no row is a recoverable empty state; the
    // client refreshes its list either way.
    Ok((StatusCode::CREATED, Json(created)))
}
