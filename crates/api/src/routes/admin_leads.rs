//! Admin lead assignment route handlers.
//!
//! Admins create leads directly onto a rep and work the incoming lead
//! request queue.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{Lead, LeadRequest, LeadRequestStatus, LeadStatus};
use persistence::repositories::{LeadRepository, LeadRequestRepository};
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminUser;

/// Create admin lead routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leads", get(list_leads).post(create_lead))
        .route("/lead-requests", get(list_requests))
        .route("/lead-requests/:request_id", patch(update_request))
}

#[derive(Debug, Serialize)]
pub struct LeadsResponse {
    pub total: usize,
    pub leads: Vec<Lead>,
}

/// List every lead, newest first.
///
/// GET /api/v1/admin/leads
#[axum::debug_handler(state = AppState)]
async fn list_leads(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<LeadsResponse>, ApiError> {
    let repo = LeadRepository::new(state.pool.clone());
    let leads = repo.list(Some("-created_at")).await?;

    Ok(Json(LeadsResponse {
        total: leads.len(),
        leads,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct CreateLeadRequest {
    #[validate(length(min = 1, max = 200))]
    company_name: String,
    #[validate(length(min = 1, max = 200))]
    contact_name: String,
    #[validate(email)]
    email: Option<String>,
    #[validate(length(max = 50))]
    phone: Option<String>,
    industry: Option<String>,
    region: Option<String>,
    #[validate(email)]
    assigned_to: String,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    estimated_value: Option<f64>,
    #[validate(length(max = 5000))]
    notes: Option<String>,
}

/// Create a lead assigned to a rep. New leads start in `assigned`.
///
/// POST /api/v1/admin/leads
#[axum::debug_handler(state = AppState)]
async fn create_lead(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateLeadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let values = Document::new()
        .set("company_name", request.company_name)
        .set("contact_name", request.contact_name)
        .set("email", request.email)
        .set("phone", request.phone)
        .set("industry", request.industry)
        .set("region", request.region)
        .set("status", LeadStatus::Assigned.to_string())
        .set("assigned_to", request.assigned_to.clone())
        .set("estimated_value", request.estimated_value)
        .set("notes", request.notes);

    let repo = LeadRepository::new(state.pool.clone());
    let created = repo.create(&values).await?;

    info!(admin = %admin.email, rep = %request.assigned_to, "Assigned new lead");

    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Debug, Serialize)]
pub struct LeadRequestsResponse {
    pub total: usize,
    pub requests: Vec<LeadRequest>,
}

/// List every lead request, newest first.
///
/// GET /api/v1/admin/lead-requests
#[axum::debug_handler(state = AppState)]
async fn list_requests(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<LeadRequestsResponse>, ApiError> {
    let repo = LeadRequestRepository::new(state.pool.clone());
    let requests = repo.list().await?;

    Ok(Json(LeadRequestsResponse {
        total: requests.len(),
        requests,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateLeadRequestRequest {
    status: LeadRequestStatus,
    #[validate(length(max = 2000))]
    admin_notes: Option<String>,
}

/// Approve, fulfill or reject a lead request.
///
/// PATCH /api/v1/admin/lead-requests/:request_id
#[axum::debug_handler(state = AppState)]
async fn update_request(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(request_id): Path<Uuid>,
    Json(request): Json<UpdateLeadRequestRequest>,
) -> Result<Json<LeadRequest>, ApiError> {
    request.validate()?;

    let mut values = Document::new().set("status", request.status.to_string());
    if let Some(admin_notes) = request.admin_notes {
        values = values.set("admin_notes", admin_notes);
    }

    let repo = LeadRequestRepository::new(state.pool.clone());
    let updated = repo
        .update(request_id, &values)
        .await?
        .ok_or_else(|| ApiError::NotFound("Lead request not found".to_string()))?;

    info!(
        admin = %admin.email,
        request_id = %request_id,
        status = %updated.status,
        "Updated lead request"
    );

    Ok(Json(updated))
}
