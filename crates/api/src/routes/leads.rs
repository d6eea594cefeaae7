//! Lead route handlers for the signed-in rep.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;

use domain::models::lead::EXPORT_HEADERS;
use domain::models::{Lead, LeadStatus};
use persistence::repositories::LeadRepository;
use persistence::store::{Criteria, Document};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Create lead routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads))
        .route("/export", get(export_leads))
        .route("/:lead_id", patch(update_lead))
}

/// Optional equality filters; `all` or absence means unconstrained.
#[derive(Debug, Deserialize, Default)]
struct LeadFilterQuery {
    status: Option<String>,
    industry: Option<String>,
    region: Option<String>,
}

impl LeadFilterQuery {
    fn criteria(&self) -> Result<Criteria, ApiError> {
        let mut criteria = Criteria::new();
        if let Some(status) = active_filter(&self.status) {
            // Reject unknown statuses up front instead of matching nothing.
            let status = LeadStatus::from_str(status).map_err(ApiError::Validation)?;
            criteria = criteria.field("status", status.to_string());
        }
        if let Some(industry) = active_filter(&self.industry) {
            criteria = criteria.field("industry", industry);
        }
        if let Some(region) = active_filter(&self.region) {
            criteria = criteria.field("region", region);
        }
        Ok(criteria)
    }
}

fn active_filter(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        None | Some("") | Some("all") => None,
        Some(v) => Some(v),
    }
}

#[derive(Debug, Serialize)]
pub struct LeadsResponse {
    pub total: usize,
    pub leads: Vec<Lead>,
}

/// List the rep's assigned leads, newest first.
///
/// GET /api/v1/leads?status=&industry=&region=
#[axum::debug_handler(state = AppState)]
async fn list_leads(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<LeadFilterQuery>,
) -> Result<Json<LeadsResponse>, ApiError> {
    let repo = LeadRepository::new(state.pool.clone());
    let leads = repo.for_rep(user.email(), query.criteria()?).await?;

    Ok(Json(LeadsResponse {
        total: leads.len(),
        leads,
    }))
}

#[derive(Debug, Deserialize)]
struct UpdateLeadRequest {
    status: Option<LeadStatus>,
    notes: Option<String>,
    last_contacted: Option<DateTime<Utc>>,
    estimated_value: Option<f64>,
}

/// Update one of the rep's leads (status changes, notes, contact log).
///
/// PATCH /api/v1/leads/:lead_id
#[axum::debug_handler(state = AppState)]
async fn update_lead(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(lead_id): Path<Uuid>,
    Json(request): Json<UpdateLeadRequest>,
) -> Result<Json<Lead>, ApiError> {
    let mut values = Document::new();
    if let Some(status) = request.status {
        values = values.set("status", status.to_string());
    }
    if let Some(notes) = request.notes {
        values = values.set("notes", notes);
    }
    if let Some(last_contacted) = request.last_contacted {
        values = values.set("last_contacted", last_contacted);
    }
    if let Some(estimated_value) = request.estimated_value {
        values = values.set("estimated_value", estimated_value);
    }

    let repo = LeadRepository::new(state.pool.clone());
    let updated = repo
        .update(lead_id, &values)
        .await?
        .ok_or_else(|| ApiError::NotFound("Lead not found".to_string()))?;

    info!(lead_id = %lead_id, rep = %user.email(), "Updated lead");

    Ok(Json(updated))
}

/// Export the rep's current lead list as CSV.
///
/// GET /api/v1/leads/export?status=&industry=&region=
///
/// Header row `Company,Contact,Email,Phone,Industry,Region,Status,Notes`,
/// one quoted row per lead in list order.
#[axum::debug_handler(state = AppState)]
async fn export_leads(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<LeadFilterQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = LeadRepository::new(state.pool.clone());
    let leads = repo.for_rep(user.email(), query.criteria()?).await?;

    let rows: Vec<Vec<String>> = leads.iter().map(Lead::export_row).collect();
    let csv = shared::csv::render(&EXPORT_HEADERS, &rows);

    let filename = format!("leads-{}.csv", Utc::now().format("%Y-%m-%d"));
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((StatusCode::OK, headers, csv))
}
