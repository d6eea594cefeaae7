//! Admin commission management route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{PaymentStatus, Sale};
use domain::services::commission;
use persistence::repositories::SaleRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminUser;

/// Create admin sales routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route("/sales/:sale_id/mark-paid", post(mark_paid))
}

#[derive(Debug, Serialize)]
pub struct SalesResponse {
    pub total: usize,
    /// Commission total still owed across all reps.
    pub unpaid_commissions: f64,
    pub sales: Vec<Sale>,
}

/// List every sale, newest first, with the outstanding commission total.
///
/// GET /api/v1/admin/sales
#[axum::debug_handler(state = AppState)]
async fn list_sales(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<SalesResponse>, ApiError> {
    let repo = SaleRepository::new(state.pool.clone());
    let sales = repo.list(Some("-created_at")).await?;

    Ok(Json(SalesResponse {
        total: sales.len(),
        unpaid_commissions: commission::unpaid_total(&sales),
        sales,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct CreateSaleRequest {
    #[validate(length(min = 1, max = 200))]
    client_name: String,
    #[validate(email)]
    rep_email: String,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    sale_amount: f64,
    #[validate(custom(function = "shared::validation::validate_amount"))]
    commission_amount: f64,
    sale_date: Option<DateTime<Utc>>,
}

/// Record a sale for a rep. Commission starts unpaid and pending.
///
/// POST /api/v1/admin/sales
#[axum::debug_handler(state = AppState)]
async fn create_sale(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(request): Json<CreateSaleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let values = Document::new()
        .set("client_name", request.client_name)
        .set("rep_email", request.rep_email.clone())
        .set("sale_amount", request.sale_amount)
        .set("commission_amount", request.commission_amount)
        .set("commission_paid", false)
        .set("payment_status", PaymentStatus::Pending.to_string())
        .set("sale_date", request.sale_date);

    let repo = SaleRepository::new(state.pool.clone());
    let created = repo.create(&values).await?;

    info!(admin = %admin.email, rep = %request.rep_email, "Recorded sale");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Mark a sale's commission as paid out.
///
/// POST /api/v1/admin/sales/:sale_id/mark-paid
#[axum::debug_handler(state = AppState)]
async fn mark_paid(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(sale_id): Path<Uuid>,
) -> Result<Json<Sale>, ApiError> {
    let repo = SaleRepository::new(state.pool.clone());
    let updated = repo
        .mark_paid(sale_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Sale not found".to_string()))?;

    info!(admin = %admin.email, sale_id = %sale_id, "Marked commission paid");

    Ok(Json(updated))
}
