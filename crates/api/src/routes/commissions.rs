//! Commission route handlers for the signed-in rep.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use domain::models::Sale;
use domain::services::commission::{self, CommissionSummary};
use persistence::repositories::SaleRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Create commission routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_commissions))
}

#[derive(Debug, Serialize)]
pub struct CommissionsResponse {
    pub summary: CommissionSummary,
    pub sales: Vec<Sale>,
}

/// Get the rep's sales and commission totals, newest first.
///
/// GET /api/v1/commissions
#[axum::debug_handler(state = AppState)]
async fn get_commissions(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<CommissionsResponse>, ApiError> {
    let repo = SaleRepository::new(state.pool.clone());
    let sales = repo.for_rep(user.email()).await?;

    Ok(Json(CommissionsResponse {
        summary: commission::summarize(&sales),
        sales,
    }))
}
