//! Dashboard route handlers.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use domain::models::Announcement;
use domain::services::dashboard::{self, ActivityItem, DashboardStats};
use persistence::repositories::{AnnouncementRepository, LeadRepository, SaleRepository};
use persistence::store::Criteria;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Create dashboard routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub announcements: Vec<Announcement>,
    pub recent_activity: Vec<ActivityItem>,
}

/// Get the signed-in rep's dashboard.
///
/// GET /api/v1/dashboard
///
/// The three collection loads run concurrently and join all-or-nothing:
/// if any one fails the whole refresh fails and no partial state is
/// returned.
#[axum::debug_handler(state = AppState)]
async fn get_dashboard(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let leads_repo = LeadRepository::new(state.pool.clone());
    let sales_repo = SaleRepository::new(state.pool.clone());
    let announcements_repo = AnnouncementRepository::new(state.pool.clone());

    let (leads, sales, announcements) = tokio::try_join!(
        leads_repo.for_rep(&user.email, Criteria::new()),
        sales_repo.for_rep(&user.email),
        announcements_repo.active(),
    )?;

    let response = DashboardResponse {
        stats: dashboard::compute_stats(&leads, &sales),
        recent_activity: dashboard::recent_activity(&leads, &sales),
        announcements,
    };

    Ok(Json(response))
}
