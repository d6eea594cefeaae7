//! Admin panel route handlers: overview counts and team statistics.
//!
//! The per-area management endpoints live in the sibling `admin_*`
//! modules; this module stitches them into one router.

use axum::{extract::State, routing::get, Json, Router};
use chrono::{Duration, Utc};
use serde::Serialize;

use domain::services::commission;
use domain::services::team::{self, TeamMemberStats};
use persistence::repositories::{
    LeadRepository, LeadRequestRepository, SaleRepository, SupportTicketRepository, UserRepository,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminUser;
use crate::routes::{
    admin_announcements, admin_config, admin_leads, admin_sales, admin_support, admin_users,
};

/// Create the admin router: overview, stats, and the management areas.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/stats", get(get_stats))
        .merge(admin_users::router())
        .merge(admin_leads::router())
        .merge(admin_sales::router())
        .merge(admin_announcements::router())
        .merge(admin_support::router())
        .merge(admin_config::router())
}

#[derive(Debug, Serialize)]
pub struct AdminOverviewResponse {
    pub total_users: usize,
    pub total_leads: usize,
    pub pending_requests: usize,
    pub open_tickets: usize,
    pub total_sales: usize,
    pub unpaid_commissions: f64,
}

/// Get the admin overview counts.
///
/// GET /api/v1/admin/overview
///
/// Five collection loads run concurrently; the join is all-or-nothing so
/// the panel never renders from partial data.
#[axum::debug_handler(state = AppState)]
async fn get_overview(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<AdminOverviewResponse>, ApiError> {
    let users = UserRepository::new(state.pool.clone());
    let leads = LeadRepository::new(state.pool.clone());
    let requests = LeadRequestRepository::new(state.pool.clone());
    let tickets = SupportTicketRepository::new(state.pool.clone());
    let sales = SaleRepository::new(state.pool.clone());

    let (users, leads, pending_requests, open_tickets, sales) = tokio::try_join!(
        users.list(),
        leads.list(None),
        requests.with_status(domain::models::LeadRequestStatus::Pending),
        tickets.with_status(domain::models::TicketStatus::Open),
        sales.list(None),
    )?;

    Ok(Json(AdminOverviewResponse {
        total_users: users.len(),
        total_leads: leads.len(),
        pending_requests: pending_requests.len(),
        open_tickets: open_tickets.len(),
        total_sales: sales.len(),
        unpaid_commissions: commission::unpaid_total(&sales),
    }))
}

#[derive(Debug, Serialize)]
pub struct AdminStatsResponse {
    /// Sales recorded in the last seven days.
    pub recent_sales: usize,
    /// Leads created in the last seven days.
    pub recent_leads: usize,
    pub team: Vec<TeamMemberStats>,
}

/// Get seven-day activity and the per-rep performance table.
///
/// GET /api/v1/admin/stats
#[axum::debug_handler(state = AppState)]
async fn get_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<AdminStatsResponse>, ApiError> {
    let users = UserRepository::new(state.pool.clone());
    let leads = LeadRepository::new(state.pool.clone());
    let sales = SaleRepository::new(state.pool.clone());

    let (users, leads, sales) =
        tokio::try_join!(users.list(), leads.list(None), sales.list(None))?;

    let cutoff = Utc::now() - Duration::days(7);
    let recent_sales = sales.iter().filter(|s| s.created_at > cutoff).count();
    let recent_leads = leads.iter().filter(|l| l.created_at > cutoff).count();

    Ok(Json(AdminStatsResponse {
        recent_sales,
        recent_leads,
        team: team::rollup(&users, &leads, &sales),
    }))
}
