//! Support ticket route handlers for the signed-in member.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use domain::models::{SupportTicket, TicketPriority, TicketStatus};
use persistence::repositories::SupportTicketRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentUser;

/// Create support ticket routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_tickets).post(create_ticket))
}

#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    pub total: usize,
    pub tickets: Vec<SupportTicket>,
}

/// List the member's tickets, newest first.
///
/// GET /api/v1/support-tickets
#[axum::debug_handler(state = AppState)]
async fn list_tickets(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<TicketsResponse>, ApiError> {
    let repo = SupportTicketRepository::new(state.pool.clone());
    let tickets = repo.for_member(user.email()).await?;

    Ok(Json(TicketsResponse {
        total: tickets.len(),
        tickets,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct CreateTicketRequest {
    #[validate(length(min = 1, max = 200))]
    subject: String,
    #[validate(length(min = 1, max = 5000))]
    message: String,
    #[serde(default)]
    priority: TicketPriority,
}

/// Raise a support ticket. Tickets start open.
///
/// POST /api/v1/support-tickets
#[axum::debug_handler(state = AppState)]
async fn create_ticket(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateTicketRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let values = Document::new()
        .set("subject", request.subject)
        .set("message", request.message)
        .set("priority", request.priority.to_string())
        .set("status", TicketStatus::Open.to_string())
        .set("submitted_by", user.email());

    let repo = SupportTicketRepository::new(state.pool.clone());
    let created = repo.create(&values).await?;

    info!(member = %user.email(), "Raised support ticket");

    Ok((StatusCode::CREATED, Json(created)))
}
