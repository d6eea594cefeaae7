//! Admin support ticket management route handlers.

use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{SupportTicket, TicketStatus};
use persistence::repositories::SupportTicketRepository;
use persistence::store::Document;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AdminUser;

/// Create admin support routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/support-tickets", get(list_tickets))
        .route("/support-tickets/:ticket_id", patch(update_ticket))
}

#[derive(Debug, Serialize)]
pub struct TicketsResponse {
    pub total: usize,
    pub tickets: Vec<SupportTicket>,
}

/// List every ticket, newest first.
///
/// GET /api/v1/admin/support-tickets
#[axum::debug_handler(state = AppState)]
async fn list_tickets(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<TicketsResponse>, ApiError> {
    let repo = SupportTicketRepository::new(state.pool.clone());
    let tickets = repo.list().await?;

    Ok(Json(TicketsResponse {
        total: tickets.len(),
        tickets,
    }))
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateTicketRequest {
    status: Option<TicketStatus>,
    /// Responding resolves the ticket.
    #[validate(length(min = 1, max = 5000))]
    admin_response: Option<String>,
}

/// Progress a ticket or send an admin response.
///
/// PATCH /api/v1/admin/support-tickets/:ticket_id
///
/// Moving a ticket to resolved stamps `resolved_at`; sending a response
/// resolves it in the same update.
#[axum::debug_handler(state = AppState)]
async fn update_ticket(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(ticket_id): Path<Uuid>,
    Json(request): Json<UpdateTicketRequest>,
) -> Result<Json<SupportTicket>, ApiError> {
    request.validate()?;

    let mut status = request.status;
    let mut values = Document::new();

    if let Some(response) = request.admin_response {
        values = values.set("admin_response", response);
        status = Some(TicketStatus::Resolved);
    }
    if let Some(status) = status {
        values = values.set("status", status.to_string());
        if status == TicketStatus::Resolved {
            values = values.set("resolved_at", Utc::now());
        }
    }

    let repo = SupportTicketRepository::new(state.pool.clone());
    let updated = repo
        .update(ticket_id, &values)
        .await?
        .ok_or_else(|| ApiError::NotFound("Support ticket not found".to_string()))?;

    info!(
        admin = %admin.email,
        ticket_id = %ticket_id,
        status = %updated.status,
        "Updated support ticket"
    );

    Ok(Json(updated))
}
