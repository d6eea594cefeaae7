//! Lead request domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle of a rep's request for new leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadRequestStatus {
    #[default]
    Pending,
    Approved,
    Fulfilled,
    Rejected,
}

impl FromStr for LeadRequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(LeadRequestStatus::Pending),
            "approved" => Ok(LeadRequestStatus::Approved),
            "fulfilled" => Ok(LeadRequestStatus::Fulfilled),
            "rejected" => Ok(LeadRequestStatus::Rejected),
            _ => Err(format!("Unknown lead request status: {}", s)),
        }
    }
}

impl std::fmt::Display for LeadRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadRequestStatus::Pending => write!(f, "pending"),
            LeadRequestStatus::Approved => write!(f, "approved"),
            LeadRequestStatus::Fulfilled => write!(f, "fulfilled"),
            LeadRequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A request for N leads of a given industry and region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRequest {
    pub id: Uuid,
    pub quantity: i32,
    pub industry: String,
    pub region: String,
    pub notes: Option<String>,
    pub status: LeadRequestStatus,
    pub requested_by: String,
    pub admin_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            LeadRequestStatus::Pending,
            LeadRequestStatus::Approved,
            LeadRequestStatus::Fulfilled,
            LeadRequestStatus::Rejected,
        ] {
            let parsed: LeadRequestStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
