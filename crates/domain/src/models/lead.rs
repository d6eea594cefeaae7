//! Lead domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Pipeline status of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Assigned,
    Contacted,
    Replied,
    Booked,
    NoAnswer,
    NotInterested,
    Closed,
}

impl LeadStatus {
    /// Statuses that count as "contacted" for dashboard statistics.
    pub fn is_contacted(self) -> bool {
        matches!(
            self,
            LeadStatus::Contacted | LeadStatus::Replied | LeadStatus::Booked | LeadStatus::Closed
        )
    }
}

impl FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assigned" => Ok(LeadStatus::Assigned),
            "contacted" => Ok(LeadStatus::Contacted),
            "replied" => Ok(LeadStatus::Replied),
            "booked" => Ok(LeadStatus::Booked),
            "no_answer" => Ok(LeadStatus::NoAnswer),
            "not_interested" => Ok(LeadStatus::NotInterested),
            "closed" => Ok(LeadStatus::Closed),
            _ => Err(format!("Unknown lead status: {}", s)),
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::Assigned => write!(f, "assigned"),
            LeadStatus::Contacted => write!(f, "contacted"),
            LeadStatus::Replied => write!(f, "replied"),
            LeadStatus::Booked => write!(f, "booked"),
            LeadStatus::NoAnswer => write!(f, "no_answer"),
            LeadStatus::NotInterested => write!(f, "not_interested"),
            LeadStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A sales lead assigned to a rep.
///
/// `assigned_to` holds the rep's email; it is a weak reference resolved
/// in memory, not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub industry: Option<String>,
    pub region: Option<String>,
    pub status: LeadStatus,
    pub assigned_to: Option<String>,
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
    pub last_contacted: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    /// One CSV export row, in the fixed export column order.
    pub fn export_row(&self) -> Vec<String> {
        vec![
            self.company_name.clone(),
            self.contact_name.clone(),
            self.email.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.industry.clone().unwrap_or_default(),
            self.region.clone().unwrap_or_default(),
            self.status.to_string(),
            self.notes.clone().unwrap_or_default(),
        ]
    }
}

/// Header of the lead CSV export.
pub const EXPORT_HEADERS: [&str; 8] = [
    "Company", "Contact", "Email", "Phone", "Industry", "Region", "Status", "Notes",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            LeadStatus::Assigned,
            LeadStatus::Contacted,
            LeadStatus::Replied,
            LeadStatus::Booked,
            LeadStatus::NoAnswer,
            LeadStatus::NotInterested,
            LeadStatus::Closed,
        ] {
            let parsed: LeadStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_contacted_statuses() {
        assert!(LeadStatus::Contacted.is_contacted());
        assert!(LeadStatus::Replied.is_contacted());
        assert!(LeadStatus::Booked.is_contacted());
        assert!(LeadStatus::Closed.is_contacted());
        assert!(!LeadStatus::Assigned.is_contacted());
        assert!(!LeadStatus::NoAnswer.is_contacted());
        assert!(!LeadStatus::NotInterested.is_contacted());
    }
}
