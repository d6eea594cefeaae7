//! Announcement domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Visual severity of an announcement banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementKind {
    #[default]
    Info,
    Success,
    Warning,
    Urgent,
}

impl FromStr for AnnouncementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(AnnouncementKind::Info),
            "success" => Ok(AnnouncementKind::Success),
            "warning" => Ok(AnnouncementKind::Warning),
            "urgent" => Ok(AnnouncementKind::Urgent),
            _ => Err(format!("Unknown announcement type: {}", s)),
        }
    }
}

impl std::fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementKind::Info => write!(f, "info"),
            AnnouncementKind::Success => write!(f, "success"),
            AnnouncementKind::Warning => write!(f, "warning"),
            AnnouncementKind::Urgent => write!(f, "urgent"),
        }
    }
}

/// A broadcast message shown on every member's dashboard while active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
