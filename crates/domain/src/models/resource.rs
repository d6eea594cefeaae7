//! Internal resource domain model (scripts, templates, training material).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Resource library category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    ColdCallScripts,
    EmailTemplates,
    SmsTemplates,
    ObjectionHandling,
    Agreements,
    Training,
    #[default]
    Other,
}

impl FromStr for ResourceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cold_call_scripts" => Ok(ResourceCategory::ColdCallScripts),
            "email_templates" => Ok(ResourceCategory::EmailTemplates),
            "sms_templates" => Ok(ResourceCategory::SmsTemplates),
            "objection_handling" => Ok(ResourceCategory::ObjectionHandling),
            "agreements" => Ok(ResourceCategory::Agreements),
            "training" => Ok(ResourceCategory::Training),
            "other" => Ok(ResourceCategory::Other),
            _ => Err(format!("Unknown resource category: {}", s)),
        }
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceCategory::ColdCallScripts => write!(f, "cold_call_scripts"),
            ResourceCategory::EmailTemplates => write!(f, "email_templates"),
            ResourceCategory::SmsTemplates => write!(f, "sms_templates"),
            ResourceCategory::ObjectionHandling => write!(f, "objection_handling"),
            ResourceCategory::Agreements => write!(f, "agreements"),
            ResourceCategory::Training => write!(f, "training"),
            ResourceCategory::Other => write!(f, "other"),
        }
    }
}

/// A shared internal resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: ResourceCategory,
    pub content: Option<String>,
    pub file_url: Option<String>,
    pub video_url: Option<String>,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// Free-text search over title, description and tags.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || self.tags.join(" ").to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn resource(title: &str, description: Option<&str>, tags: &[&str]) -> Resource {
        Resource {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.map(String::from),
            category: ResourceCategory::ColdCallScripts,
            content: None,
            file_url: None,
            video_url: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_title_case_insensitive() {
        let r = resource("Opening Script", None, &[]);
        assert!(r.matches("opening"));
        assert!(r.matches("SCRIPT"));
        assert!(!r.matches("closing"));
    }

    #[test]
    fn test_matches_description_and_tags() {
        let r = resource("Intro", Some("Handles price objections"), &["pricing", "b2b"]);
        assert!(r.matches("price"));
        assert!(r.matches("b2b"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(resource("Anything", None, &[]).matches(""));
    }

    #[test]
    fn test_category_round_trip() {
        for cat in [
            ResourceCategory::ColdCallScripts,
            ResourceCategory::EmailTemplates,
            ResourceCategory::SmsTemplates,
            ResourceCategory::ObjectionHandling,
            ResourceCategory::Agreements,
            ResourceCategory::Training,
            ResourceCategory::Other,
        ] {
            let parsed: ResourceCategory = cat.to_string().parse().unwrap();
            assert_eq!(parsed, cat);
        }
    }
}
