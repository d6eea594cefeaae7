//! Application configuration domain model.
//!
//! A single row drives branding and navigation for the whole app. When no
//! row exists yet, the resolver seeds the collection with the defaults
//! defined here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in the sidebar navigation.
///
/// `is_active` and `order` are optional in stored data: an absent flag
/// means active, an absent order sorts as 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationItem {
    pub title: String,
    pub page: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

/// A link to an external tool shown under the navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalTool {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// The branding and navigation configuration row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfiguration {
    pub id: Uuid,
    pub app_name: String,
    pub app_tagline: String,
    pub logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub company_phone: Option<String>,
    pub custom_css: Option<String>,
    pub navigation_items: Vec<NavigationItem>,
    pub external_tools: Vec<ExternalTool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppConfiguration {
    /// Navigation items the shell should render: active ones, sorted
    /// ascending by `order` with missing orders treated as 0.
    pub fn active_navigation(&self) -> Vec<NavigationItem> {
        let mut items: Vec<NavigationItem> = self
            .navigation_items
            .iter()
            .filter(|item| item.is_active != Some(false))
            .cloned()
            .collect();
        items.sort_by_key(|item| item.order.unwrap_or(0));
        items
    }

    /// External tools the shell should render: active ones, stored order.
    pub fn active_tools(&self) -> Vec<ExternalTool> {
        self.external_tools
            .iter()
            .filter(|tool| tool.is_active != Some(false))
            .cloned()
            .collect()
    }
}

/// The fixed five-item default navigation.
pub fn default_navigation() -> Vec<NavigationItem> {
    let pages = [
        ("Dashboard", "Dashboard", "LayoutDashboard"),
        ("Leads", "Leads", "Users"),
        ("Resources", "Resources", "BookOpen"),
        ("Commissions", "Commissions", "TrendingUp"),
        ("Support", "Support", "MessageCircle"),
    ];
    pages
        .iter()
        .enumerate()
        .map(|(i, (title, page, icon))| NavigationItem {
            title: (*title).to_string(),
            page: (*page).to_string(),
            icon: (*icon).to_string(),
            is_active: Some(true),
            order: Some(i as i32 + 1),
        })
        .collect()
}

/// The fixed five-item default external tool list.
pub fn default_external_tools() -> Vec<ExternalTool> {
    let tools = [
        (
            "AI Assistant",
            "https://ai.byteblitz.co.uk",
            "Internal GPT assistant",
            "Brain",
        ),
        (
            "Automation Hub",
            "https://n8n.byteblitz.co.uk",
            "Workflow automation",
            "Zap",
        ),
        (
            "Email Campaigns",
            "https://mautic.byteblitz.co.uk",
            "Campaign management",
            "Mail",
        ),
        (
            "CRM System",
            "https://crm.byteblitz.co.uk",
            "Client tracking",
            "Database",
        ),
        (
            "Booking System",
            "https://cal.byteblitz.co.uk",
            "Schedule meetings",
            "Calendar",
        ),
    ];
    tools
        .iter()
        .map(|(title, url, description, icon)| ExternalTool {
            title: (*title).to_string(),
            url: (*url).to_string(),
            description: Some((*description).to_string()),
            icon: (*icon).to_string(),
            is_active: Some(true),
        })
        .collect()
}

/// Default branding values used when seeding an empty configuration
/// collection.
pub mod defaults {
    pub const APP_NAME: &str = "ByteBlitz Staff Hub";
    pub const APP_TAGLINE: &str = "Digital Agency CRM";
    pub const PRIMARY_COLOR: &str = "#8B5CF6";
    pub const SECONDARY_COLOR: &str = "#EC4899";
    pub const COMPANY_PHONE: &str = "07359 735508";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(navigation_items: Vec<NavigationItem>, external_tools: Vec<ExternalTool>) -> AppConfiguration {
        AppConfiguration {
            id: Uuid::new_v4(),
            app_name: "ByteBlitz Staff Hub".to_string(),
            app_tagline: "Digital Agency CRM".to_string(),
            logo_url: None,
            favicon_url: None,
            primary_color: "#8B5CF6".to_string(),
            secondary_color: "#EC4899".to_string(),
            company_phone: None,
            custom_css: None,
            navigation_items,
            external_tools,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn nav(title: &str, is_active: Option<bool>, order: Option<i32>) -> NavigationItem {
        NavigationItem {
            title: title.to_string(),
            page: title.to_string(),
            icon: "LayoutDashboard".to_string(),
            is_active,
            order,
        }
    }

    #[test]
    fn test_default_navigation_has_five_ordered_items() {
        let items = default_navigation();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].title, "Dashboard");
        assert_eq!(items[4].title, "Support");
        assert_eq!(items[0].order, Some(1));
        assert_eq!(items[4].order, Some(5));
    }

    #[test]
    fn test_default_external_tools_has_five_items() {
        assert_eq!(default_external_tools().len(), 5);
    }

    #[test]
    fn test_active_navigation_filters_and_sorts() {
        let config = config_with(
            vec![
                nav("Third", None, Some(3)),
                nav("Hidden", Some(false), Some(1)),
                nav("First", Some(true), None),
                nav("Second", None, Some(2)),
            ],
            vec![],
        );
        let items = config.active_navigation();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        // Missing order sorts as 0, ahead of explicit orders; inactive dropped.
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_absent_active_flag_means_active() {
        let config = config_with(vec![nav("Implicit", None, None)], vec![]);
        assert_eq!(config.active_navigation().len(), 1);
    }

    #[test]
    fn test_active_tools_keeps_stored_order() {
        let mut tools = default_external_tools();
        tools[1].is_active = Some(false);
        let config = config_with(vec![], tools);
        let active = config.active_tools();
        assert_eq!(active.len(), 4);
        assert_eq!(active[0].title, "AI Assistant");
        assert_eq!(active[1].title, "Email Campaigns");
    }

    #[test]
    fn test_default_branding_values() {
        assert_eq!(defaults::APP_NAME, "ByteBlitz Staff Hub");
        assert_eq!(defaults::PRIMARY_COLOR, "#8B5CF6");
        assert_eq!(defaults::SECONDARY_COLOR, "#EC4899");
    }
}
