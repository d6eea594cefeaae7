//! HTTP route handlers, one module per domain view.

pub mod admin;
pub mod admin_announcements;
pub mod admin_config;
pub mod admin_leads;
pub mod admin_sales;
pub mod admin_support;
pub mod admin_users;
pub mod auth;
pub mod commissions;
pub mod dashboard;
pub mod health;
pub mod lead_requests;
pub mod leads;
pub mod navigation;
pub mod resources;
pub mod support;
