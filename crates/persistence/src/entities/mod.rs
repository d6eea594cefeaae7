//! Entity definitions (database row mappings).

pub mod announcement;
pub mod app_configuration;
pub mod lead;
pub mod lead_request;
pub mod resource;
pub mod sale;
pub mod support_ticket;
pub mod user;

pub use announcement::AnnouncementEntity;
pub use app_configuration::AppConfigurationEntity;
pub use lead::LeadEntity;
pub use lead_request::LeadRequestEntity;
pub use resource::ResourceEntity;
pub use sale::SaleEntity;
pub use support_ticket::SupportTicketEntity;
pub use user::UserEntity;
