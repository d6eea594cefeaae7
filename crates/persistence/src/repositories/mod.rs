//! Repository facades over the generic store.
//!
//! Repositories add no query logic of their own: every call goes through
//! [`crate::store::Store`]. They exist to map row entities into domain
//! models and to name the handful of filters each view actually uses.

pub mod announcement;
pub mod app_configuration;
pub mod lead;
pub mod lead_request;
pub mod resource;
pub mod sale;
pub mod support_ticket;
pub mod user;

pub use announcement::AnnouncementRepository;
pub use app_configuration::AppConfigurationRepository;
pub use lead::LeadRepository;
pub use lead_request::LeadRequestRepository;
pub use resource::ResourceRepository;
pub use sale::SaleRepository;
pub use support_ticket::SupportTicketRepository;
pub use user::UserRepository;

/// Newest-first ordering used by most roster views.
pub const NEWEST_FIRST: &str = "-created_at";
