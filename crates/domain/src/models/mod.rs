//! Domain model definitions.

pub mod announcement;
pub mod app_configuration;
pub mod identity;
pub mod lead;
pub mod lead_request;
pub mod resource;
pub mod sale;
pub mod support_ticket;
pub mod user;

pub use announcement::{Announcement, AnnouncementKind};
pub use app_configuration::{AppConfiguration, ExternalTool, NavigationItem};
pub use identity::{AuthSession, CurrentUser};
pub use lead::{Lead, LeadStatus};
pub use lead_request::{LeadRequest, LeadRequestStatus};
pub use resource::{Resource, ResourceCategory};
pub use sale::{PaymentStatus, Sale};
pub use support_ticket::{SupportTicket, TicketPriority, TicketStatus};
pub use user::{User, UserRole};
