//! Application layer - Use cases and orchestration

pub mod analytics;
pub mod calendar;
pub mod init;
pub mod manage_config;

pub use analytics::{AnalyticsReport, AnalyticsScope, AnalyticsService};
pub use calendar::month_calendar;
pub use manage_config::ConfigService;
