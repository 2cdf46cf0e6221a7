//! Pages
//!
//! Top-level page components for each route.

pub mod analytics;
pub mod chat;
pub mod dashboard;
pub mod history;
pub mod landing;
pub mod tracker;

pub use analytics::AnalyticsPage;
pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use history::HistoryPage;
pub use landing::LandingPage;
pub use tracker::TrackerPage;
