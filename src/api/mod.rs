//! Backend API
//!
//! Typed HTTP client and wire types for the CivicDesk REST API.

pub mod client;
pub mod types;

pub use client::{
    create_complaint, fetch_alerts, fetch_analytics, fetch_history, fetch_status, fetch_topics,
    get_api_base, login, register, send_chat, set_api_base, submit_intake, DEFAULT_API_BASE,
};
pub use types::{
    Alert, AnalyticsSnapshot, ChatReply, HistoryItem, IntakeReceipt, Session, SimilarCase,
    StatusReport, Topic, DEFAULT_CITIZEN_ID,
};
