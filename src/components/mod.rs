//! UI Components
//!
//! Reusable Leptos components for the CivicDesk pages.

pub mod banner;
pub mod chat_bubble;
pub mod intake_form;
pub mod loading;
pub mod nav;

pub use banner::ErrorBanner;
pub use chat_bubble::{ChatBubble, TypingIndicator};
pub use intake_form::IntakeForm;
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
