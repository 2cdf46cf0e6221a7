//! State Management
//!
//! Page-level state containers and the browser capability helpers
//! (geolocation, speech) they lean on.

pub mod conversation;
pub mod fetch;
pub mod geo;
pub mod intake;
pub mod tracker;
pub mod voice;

pub use conversation::{ChatEntry, Conversation, ReplyMeta, Sender};
pub use fetch::Fetch;
pub use geo::GeoPoint;
pub use intake::IntakeDraft;
pub use tracker::{stage_for, Lookup, Stage, TIMELINE};
