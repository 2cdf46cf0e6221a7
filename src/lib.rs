//! # CivicDesk UI
//!
//! Browser frontend for the CivicDesk grievance platform, built with
//! Leptos (WASM, client-side rendered). Citizens file and track complaints;
//! governance teams watch volume, sentiment, and hotspot trends.
//!
//! ## Modules
//!
//! - [`api`]: Typed HTTP client for the CivicDesk REST backend
//! - [`state`]: Page-level state containers and browser capability helpers
//! - [`components`]: Reusable view components
//! - [`pages`]: One component per route
//! - [`app`]: Router shell wiring pages together

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
