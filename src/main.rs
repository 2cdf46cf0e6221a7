//! CivicDesk
//!
//! Citizen grievance desk built with Leptos (WASM).
//!
//! # Features
//!
//! - Guided complaint intake with voice, photo, and live location capture
//! - Civic assistant chat with department routing and suggested steps
//! - Ticket status tracking against a three-stage journey
//! - Volume, sentiment, and hotspot analytics for governance teams
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the CivicDesk API over HTTP.

use leptos::*;

use civicdesk_ui::app::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <App /> });
}
