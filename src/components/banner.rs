//! Banner Component
//!
//! Inline error banner for page sections that failed to load.

use leptos::*;

/// Red banner with the failure message for one section
#[component]
pub fn ErrorBanner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-900/40 border border-red-700 text-red-200 rounded-lg px-4 py-3 text-sm">
            {message}
        </div>
    }
}
