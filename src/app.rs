//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Nav;
use crate::pages::{AnalyticsPage, ChatPage, DashboardPage, HistoryPage, LandingPage, TrackerPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=LandingPage />
                        <Route path="/chat" view=ChatPage />
                        <Route path="/history" view=HistoryPage />
                        <Route path="/tracker" view=TrackerPage />
                        <Route path="/admin" view=DashboardPage />
                        <Route path="/analytics" view=AnalyticsPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer showing which backend this build talks to
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"CivicDesk"</span>
                <span>{format!("API: {}", api::get_api_base())}</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to CivicDesk"
            </A>
        </div>
    }
}
