//! Landing Page
//!
//! Static hero with the product pitch and entry points.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section class="bg-gray-800 rounded-xl p-10">
                <h1 class="text-4xl font-bold mb-4">"Smart Grievance & Policy Intelligence"</h1>
                <p class="text-gray-300 leading-relaxed max-w-3xl">
                    "CivicDesk routes citizen complaints to the right department, tracks each \
                     ticket against its SLA, and surfaces sentiment and topic trends for \
                     governance teams."
                </p>
                <div class="flex flex-wrap gap-3 mt-6">
                    <A
                        href="/chat"
                        class="px-5 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                    >
                        "Report an issue"
                    </A>
                    <A
                        href="/tracker"
                        class="px-5 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-semibold transition-colors"
                    >
                        "Track a complaint"
                    </A>
                </div>
            </section>

            // What the desk does
            <section class="grid md:grid-cols-3 gap-4">
                <FeatureCard
                    icon="🗣️"
                    title="Guided intake"
                    body="Describe the issue by text or voice, attach photos, and let the desk capture your location."
                />
                <FeatureCard
                    icon="🧭"
                    title="Ticket journey"
                    body="Every complaint gets a ticket ID and a three-stage journey you can check any time."
                />
                <FeatureCard
                    icon="📈"
                    title="Policy signals"
                    body="Sentiment, topics, and hotspot alerts aggregated across every complaint filed."
                />
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <span class="text-3xl">{icon}</span>
            <h3 class="text-lg font-semibold mt-3">{title}</h3>
            <p class="text-sm text-gray-400 mt-2">{body}</p>
        </div>
    }
}
