//! Analytics Page
//!
//! Public-facing policy view: sentiment split across all complaints and
//! the topics the backend's clustering surfaced. Sections load and fail
//! independently.

use leptos::*;

use crate::api;
use crate::api::types::{AnalyticsSnapshot, Topic};
use crate::components::{ErrorBanner, Loading};
use crate::state::fetch::Fetch;

/// Analytics page component
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let (snapshot, set_snapshot) = create_signal(Fetch::<AnalyticsSnapshot>::default());
    let (topics, set_topics) = create_signal(Fetch::<Vec<Topic>>::default());

    let load_snapshot = move || {
        set_snapshot.set(Fetch::Loading);
        spawn_local(async move {
            set_snapshot.set(Fetch::from_result(api::fetch_analytics().await));
        });
    };

    let load_topics = move || {
        set_topics.set(Fetch::Loading);
        spawn_local(async move {
            set_topics.set(Fetch::from_result(api::fetch_topics().await));
        });
    };

    // Fetch both sections on mount
    create_effect(move |_| {
        load_snapshot();
        load_topics();
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Policy & Trend Insights"</h1>
                    <p class="text-gray-400 mt-1">"Real-time summary of grievance volume, sentiment, and top topics"</p>
                </div>
                <button
                    on:click=move |_| {
                        load_snapshot();
                        load_topics();
                    }
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            // Sentiment split
            <section>
                <h2 class="text-lg font-semibold mb-4">"Citizen Sentiment"</h2>
                {move || match snapshot.get() {
                    Fetch::Loading => view! { <Loading /> }.into_view(),
                    Fetch::Failed(message) => view! { <ErrorBanner message=message /> }.into_view(),
                    Fetch::Ready(snapshot) if snapshot.sentiment_distribution.is_empty() => view! {
                        <p class="text-gray-400 text-sm">"No sentiment data yet."</p>
                    }.into_view(),
                    Fetch::Ready(snapshot) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            {snapshot.sentiment_distribution.into_iter().map(|(label, count)| view! {
                                <div class="bg-gray-800 rounded-xl p-4">
                                    <p class="text-xs uppercase tracking-wide text-gray-400">{label}</p>
                                    <p class="text-2xl font-bold text-primary-300 mt-1">{count}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    }.into_view(),
                }}
            </section>

            // Clustered complaint themes
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-lg font-semibold mb-4">"Topic Modeling Highlights"</h2>
                {move || match topics.get() {
                    Fetch::Loading => view! { <Loading /> }.into_view(),
                    Fetch::Failed(message) => view! { <ErrorBanner message=message /> }.into_view(),
                    Fetch::Ready(topics) if topics.is_empty() => view! {
                        <p class="text-gray-400 text-sm">"No topics yet. Clusters form once enough complaints arrive."</p>
                    }.into_view(),
                    Fetch::Ready(topics) => view! {
                        <ul class="space-y-2">
                            {topics.into_iter().map(|topic| view! {
                                <li class="bg-gray-900/60 rounded-lg px-4 py-3 text-sm">
                                    <span class="text-primary-300 font-medium">
                                        {format!("Topic #{}", topic.topic_id)}
                                    </span>
                                    <span class="text-gray-400">
                                        {format!(" • {} cases • ", topic.size)}
                                    </span>
                                    {topic.representative_text}
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_view(),
                }}
            </section>
        </div>
    }
}
