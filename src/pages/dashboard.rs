//! Admin Dashboard Page
//!
//! Operational view for governance teams: the raw analytics aggregate and
//! the emerging hotspot alerts. The two sections load independently, so a
//! failing endpoint only takes down its own panel.

use leptos::*;

use crate::api;
use crate::api::types::{Alert, AnalyticsSnapshot};
use crate::components::{ErrorBanner, Loading};
use crate::state::fetch::Fetch;

/// Admin dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (analytics, set_analytics) = create_signal(Fetch::<AnalyticsSnapshot>::default());
    let (alerts, set_alerts) = create_signal(Fetch::<Vec<Alert>>::default());

    let load_analytics = move || {
        set_analytics.set(Fetch::Loading);
        spawn_local(async move {
            set_analytics.set(Fetch::from_result(api::fetch_analytics().await));
        });
    };

    let load_alerts = move || {
        set_alerts.set(Fetch::Loading);
        spawn_local(async move {
            set_alerts.set(Fetch::from_result(api::fetch_alerts().await));
        });
    };

    // Fetch both sections on mount
    create_effect(move |_| {
        load_analytics();
        load_alerts();
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Admin Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Complaint volume, SLA health, and emerging hotspots"</p>
                </div>
                <button
                    on:click=move |_| {
                        load_analytics();
                        load_alerts();
                    }
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            <div class="grid md:grid-cols-2 gap-8 items-start">
                // Volume and SLA aggregate, rendered as the backend sent it
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"SLA & Volume"</h2>
                    {move || match analytics.get() {
                        Fetch::Loading => view! { <Loading /> }.into_view(),
                        Fetch::Failed(message) => view! { <ErrorBanner message=message /> }.into_view(),
                        Fetch::Ready(snapshot) => {
                            let rendered = serde_json::to_string_pretty(&snapshot)
                                .unwrap_or_else(|e| format!("Render error: {}", e));
                            view! {
                                <pre class="text-xs text-gray-300 whitespace-pre-wrap overflow-x-auto">
                                    {rendered}
                                </pre>
                            }.into_view()
                        }
                    }}
                </section>

                // Hotspots from the last seven days
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Emerging Alerts"</h2>
                    {move || match alerts.get() {
                        Fetch::Loading => view! { <Loading /> }.into_view(),
                        Fetch::Failed(message) => view! { <ErrorBanner message=message /> }.into_view(),
                        Fetch::Ready(alerts) if alerts.is_empty() => view! {
                            <p class="text-gray-400 text-sm">"No active alerts. Hotspots appear after repeated reports from one area."</p>
                        }.into_view(),
                        Fetch::Ready(alerts) => alerts.into_iter().map(|alert| view! {
                            <AlertCard alert=alert />
                        }).collect_view(),
                    }}
                </section>
            </div>
        </div>
    }
}

/// One hotspot row
#[component]
fn AlertCard(alert: Alert) -> impl IntoView {
    let severity_class = match alert.severity.as_str() {
        "high" => "bg-red-900/60 text-red-200",
        "medium" => "bg-yellow-900/60 text-yellow-200",
        _ => "bg-gray-700 text-gray-300",
    };

    view! {
        <div class="flex items-center justify-between border-b border-gray-700 last:border-0 py-3">
            <div>
                <p class="font-medium">{alert.department}</p>
                <p class="text-sm text-gray-400">{alert.location}</p>
            </div>
            <div class="flex items-center space-x-3">
                <span class="text-sm text-gray-300">{format!("{} reports", alert.issue_count)}</span>
                <span class=format!("rounded-full px-2 py-1 text-xs uppercase {}", severity_class)>
                    {alert.severity.clone()}
                </span>
            </div>
        </div>
    }
}
