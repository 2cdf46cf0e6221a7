//! History Page
//!
//! Past assistant interactions for the default citizen account, newest
//! first as the backend returns them.

use leptos::*;

use crate::api;
use crate::api::types::DEFAULT_CITIZEN_ID;
use crate::components::{ErrorBanner, Loading};
use crate::state::fetch::Fetch;

/// Complaint history page component
#[component]
pub fn HistoryPage() -> impl IntoView {
    let (items, set_items) = create_signal(Fetch::default());

    let load = move || {
        set_items.set(Fetch::Loading);
        spawn_local(async move {
            set_items.set(Fetch::from_result(api::fetch_history(DEFAULT_CITIZEN_ID).await));
        });
    };

    // Fetch once on mount
    create_effect(move |_| load());

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Your History"</h1>
                    <p class="text-gray-400 mt-1">"Questions you asked and where they were routed"</p>
                </div>
                <button
                    on:click=move |_| load()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                {move || match items.get() {
                    Fetch::Loading => view! { <Loading /> }.into_view(),
                    Fetch::Failed(message) => view! { <ErrorBanner message=message /> }.into_view(),
                    Fetch::Ready(items) if items.is_empty() => view! {
                        <p class="text-gray-400 text-sm">"No interactions yet. Ask the assistant to get started."</p>
                    }.into_view(),
                    Fetch::Ready(items) => items.into_iter().map(|item| {
                        let when = item.created_at.as_deref().map(humanize_timestamp);
                        view! {
                            <div class="border-b border-gray-700 last:border-0 py-4 space-y-2">
                                <div class="flex items-center justify-between">
                                    <p class="font-medium">{item.query}</p>
                                    {when.map(|when| view! {
                                        <span class="text-xs text-gray-500">{when}</span>
                                    })}
                                </div>
                                <p class="text-sm text-gray-300 whitespace-pre-wrap">{item.response}</p>
                                <span class="inline-block bg-gray-700 rounded-full px-2 py-1 text-xs text-gray-300">
                                    {format!("Confidence: {:.3}", item.confidence)}
                                </span>
                            </div>
                        }
                    }).collect_view(),
                }}
            </section>
        </div>
    }
}

/// Render a backend timestamp for display.
///
/// The backend usually sends naive ISO timestamps; offset-carrying forms are
/// accepted too, and anything that fails to parse is shown verbatim.
fn humanize_timestamp(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %d, %Y %H:%M").to_string();
    }
    match chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format("%b %d, %Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_backend_timestamp() {
        assert_eq!(
            humanize_timestamp("2024-05-01T10:12:03.412551"),
            "May 01, 2024 10:12"
        );
    }

    #[test]
    fn test_humanize_timestamp_without_fraction() {
        assert_eq!(humanize_timestamp("2024-12-31T23:59:59"), "Dec 31, 2024 23:59");
    }

    #[test]
    fn test_humanize_timestamp_with_offset() {
        assert_eq!(
            humanize_timestamp("2024-05-01T10:12:03+00:00"),
            "May 01, 2024 10:12"
        );
    }

    #[test]
    fn test_unparseable_timestamp_shown_verbatim() {
        assert_eq!(humanize_timestamp("yesterday"), "yesterday");
    }
}
