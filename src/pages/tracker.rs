//! Tracker Page
//!
//! Ticket lookup with a three-stage journey timeline.

use leptos::*;

use crate::api;
use crate::components::{ErrorBanner, InlineLoading};
use crate::state::tracker::{stage_for, Lookup, TIMELINE};

/// Status tracker page component
#[component]
pub fn TrackerPage() -> impl IntoView {
    let (ticket, set_ticket) = create_signal(String::new());
    let (checking, set_checking) = create_signal(false);
    let (lookup, set_lookup) = create_signal(Lookup::Idle);

    let check = move || {
        let id = ticket.get().trim().to_string();
        if id.is_empty() {
            return;
        }

        set_checking.set(true);

        spawn_local(async move {
            match api::fetch_status(&id).await {
                Ok(report) => set_lookup.set(Lookup::Found(report)),
                Err(e) => set_lookup.set(Lookup::Missing(e)),
            }
            set_checking.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Status Tracker"</h1>
                <p class="text-gray-400 mt-1">"Follow your complaint through the resolution pipeline"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                // Lookup input
                <div class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="Enter ticket ID (e.g., CIV-AB12CD34EF)"
                        prop:value=move || ticket.get()
                        on:input=move |ev| set_ticket.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                check();
                            }
                        }
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=move |_| check()
                        disabled=move || checking.get()
                        class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if checking.get() {
                            view! { <InlineLoading /> }.into_view()
                        } else {
                            view! { "Track" }.into_view()
                        }}
                    </button>
                </div>

                // Lookup outcome
                {move || match lookup.get() {
                    Lookup::Idle => view! {
                        <p class="text-gray-400 text-sm">
                            "Your ticket ID was issued when the complaint was registered."
                        </p>
                    }.into_view(),
                    Lookup::Missing(message) => view! {
                        <ErrorBanner message=message />
                    }.into_view(),
                    Lookup::Found(report) => {
                        let active = stage_for(&report.status);
                        view! {
                            <div class="space-y-4">
                                // Ticket facts
                                <div class="grid md:grid-cols-2 gap-3">
                                    <DetailCard label="Ticket" value=report.ticket_id.clone() />
                                    <DetailCard label="Department" value=report.department.clone() />
                                    <DetailCard
                                        label="Current status"
                                        value=report.status.to_uppercase()
                                    />
                                    <DetailCard
                                        label="SLA"
                                        value=format!("{} hours", report.sla_hours)
                                    />
                                </div>

                                // Journey timeline
                                <div class="border border-gray-700 rounded-xl p-4">
                                    <p class="text-xs uppercase tracking-wide text-gray-400 mb-4">
                                        "Ticket Journey"
                                    </p>
                                    <div class="space-y-4">
                                        {TIMELINE.iter().map(|stage| {
                                            let done = stage.number <= active;
                                            view! {
                                                <div class="flex items-start space-x-3">
                                                    <div class=if done {
                                                        "h-7 w-7 rounded-full flex items-center justify-center \
                                                         text-xs font-bold bg-green-500 text-gray-900"
                                                    } else {
                                                        "h-7 w-7 rounded-full flex items-center justify-center \
                                                         text-xs font-bold bg-gray-700 text-gray-400"
                                                    }>
                                                        {if done { "✓".to_string() } else { stage.number.to_string() }}
                                                    </div>
                                                    <div>
                                                        <p class=if done { "font-semibold" } else { "font-semibold text-gray-500" }>
                                                            {stage.title}
                                                        </p>
                                                        <p class="text-xs text-gray-400">{stage.subtitle}</p>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </div>
                            </div>
                        }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// One labeled fact about the ticket
#[component]
fn DetailCard(
    label: &'static str,
    #[prop(into)] value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-900/60 rounded-lg px-4 py-3 text-sm">
            <span class="text-gray-400">{label}": "</span>
            <span class="text-primary-300 font-medium">{value}</span>
        </div>
    }
}
