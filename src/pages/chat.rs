//! Assistant Page
//!
//! Guided intake form side by side with the free-form civic assistant.
//! Outgoing messages append optimistically; every send resolves to exactly
//! one assistant bubble, reply or error.

use leptos::*;

use crate::api;
use crate::components::{ChatBubble, IntakeForm, TypingIndicator};
use crate::state::conversation::{ChatEntry, Conversation};
use crate::state::voice;

/// Common grievances citizens can fire without typing
const QUICK_PROMPTS: [&str; 4] = [
    "No water supply in Rajajinagar since yesterday",
    "Streetlight not working near bus stand",
    "Garbage not collected for 3 days",
    "Frequent power outage in Indiranagar",
];

/// Assistant page component
#[component]
pub fn ChatPage() -> impl IntoView {
    let conversation = create_rw_signal(Conversation::default());
    let (query, set_query) = create_signal(String::new());
    let (in_flight, set_in_flight) = create_signal(0u32);

    let voice_supported = voice::supported();

    let send = move |text: String| {
        let outgoing = text.trim().to_string();
        if outgoing.is_empty() {
            return;
        }

        set_query.set(String::new());
        conversation.update(|c| c.push(ChatEntry::user(outgoing.clone())));
        set_in_flight.update(|n| *n += 1);

        spawn_local(async move {
            match api::send_chat(&outgoing).await {
                Ok(reply) => {
                    conversation.update(|c| c.push(ChatEntry::from_reply(&reply)));
                }
                Err(e) => {
                    conversation.update(|c| c.push(ChatEntry::assistant(e)));
                }
            }
            set_in_flight.update(|n| *n -= 1);
        });
    };

    let dictate_query = move |_| {
        voice::capture(move |text| {
            set_query.update(|query| {
                if !query.is_empty() {
                    query.push(' ');
                }
                query.push_str(&text);
            });
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Report an Issue"</h1>
                <p class="text-gray-400 mt-1">"File a structured complaint or ask the civic assistant"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8 items-start">
                <IntakeForm conversation=conversation />

                // Assistant panel
                <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-semibold">"Civic Assistant"</h2>
                        {voice_supported.then(|| view! {
                            <button
                                type="button"
                                on:click=dictate_query
                                class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                            >
                                "🎤 Voice query"
                            </button>
                        })}
                    </div>

                    // One-tap prompts
                    <div class="flex flex-wrap gap-2">
                        {QUICK_PROMPTS.into_iter().map(|prompt| view! {
                            <button
                                type="button"
                                on:click=move |_| send(prompt.to_string())
                                class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded-full text-xs transition-colors"
                            >
                                {prompt}
                            </button>
                        }).collect_view()}
                    </div>

                    // Message log
                    <div class="space-y-2 max-h-[30rem] overflow-y-auto pr-1">
                        {move || {
                            conversation.get().entries.into_iter().map(|entry| view! {
                                <ChatBubble entry=entry />
                            }).collect_view()
                        }}
                        {move || (in_flight.get() > 0).then(|| view! { <TypingIndicator /> })}
                    </div>

                    // Composer
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            placeholder="Ask a civic grievance question"
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    send(query.get());
                                }
                            }
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=move |_| send(query.get())
                            class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            "Send"
                        </button>
                    </div>
                </section>
            </div>
        </div>
    }
}
