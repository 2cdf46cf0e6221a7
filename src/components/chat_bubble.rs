//! Chat Bubble Component
//!
//! Renders one conversation entry: citizen messages right-aligned, the
//! assistant's on the left with routing chips when the reply carried them.

use leptos::*;

use crate::state::conversation::{ChatEntry, Sender};

/// A single message bubble
#[component]
pub fn ChatBubble(entry: ChatEntry) -> impl IntoView {
    let is_user = entry.sender == Sender::User;

    let bubble_class = if is_user {
        "max-w-xl ml-auto bg-primary-600 text-white rounded-2xl rounded-br-sm px-4 py-3"
    } else {
        "max-w-xl mr-auto bg-gray-700 text-gray-100 rounded-2xl rounded-bl-sm px-4 py-3"
    };

    view! {
        <div class=bubble_class>
            <p class="text-sm whitespace-pre-wrap">{entry.text}</p>

            // Routing details, only on replies that carried them
            {entry.meta.map(|meta| view! {
                <div class="flex flex-wrap gap-2 mt-3 text-xs">
                    <span class="bg-gray-800/60 rounded-full px-2 py-1">
                        {format!("Department: {}", meta.department)}
                    </span>
                    <span class="bg-gray-800/60 rounded-full px-2 py-1">
                        {format!("ETA: {}", meta.eta)}
                    </span>
                    <span class="bg-gray-800/60 rounded-full px-2 py-1">
                        {format!("Confidence: {}", meta.confidence_label())}
                    </span>
                </div>
            })}
        </div>
    }
}

/// Animated placeholder shown while a reply is in flight
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="max-w-xl mr-auto bg-gray-700 text-gray-400 rounded-2xl rounded-bl-sm px-4 py-3">
            <span class="animate-pulse text-sm">"Assistant is typing..."</span>
        </div>
    }
}
