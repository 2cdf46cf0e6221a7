//! Guided Intake Form
//!
//! Structured complaint form: name, problem, optional location, a live
//! geolocation fix, and evidence uploads. Successful submissions and
//! failures both land in the shared conversation as assistant messages.

use leptos::*;

use crate::api;
use crate::state::conversation::{ChatEntry, Conversation};
use crate::state::geo;
use crate::state::intake::IntakeDraft;
use crate::state::voice;

/// Guided intake panel, wired into the assistant conversation
#[component]
pub fn IntakeForm(conversation: RwSignal<Conversation>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (problem, set_problem) = create_signal(String::new());
    let (location, set_location) = create_signal(String::new());
    let (coords, set_coords) = create_signal(None::<geo::GeoPoint>);
    let (image, set_image) = create_signal(None::<web_sys::File>);
    let (attachments, set_attachments) = create_signal(Vec::<web_sys::File>::new());
    let (submitting, set_submitting) = create_signal(false);
    let (ticket, set_ticket) = create_signal(None::<crate::api::IntakeReceipt>);
    let (notice, set_notice) = create_signal(None::<String>);

    let voice_supported = voice::supported();

    // Ask for a location fix once on mount; the form works without one
    create_effect(move |_| {
        geo::locate(move |fix| set_coords.set(fix));
    });

    // Transient feedback, auto-cleared after a few seconds
    let show_notice = move |text: &str| {
        set_notice.set(Some(text.to_string()));
        gloo_timers::callback::Timeout::new(3000, move || {
            set_notice.set(None);
        })
        .forget();
    };

    let refresh_location = move |_| {
        geo::locate(move |fix| {
            set_coords.set(fix);
            if fix.is_some() {
                show_notice("Live location updated");
            }
        });
    };

    let dictate_problem = move |_| {
        voice::capture(move |text| {
            set_problem.update(|problem| {
                if !problem.is_empty() {
                    problem.push(' ');
                }
                problem.push_str(&text);
            });
        });
    };

    let on_image_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        set_image.set(input.files().and_then(|files| files.get(0)));
    };

    let on_attachments_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let mut selected = Vec::new();
        if let Some(files) = input.files() {
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    selected.push(file);
                }
            }
        }
        set_attachments.set(selected);
    };

    let submittable = move || {
        !name.get().trim().is_empty() && !problem.get().trim().is_empty()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = IntakeDraft {
            name: name.get(),
            problem: problem.get(),
            location: location.get(),
            coords: coords.get(),
        };

        if !draft.is_submittable() {
            return;
        }

        set_submitting.set(true);

        let form = match build_form_data(&draft, image.get(), attachments.get()) {
            Ok(form) => form,
            Err(message) => {
                conversation.update(|c| c.push(ChatEntry::assistant(message)));
                set_submitting.set(false);
                return;
            }
        };

        spawn_local(async move {
            match api::submit_intake(form).await {
                Ok(receipt) => {
                    conversation.update(|c| {
                        c.push(ChatEntry::user(draft.summary()));
                        c.push(ChatEntry::from_receipt(&receipt));
                    });
                    set_ticket.set(Some(receipt));
                }
                Err(e) => {
                    conversation.update(|c| c.push(ChatEntry::assistant(e)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">"Guided Intake"</h2>

            <form on:submit=on_submit class="space-y-4">
                <input
                    type="text"
                    placeholder="1) Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                <textarea
                    placeholder="2) Describe the issue"
                    prop:value=move || problem.get()
                    on:input=move |ev| set_problem.set(event_target_value(&ev))
                    class="w-full min-h-24 bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                // Capture helpers
                <div class="flex flex-wrap gap-2">
                    {voice_supported.then(|| view! {
                        <button
                            type="button"
                            on:click=dictate_problem
                            class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                        >
                            "🎙️ Dictate the issue"
                        </button>
                    })}
                    <button
                        type="button"
                        on:click=refresh_location
                        class="px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                    >
                        "📍 Refresh live location"
                    </button>
                </div>

                <input
                    type="text"
                    placeholder="3) Area / landmark"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />

                // Evidence uploads
                <label class="block bg-gray-700 hover:bg-gray-600 rounded-lg px-4 py-3 text-sm
                              cursor-pointer transition-colors">
                    "📷 Upload or capture an issue photo"
                    <input
                        type="file"
                        accept="image/*"
                        capture="environment"
                        class="hidden"
                        on:change=on_image_change
                    />
                </label>
                <label class="block bg-gray-700 hover:bg-gray-600 rounded-lg px-4 py-3 text-sm
                              cursor-pointer transition-colors">
                    "📎 Attach supporting files"
                    <input type="file" multiple class="hidden" on:change=on_attachments_change />
                </label>

                // Capture summary
                <div class="text-xs text-gray-400 space-y-1">
                    {move || notice.get().map(|text| view! {
                        <p class="text-green-300">{text}</p>
                    })}
                    {move || match coords.get() {
                        Some(point) => view! {
                            <p>{format!("Live location: {}", point.label())}</p>
                        }.into_view(),
                        None => view! {
                            <p>"Live location unavailable (permission denied or unsupported)."</p>
                        }.into_view(),
                    }}
                    {move || image.get().map(|file| view! {
                        <p>{format!("Image: {}", file.name())}</p>
                    })}
                    {move || {
                        let files = attachments.get();
                        (!files.is_empty()).then(|| {
                            let names: Vec<_> = files.iter().map(|f| f.name()).collect();
                            view! { <p>{format!("Attachments: {}", names.join(", "))}</p> }
                        })
                    }}
                </div>

                // Submit button
                <button
                    type="submit"
                    disabled=move || submitting.get() || !submittable()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <div class="loading-spinner w-5 h-5" />
                            <span>"Submitting..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Submit complaint"</span>
                        }.into_view()
                    }}
                </button>
            </form>

            // Latest ticket confirmation
            {move || ticket.get().map(|receipt| view! {
                <div class="bg-green-900/40 border border-green-700 text-green-200 rounded-lg
                            px-4 py-3 text-sm">
                    "Ticket " <span class="font-semibold">{receipt.ticket_id.clone()}</span>
                    " created and routed to " <span class="font-semibold">{receipt.detected_department.clone()}</span> "."
                </div>
            })}
        </section>
    }
}

/// Assemble the multipart body: draft fields first, then evidence files
fn build_form_data(
    draft: &IntakeDraft,
    image: Option<web_sys::File>,
    attachments: Vec<web_sys::File>,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new()
        .map_err(|_| "Could not assemble the complaint form".to_string())?;

    for (key, value) in draft.form_fields() {
        form.append_with_str(key, &value)
            .map_err(|_| "Could not assemble the complaint form".to_string())?;
    }

    if let Some(file) = image {
        form.append_with_blob_and_filename("image", &file, &file.name())
            .map_err(|_| "Could not attach the photo".to_string())?;
    }

    for file in attachments {
        form.append_with_blob_and_filename("attachments", &file, &file.name())
            .map_err(|_| "Could not attach a supporting file".to_string())?;
    }

    Ok(form)
}
