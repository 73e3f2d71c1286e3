//! Add-to-List Dialog Component
//!
//! Attaches one content item to an existing list, or creates a new list
//! with the item already in it (one server-side operation).

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, ListSummary};

/// Modal dialog for adding content to a list
///
/// The target is an existing list XOR a new list name; with neither set the
/// submit is a silent no-op. Success closes the dialog and resets the form;
/// failure keeps it open so the same input can be retried.
#[component]
pub fn AddToListDialog(
    content_id: u64,
    #[prop(into)] title: String,
    open: RwSignal<bool>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let lists = create_rw_signal(Vec::<ListSummary>::new());
    let selected = create_rw_signal(String::new());
    let new_mode = create_rw_signal(false);
    let new_name = create_rw_signal(String::new());
    let submitting = create_rw_signal(false);

    // Populate the list selector whenever the dialog opens. This is a
    // passive fetch: failure leaves the selector empty rather than raising
    // a toast.
    create_effect(move |_| {
        if !open.get() {
            return;
        }
        spawn_local(async move {
            match api::fetch_user_lists().await {
                Ok(fetched) => lists.set(fetched),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Failed to fetch lists: {}", e).into());
                }
            }
        });
    });

    let reset_form = move || {
        selected.set(String::new());
        new_name.set(String::new());
        new_mode.set(false);
    };

    let on_submit = {
        let state = state.clone();
        let title = title.clone();
        move |_| {
            if submitting.get_untracked() {
                return;
            }

            // Exactly one target: an existing list id or a non-blank new name
            let existing: Option<u64> = if new_mode.get_untracked() {
                None
            } else {
                selected.get_untracked().parse().ok()
            };
            let created_name = if new_mode.get_untracked() {
                let name = new_name.get_untracked();
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            } else {
                None
            };

            enum Target {
                Existing(u64),
                New(String),
            }

            let target = match (existing, created_name) {
                (Some(list_id), None) => Target::Existing(list_id),
                (None, Some(name)) => Target::New(name),
                _ => return,
            };

            submitting.set(true);
            let state = state.clone();
            let title = title.clone();
            spawn_local(async move {
                let result = match &target {
                    Target::Existing(list_id) => api::add_to_list(content_id, *list_id).await,
                    Target::New(name) => api::create_list_with_content(name, content_id)
                        .await
                        .map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        let message = match &target {
                            Target::New(name) => {
                                format!("\"{}\" added to new list \"{}\"", title, name)
                            }
                            Target::Existing(_) => format!("\"{}\" added to list", title),
                        };
                        state.show_success(&message);
                        reset_form();
                        open.set(false);
                    }
                    Err(e) => {
                        // Dialog stays open for retry with the same input
                        state.show_error(&format!("Failed to add to list: {}", e));
                    }
                }
                submitting.set(false);
            });
        }
    };

    view! {
        {move || {
            open.get().then(|| {
                let on_submit = on_submit.clone();
                let title = title.clone();

                view! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60">
                        <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4">
                            <h2 class="text-xl font-semibold">"Add to List"</h2>
                            <p class="text-sm text-gray-400 mt-1">
                                {format!("Add \"{}\" to one of your lists or create a new list.", title)}
                            </p>

                            <div class="py-4">
                                {move || {
                                    if new_mode.get() {
                                        view! {
                                            <div>
                                                <label class="block text-sm text-gray-400 mb-2">
                                                    "New List"
                                                </label>
                                                <input
                                                    type="text"
                                                    placeholder="Enter list name"
                                                    prop:value=move || new_name.get()
                                                    on:input=move |ev| new_name.set(event_target_value(&ev))
                                                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                                           border border-gray-600 focus:border-primary-500
                                                           focus:outline-none"
                                                />
                                            </div>
                                        }.into_view()
                                    } else {
                                        view! {
                                            <div>
                                                <label class="block text-sm text-gray-400 mb-2">
                                                    "List"
                                                </label>
                                                <select
                                                    on:change=move |ev| selected.set(event_target_value(&ev))
                                                    prop:value=move || selected.get()
                                                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                                           border border-gray-600 focus:border-primary-500
                                                           focus:outline-none"
                                                >
                                                    <option value="">"Select a list"</option>
                                                    {move || {
                                                        lists.get().into_iter().map(|list| view! {
                                                            <option value=list.id.to_string()>
                                                                {format!("{} ({} items)", list.name, list.content_count)}
                                                            </option>
                                                        }).collect_view()
                                                    }}
                                                </select>
                                                <button
                                                    on:click=move |_| new_mode.set(true)
                                                    class="mt-2 text-sm text-primary-400 hover:text-primary-300"
                                                >
                                                    "+ Create New List"
                                                </button>
                                            </div>
                                        }.into_view()
                                    }
                                }}
                            </div>

                            <div class="flex justify-between items-center">
                                {move || {
                                    new_mode.get().then(|| view! {
                                        <button
                                            on:click=move |_| new_mode.set(false)
                                            class="px-4 py-2 border border-gray-600 rounded-lg
                                                   text-gray-300 hover:bg-gray-700 text-sm
                                                   transition-colors"
                                        >
                                            "Back to Lists"
                                        </button>
                                    })
                                }}
                                <div class="flex gap-2 ml-auto">
                                    <button
                                        on:click=move |_| { open.set(false); }
                                        class="px-4 py-2 border border-gray-600 rounded-lg text-gray-300
                                               hover:bg-gray-700 text-sm transition-colors"
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        on:click=on_submit
                                        disabled=move || submitting.get()
                                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700
                                               disabled:bg-gray-600 rounded-lg text-sm font-medium
                                               transition-colors"
                                    >
                                        {move || if submitting.get() { "Adding..." } else { "Add to List" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
