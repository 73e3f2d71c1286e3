//! Content Card Component
//!
//! Poster card for one movie or show, with the watched toggle that gates
//! entry into the comparison dialog.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AddToListDialog, ComparisonDialog};
use crate::state::global::{ContentItem, GlobalState};

/// Poster card for one content item
///
/// The watched flag shown here is a cached projection of repository state.
/// Toggling an unwatched item records the watch first and only opens the
/// comparison dialog when that succeeds; the flag itself is only set when
/// the dialog completes, never on dismissal.
#[component]
pub fn ContentCard(
    item: ContentItem,
    #[prop(default = false)] with_add_to_list: bool,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (is_watched, set_is_watched) = create_signal(item.watched);
    let show_comparison = create_rw_signal(false);
    let show_add_dialog = create_rw_signal(false);

    let content_id = item.id;
    let dialog_item = item.clone();
    let dialog_title = item.title.clone();

    let on_toggle = {
        let state = state.clone();
        move |_| {
            // Watched -> unwatched is trivial: flip locally, no dialog
            if is_watched.get() {
                set_is_watched.set(false);
                return;
            }

            // One open workflow per item; re-clicks while it runs are ignored
            if show_comparison.get() {
                return;
            }

            let state = state.clone();
            spawn_local(async move {
                match api::mark_watched(content_id).await {
                    Ok(()) => show_comparison.set(true),
                    Err(e) => state.show_error(&format!("Could not mark as watched: {}", e)),
                }
            });
        }
    };

    let on_complete = Callback::new(move |_| {
        set_is_watched.set(true);
        show_comparison.set(false);
    });

    view! {
        <div class="bg-gray-800 rounded-lg overflow-hidden w-[220px] flex flex-col">
            <div class="relative">
                <A href=format!("/title/{}", item.id)>
                    <img
                        src=item.image.clone()
                        alt=item.title.clone()
                        class="w-full h-[330px] object-cover aspect-[2/3]"
                    />
                </A>
                <div class="absolute top-2 right-2">
                    <span class="bg-black/70 text-white text-xs px-2 py-1 rounded flex items-center gap-1">
                        <span class="text-yellow-400">"★"</span>
                        {format!("{:.1}", item.rating)}
                    </span>
                </div>
                {move || {
                    is_watched.get().then(|| view! {
                        <div class="absolute top-2 left-2">
                            <span class="bg-green-600/90 text-white text-xs px-2 py-1 rounded">
                                "Watched"
                            </span>
                        </div>
                    })
                }}
            </div>

            <div class="p-3 flex-1">
                <div class="font-medium truncate">{item.title.clone()}</div>
                <div class="text-xs text-gray-400">{item.year}</div>
                <div class="mt-2 flex flex-wrap gap-1">
                    {item.platforms.iter().map(|platform| view! {
                        <span class="text-xs px-1 py-0 border border-gray-600 rounded text-gray-300">
                            {platform.clone()}
                        </span>
                    }).collect_view()}
                </div>
            </div>

            <div class="p-3 pt-0 flex gap-2">
                <button
                    on:click=on_toggle
                    class=move || {
                        let base = "flex-1 text-sm py-2 rounded-lg font-medium transition-colors";
                        if is_watched.get() {
                            format!("{} border border-gray-600 text-gray-300 hover:bg-gray-700", base)
                        } else {
                            format!("{} bg-primary-600 hover:bg-primary-700 text-white", base)
                        }
                    }
                >
                    {move || if is_watched.get() { "✓ Watched" } else { "Watch" }}
                </button>
                {with_add_to_list.then(|| view! {
                    <button
                        on:click=move |_| show_add_dialog.set(true)
                        class="px-3 py-2 border border-gray-600 rounded-lg text-gray-300
                               hover:bg-gray-700 text-sm transition-colors"
                    >
                        "+"
                    </button>
                })}
            </div>

            <ComparisonDialog
                content=dialog_item
                open=show_comparison
                on_complete=on_complete
            />
            {with_add_to_list.then(|| view! {
                <AddToListDialog
                    content_id=content_id
                    title=dialog_title
                    open=show_add_dialog
                />
            })}
        </div>
    }
}
