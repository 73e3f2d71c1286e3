//! Title Detail Page
//!
//! Full detail view for one content item, with the same watched toggle and
//! list workflow as the cards. An unknown id renders a placeholder view
//! rather than an error page.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AddToListDialog, ComparisonDialog, Loading};
use crate::state::global::{ContentItem, GlobalState};

/// Title detail page component
#[component]
pub fn TitlePage() -> impl IntoView {
    let params = use_params_map();
    let content_id = move || {
        params.with(|p| {
            p.get("id")
                .and_then(|id| id.parse::<u64>().ok())
                .unwrap_or(0)
        })
    };

    let content = create_rw_signal(None::<ContentItem>);
    let not_found = create_rw_signal(false);
    let loading = create_rw_signal(true);

    create_effect(move |_| {
        let id = content_id();
        loading.set(true);
        not_found.set(false);
        spawn_local(async move {
            match api::fetch_content(id).await {
                Ok(item) => content.set(Some(item)),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Failed to fetch content: {}", e).into());
                    not_found.set(true);
                }
            }
            loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <Loading /> }.into_view();
            }
            if not_found.get() {
                return view! { <TitleNotFound /> }.into_view();
            }
            content.get().map(|item| view! {
                <TitleDetail item=item />
            }).into_view()
        }}
    }
}

/// Placeholder view for an unknown title
#[component]
fn TitleNotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🎞️"</div>
            <h1 class="text-3xl font-bold mb-2">"Title Not Found"</h1>
            <p class="text-gray-400 mb-6">"We couldn't find that movie or show."</p>
            <A
                href="/discover"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Browse Discover"
            </A>
        </div>
    }
}

#[component]
fn TitleDetail(item: ContentItem) -> impl IntoView {
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
            if is_watched.get() {
                set_is_watched.set(false);
                return;
            }
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
        <div class="grid md:grid-cols-[300px_1fr] gap-8">
            // Poster
            <img
                src=item.image.clone()
                alt=item.title.clone()
                class="w-full rounded-xl object-cover aspect-[2/3]"
            />

            // Details
            <div class="space-y-4">
                <div>
                    <h1 class="text-3xl font-bold">{item.title.clone()}</h1>
                    <div class="flex items-center space-x-3 mt-2 text-sm text-gray-400">
                        <span class="text-yellow-400">{format!("★ {:.1}", item.rating)}</span>
                        <span>{item.year}</span>
                        <span class="capitalize">{item.content_type.clone()}</span>
                        {item.runtime_minutes.map(|minutes| view! {
                            <span>{format!("{} min", minutes)}</span>
                        })}
                    </div>
                </div>

                <div class="flex flex-wrap gap-2">
                    {item.genres.iter().map(|genre| view! {
                        <span class="px-2 py-1 bg-gray-800 rounded text-sm text-gray-300">
                            {genre.clone()}
                        </span>
                    }).collect_view()}
                </div>

                {(!item.description.is_empty()).then(|| view! {
                    <p class="text-gray-300 leading-relaxed">{item.description.clone()}</p>
                })}

                <div>
                    <h2 class="text-sm text-gray-400 mb-2">"Available on"</h2>
                    <div class="flex flex-wrap gap-2">
                        {item.platforms.iter().map(|platform| view! {
                            <span class="px-3 py-1 border border-gray-600 rounded-lg text-sm text-gray-300">
                                {platform.clone()}
                            </span>
                        }).collect_view()}
                    </div>
                </div>

                // Actions
                <div class="flex gap-3 pt-2">
                    <button
                        on:click=on_toggle
                        class=move || {
                            let base = "px-6 py-3 rounded-lg font-medium transition-colors";
                            if is_watched.get() {
                                format!("{} border border-gray-600 text-gray-300 hover:bg-gray-700", base)
                            } else {
                                format!("{} bg-primary-600 hover:bg-primary-700 text-white", base)
                            }
                        }
                    >
                        {move || if is_watched.get() { "✓ Watched" } else { "Mark as Watched" }}
                    </button>
                    <button
                        on:click=move |_| show_add_dialog.set(true)
                        class="px-6 py-3 border border-gray-600 rounded-lg text-gray-300
                               hover:bg-gray-700 font-medium transition-colors"
                    >
                        "Add to Watchlist"
                    </button>
                </div>
            </div>

            <ComparisonDialog
                content=dialog_item
                open=show_comparison
                on_complete=on_complete
            />
            <AddToListDialog
                content_id=content_id
                title=dialog_title
                open=show_add_dialog
            />
        </div>
    }
}
