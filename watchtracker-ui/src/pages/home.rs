//! Home Page
//!
//! Landing view with trending, watchlist, watched, and recommended rows.

use leptos::*;

use crate::api;
use crate::components::{CardRowSkeleton, ContentCard};
use crate::filter;
use crate::state::global::ContentItem;

#[derive(Clone, Copy, PartialEq)]
enum HomeTab {
    Trending,
    Watchlist,
    Watched,
    ForYou,
}

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let trending = create_rw_signal(Vec::<ContentItem>::new());
    let watchlist = create_rw_signal(Vec::<ContentItem>::new());
    let watched = create_rw_signal(Vec::<ContentItem>::new());
    let recommended = create_rw_signal(Vec::<ContentItem>::new());
    let loading = create_rw_signal(true);
    let (tab, set_tab) = create_signal(HomeTab::Trending);

    // Fetch all four rows on mount. These are passive background fetches:
    // failures fall back to the built-in sample catalog (trending) or an
    // empty row, with no toast.
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_trending().await {
                Ok(items) => trending.set(items),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("Failed to fetch trending, using samples: {}", e).into(),
                    );
                    trending.set(filter::sample_content());
                }
            }

            if let Ok(items) = api::fetch_watchlist().await {
                watchlist.set(items);
            }
            if let Ok(items) = api::fetch_watched().await {
                watched.set(items);
            }
            if let Ok(items) = api::fetch_recommendations().await {
                recommended.set(items);
            }

            loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Hero section
            <section class="pt-6">
                <h1 class="text-3xl md:text-4xl font-extrabold leading-tight tracking-tighter">
                    "Welcome to WatchTracker"
                </h1>
                <p class="text-lg text-gray-400 mt-2">
                    "Your one-stop shop to track shows and movies across all streaming platforms."
                </p>
            </section>

            // Tab selector
            <div class="flex space-x-2">
                <TabButton label="Trending" current=tab target=HomeTab::Trending
                    on_click=move |_| set_tab.set(HomeTab::Trending) />
                <TabButton label="Watchlist" current=tab target=HomeTab::Watchlist
                    on_click=move |_| set_tab.set(HomeTab::Watchlist) />
                <TabButton label="Watched" current=tab target=HomeTab::Watched
                    on_click=move |_| set_tab.set(HomeTab::Watched) />
                <TabButton label="For You" current=tab target=HomeTab::ForYou
                    on_click=move |_| set_tab.set(HomeTab::ForYou) />
            </div>

            // Active row
            {move || {
                if loading.get() {
                    return view! { <CardRowSkeleton count=5 /> }.into_view();
                }

                let (items, empty_message) = match tab.get() {
                    HomeTab::Trending => (trending.get(), "Nothing is trending right now."),
                    HomeTab::Watchlist => (watchlist.get(), "Your watchlist is empty."),
                    HomeTab::Watched => (watched.get(), "You haven't watched anything yet."),
                    HomeTab::ForYou => (recommended.get(), "No recommendations yet. Watch something first!"),
                };

                if items.is_empty() {
                    view! {
                        <p class="text-gray-400 py-8">{empty_message}</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-wrap gap-4">
                            {items.into_iter().map(|item| view! {
                                <ContentCard item=item with_add_to_list=true />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<HomeTab>,
    target: HomeTab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}
