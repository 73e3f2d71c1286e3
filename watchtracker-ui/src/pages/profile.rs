//! Profile Page
//!
//! The signed-in user's own profile: watchlists, watched movies, and
//! watched shows.

use leptos::*;

use crate::api;
use crate::components::{ContentCard, Loading};
use crate::state::global::{ContentItem, ListSummary};

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Watchlists,
    Movies,
    Shows,
}

/// Profile page component
#[component]
pub fn ProfilePage() -> impl IntoView {
    let lists = create_rw_signal(Vec::<ListSummary>::new());
    let watched = create_rw_signal(Vec::<ContentItem>::new());
    let loading = create_rw_signal(true);
    let (tab, set_tab) = create_signal(ProfileTab::Watchlists);

    create_effect(move |_| {
        spawn_local(async move {
            if let Ok(fetched) = api::fetch_user_lists().await {
                lists.set(fetched);
            }
            if let Ok(fetched) = api::fetch_watched().await {
                watched.set(fetched);
            }
            loading.set(false);
        });
    });

    let watched_movies = move || {
        watched
            .get()
            .into_iter()
            .filter(|item| item.content_type == "movie")
            .collect::<Vec<_>>()
    };
    let watched_shows = move || {
        watched
            .get()
            .into_iter()
            .filter(|item| item.content_type != "movie")
            .collect::<Vec<_>>()
    };

    view! {
        <div class="space-y-8">
            // Profile header with stats
            <section class="bg-gray-800 rounded-xl p-6 flex items-center space-x-6">
                <div class="w-20 h-20 rounded-full bg-gray-700 flex items-center justify-center text-4xl">
                    "🍿"
                </div>
                <div>
                    <h1 class="text-2xl font-bold">"Your Profile"</h1>
                    <div class="flex space-x-6 mt-2 text-sm text-gray-400">
                        <span>
                            <span class="text-white font-semibold">
                                {move || watched.get().len()}
                            </span>
                            " watched"
                        </span>
                        <span>
                            <span class="text-white font-semibold">
                                {move || lists.get().len()}
                            </span>
                            " lists"
                        </span>
                    </div>
                </div>
            </section>

            // Tab selector
            <div class="flex space-x-2">
                <TabButton label="Watchlists" current=tab target=ProfileTab::Watchlists
                    on_click=move |_| set_tab.set(ProfileTab::Watchlists) />
                <TabButton label="Movies" current=tab target=ProfileTab::Movies
                    on_click=move |_| set_tab.set(ProfileTab::Movies) />
                <TabButton label="Shows" current=tab target=ProfileTab::Shows
                    on_click=move |_| set_tab.set(ProfileTab::Shows) />
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                match tab.get() {
                    ProfileTab::Watchlists => {
                        let user_lists = lists.get();
                        if user_lists.is_empty() {
                            view! {
                                <p class="text-gray-400 py-8">
                                    "No lists yet. Add something to a list to get started."
                                </p>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {user_lists.into_iter().map(|list| view! {
                                        <div class="bg-gray-800 rounded-xl p-5">
                                            <h3 class="font-semibold">{list.name}</h3>
                                            <p class="text-sm text-gray-400 mt-1">
                                                {format!("{} items", list.content_count)}
                                            </p>
                                        </div>
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                    ProfileTab::Movies => content_grid(watched_movies(), "No watched movies yet."),
                    ProfileTab::Shows => content_grid(watched_shows(), "No watched shows yet."),
                }
            }}
        </div>
    }
}

fn content_grid(items: Vec<ContentItem>, empty_message: &'static str) -> View {
    if items.is_empty() {
        view! {
            <p class="text-gray-400 py-8">{empty_message}</p>
        }
        .into_view()
    } else {
        view! {
            <div class="flex flex-wrap gap-4">
                {items.into_iter().map(|item| view! {
                    <ContentCard item=item />
                }).collect_view()}
            </div>
        }
        .into_view()
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<ProfileTab>,
    target: ProfileTab,
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
