//! Discover Page
//!
//! Filterable catalog browsing. Filtering is server-side through the
//! discover endpoint; when the API is unreachable the same filters are
//! applied client-side over the built-in sample catalog. The whole filter
//! is reapplied whenever any field changes.

use leptos::*;

use crate::api;
use crate::components::{CardRowSkeleton, ContentCard};
use crate::filter::{self, FilterState};
use crate::state::global::ContentItem;

/// Genre options shown in the filter sidebar
const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "History",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
];

/// Platform options shown in the filter sidebar
const PLATFORMS: &[&str] = &[
    "Netflix",
    "HBO Max",
    "Prime Video",
    "Disney+",
    "Hulu",
    "Apple TV+",
];

/// Discover page component
#[component]
pub fn DiscoverPage() -> impl IntoView {
    let filters = create_rw_signal(FilterState::default());
    let results = create_rw_signal(Vec::<ContentItem>::new());
    let loading = create_rw_signal(true);

    // Refetch whenever any filter field changes
    create_effect(move |_| {
        let current = filters.get();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_discover(&current).await {
                Ok(items) => results.set(items),
                Err(e) => {
                    // Offline fallback: same predicates over the sample catalog
                    web_sys::console::warn_1(
                        &format!("Discover fetch failed, filtering locally: {}", e).into(),
                    );
                    results.set(filter::apply_filters(&filter::sample_content(), &current));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Discover"</h1>
                <p class="text-gray-400 mt-1">"Find your next favorite movie or show"</p>
            </div>

            <div class="grid lg:grid-cols-[280px_1fr] gap-8">
                <FilterSidebar filters=filters />

                <div>
                    {move || {
                        if loading.get() {
                            view! { <CardRowSkeleton count=4 /> }.into_view()
                        } else {
                            let items = results.get();
                            if items.is_empty() {
                                view! {
                                    <p class="text-gray-400 py-8">
                                        "Nothing matches these filters. Try widening them."
                                    </p>
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
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// Filter form sidebar
#[component]
fn FilterSidebar(filters: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <aside class="bg-gray-800 rounded-xl p-5 space-y-5 h-fit">
            // Text search
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Search"</label>
                <input
                    type="text"
                    placeholder="Title or platform..."
                    prop:value=move || filters.get().search
                    on:input=move |ev| {
                        filters.update(|f| f.search = event_target_value(&ev));
                    }
                    class="w-full bg-gray-700 rounded-lg px-3 py-2 text-sm text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Content type
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Type"</label>
                <select
                    on:change=move |ev| {
                        filters.update(|f| f.content_type = event_target_value(&ev));
                    }
                    prop:value=move || filters.get().content_type
                    class="w-full bg-gray-700 rounded-lg px-3 py-2 text-sm text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All Types"</option>
                    <option value="movie">"Movies"</option>
                    <option value="show">"TV Shows"</option>
                    <option value="documentary">"Documentaries"</option>
                    <option value="anime">"Anime"</option>
                </select>
            </div>

            // Single-select platform
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Platform"</label>
                <select
                    on:change=move |ev| {
                        filters.update(|f| f.platform = event_target_value(&ev));
                    }
                    prop:value=move || filters.get().platform
                    class="w-full bg-gray-700 rounded-lg px-3 py-2 text-sm text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    <option value="all">"All Platforms"</option>
                    {PLATFORMS.iter().map(|p| view! {
                        <option value=*p>{*p}</option>
                    }).collect_view()}
                </select>
            </div>

            // Genre multi-select
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Genres"</label>
                <div class="flex flex-wrap gap-2">
                    {GENRES.iter().map(|genre| {
                        let label = *genre;
                        let toggled = genre.to_string();
                        view! {
                            <button
                                on:click=move |_| {
                                    let genre = toggled.clone();
                                    filters.update(|f| {
                                        if let Some(pos) = f.genres.iter().position(|g| *g == genre) {
                                            f.genres.remove(pos);
                                        } else {
                                            f.genres.push(genre);
                                        }
                                    });
                                }
                                class=move || {
                                    let base = "px-2 py-1 rounded text-xs transition-colors";
                                    if filters.get().genres.iter().any(|g| g == label) {
                                        format!("{} bg-primary-600 text-white", base)
                                    } else {
                                        format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                                    }
                                }
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            // Minimum rating
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Minimum Rating: "
                    <span class="text-white font-medium">
                        {move || format!("{:.1}", filters.get().min_rating)}
                    </span>
                </label>
                <input
                    type="range"
                    min="0"
                    max="5"
                    step="0.5"
                    prop:value=move || filters.get().min_rating.to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            filters.update(|f| f.min_rating = v);
                        }
                    }
                    class="w-full"
                />
            </div>

            // Year range
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Years: "
                    <span class="text-white font-medium">
                        {move || {
                            let (lo, hi) = filters.get().year_range;
                            format!("{} – {}", lo, hi)
                        }}
                    </span>
                </label>
                <div class="flex gap-2">
                    <input
                        type="number"
                        min="1900"
                        max="2100"
                        prop:value=move || filters.get().year_range.0.to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                filters.update(|f| f.year_range.0 = v);
                            }
                        }
                        class="w-1/2 bg-gray-700 rounded-lg px-3 py-2 text-sm text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="number"
                        min="1900"
                        max="2100"
                        prop:value=move || filters.get().year_range.1.to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                filters.update(|f| f.year_range.1 = v);
                            }
                        }
                        class="w-1/2 bg-gray-700 rounded-lg px-3 py-2 text-sm text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            // Platform multi-select
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Available On"</label>
                <div class="space-y-1">
                    {PLATFORMS.iter().map(|platform| {
                        let label = *platform;
                        let toggled = platform.to_string();
                        view! {
                            <label class="flex items-center space-x-2 text-sm text-gray-300">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        filters.get().platforms.iter().any(|p| p == label)
                                    }
                                    on:change=move |_| {
                                        let platform = toggled.clone();
                                        filters.update(|f| {
                                            if let Some(pos) =
                                                f.platforms.iter().position(|p| *p == platform)
                                            {
                                                f.platforms.remove(pos);
                                            } else {
                                                f.platforms.push(platform);
                                            }
                                        });
                                    }
                                />
                                <span>{label}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            </div>

            // Runtime range
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Runtime (min): "
                    <span class="text-white font-medium">
                        {move || {
                            let (lo, hi) = filters.get().runtime_range;
                            format!("{} – {}", lo, hi)
                        }}
                    </span>
                </label>
                <div class="flex gap-2">
                    <input
                        type="number"
                        min="0"
                        max="600"
                        prop:value=move || filters.get().runtime_range.0.to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                filters.update(|f| f.runtime_range.0 = v);
                            }
                        }
                        class="w-1/2 bg-gray-700 rounded-lg px-3 py-2 text-sm text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="number"
                        min="0"
                        max="600"
                        prop:value=move || filters.get().runtime_range.1.to_string()
                        on:input=move |ev| {
                            if let Ok(v) = event_target_value(&ev).parse() {
                                filters.update(|f| f.runtime_range.1 = v);
                            }
                        }
                        class="w-1/2 bg-gray-700 rounded-lg px-3 py-2 text-sm text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            // Reset
            <button
                on:click=move |_| filters.set(FilterState::default())
                class="w-full py-2 border border-gray-600 rounded-lg text-sm text-gray-300
                       hover:bg-gray-700 transition-colors"
            >
                "Reset Filters"
            </button>
        </aside>
    }
}
