//! User Profile Page
//!
//! Another user's profile: bio, tastes, follow state, and their watched
//! and watchlist content.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{ContentCard, Loading};
use crate::state::global::{GlobalState, UserProfile};

/// User profile page component
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || {
        params.with(|p| {
            p.get("id")
                .and_then(|id| id.parse::<u64>().ok())
                .unwrap_or(0)
        })
    };

    let profile = create_rw_signal(None::<UserProfile>);
    let not_found = create_rw_signal(false);
    let loading = create_rw_signal(true);

    create_effect(move |_| {
        let id = user_id();
        loading.set(true);
        not_found.set(false);
        spawn_local(async move {
            match api::fetch_user_profile(id).await {
                Ok(fetched) => profile.set(Some(fetched)),
                Err(e) => {
                    web_sys::console::warn_1(&format!("Failed to fetch profile: {}", e).into());
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
                return view! { <ProfileNotFound /> }.into_view();
            }
            profile.get().map(|user| view! {
                <ProfileDetail user=user />
            }).into_view()
        }}
    }
}

/// Placeholder view for an unknown user
#[component]
fn ProfileNotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"👤"</div>
            <h1 class="text-3xl font-bold mb-2">"User Not Found"</h1>
            <p class="text-gray-400 mb-6">"This profile doesn't exist."</p>
            <A
                href="/friends"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back to Friends"
            </A>
        </div>
    }
}

#[component]
fn ProfileDetail(user: UserProfile) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (is_following, set_is_following) = create_signal(user.is_following);
    let (followers_count, set_followers_count) = create_signal(user.followers_count);
    let busy = create_rw_signal(false);

    let user_id = user.id;
    let toggle_follow = {
        let state = state.clone();
        move |_| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let unfollow = is_following.get_untracked();
            let state = state.clone();
            spawn_local(async move {
                let result = if unfollow {
                    api::unfollow_user(user_id).await
                } else {
                    api::follow_user(user_id).await
                };

                match result {
                    Ok(()) => {
                        set_is_following.set(!unfollow);
                        set_followers_count.update(|count| {
                            if unfollow {
                                *count = count.saturating_sub(1);
                            } else {
                                *count += 1;
                            }
                        });
                    }
                    Err(e) => state.show_error(&format!("Follow action failed: {}", e)),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="space-y-8">
            // Profile header
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-start justify-between">
                    <div class="flex items-center space-x-6">
                        <div class="w-20 h-20 rounded-full bg-gray-700 flex items-center justify-center text-4xl">
                            "👤"
                        </div>
                        <div>
                            <h1 class="text-2xl font-bold">{user.display_name.clone()}</h1>
                            <p class="text-gray-400">{format!("@{}", user.username)}</p>
                            <div class="flex space-x-6 mt-2 text-sm text-gray-400">
                                <span>
                                    <span class="text-white font-semibold">
                                        {move || followers_count.get()}
                                    </span>
                                    " followers"
                                </span>
                                <span>
                                    <span class="text-white font-semibold">{user.following_count}</span>
                                    " following"
                                </span>
                            </div>
                        </div>
                    </div>
                    <button
                        on:click=toggle_follow
                        disabled=move || busy.get()
                        class=move || {
                            let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                            if is_following.get() {
                                format!("{} border border-gray-600 text-gray-300 hover:bg-gray-700", base)
                            } else {
                                format!("{} bg-primary-600 hover:bg-primary-700 text-white", base)
                            }
                        }
                    >
                        {move || if is_following.get() { "Following" } else { "Follow" }}
                    </button>
                </div>

                {(!user.bio.is_empty()).then(|| view! {
                    <p class="text-gray-300 mt-4">{user.bio.clone()}</p>
                })}

                <div class="flex flex-wrap gap-4 mt-4 text-sm">
                    {(!user.favorite_genres.is_empty()).then(|| view! {
                        <div class="flex flex-wrap items-center gap-2">
                            <span class="text-gray-400">"Likes:"</span>
                            {user.favorite_genres.iter().map(|genre| view! {
                                <span class="px-2 py-1 bg-gray-700 rounded text-gray-300">
                                    {genre.clone()}
                                </span>
                            }).collect_view()}
                        </div>
                    })}
                    {(!user.streaming_platforms.is_empty()).then(|| view! {
                        <div class="flex flex-wrap items-center gap-2">
                            <span class="text-gray-400">"Watches on:"</span>
                            {user.streaming_platforms.iter().map(|platform| view! {
                                <span class="px-2 py-1 border border-gray-600 rounded text-gray-300">
                                    {platform.clone()}
                                </span>
                            }).collect_view()}
                        </div>
                    })}
                </div>
            </section>

            // Watched content
            <section>
                <h2 class="text-lg font-semibold mb-4">"Recently Watched"</h2>
                {if user.watched_content.is_empty() {
                    view! {
                        <p class="text-gray-400">"Nothing watched yet."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-wrap gap-4">
                            {user.watched_content.iter().cloned().map(|item| view! {
                                <ContentCard item=item />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </section>

            // Watchlist content
            <section>
                <h2 class="text-lg font-semibold mb-4">"Watchlist"</h2>
                {if user.watchlist_content.is_empty() {
                    view! {
                        <p class="text-gray-400">"Their watchlist is empty."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-wrap gap-4">
                            {user.watchlist_content.iter().cloned().map(|item| view! {
                                <ContentCard item=item />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }}
            </section>
        </div>
    }
}
