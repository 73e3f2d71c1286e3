//! Friends Page
//!
//! User search plus followers/following lists.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Loading;
use crate::state::global::{GlobalState, UserSummary};

#[derive(Clone, Copy, PartialEq)]
enum SocialTab {
    Followers,
    Following,
}

/// Friends page component
#[component]
pub fn FriendsPage() -> impl IntoView {
    let search_query = create_rw_signal(String::new());
    let search_results = create_rw_signal(Vec::<UserSummary>::new());
    let searching = create_rw_signal(false);
    let followers = create_rw_signal(Vec::<UserSummary>::new());
    let following = create_rw_signal(Vec::<UserSummary>::new());
    let loading = create_rw_signal(true);
    let (tab, set_tab) = create_signal(SocialTab::Following);

    create_effect(move |_| {
        spawn_local(async move {
            if let Ok(users) = api::fetch_followers().await {
                followers.set(users);
            }
            if let Ok(users) = api::fetch_following().await {
                following.set(users);
            }
            loading.set(false);
        });
    });

    let run_search = move || {
        let query = search_query.get_untracked();
        if query.trim().is_empty() {
            search_results.set(Vec::new());
            return;
        }
        searching.set(true);
        spawn_local(async move {
            match api::search_users(query.trim()).await {
                Ok(users) => search_results.set(users),
                Err(e) => {
                    web_sys::console::warn_1(&format!("User search failed: {}", e).into());
                }
            }
            searching.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Friends"</h1>
                <p class="text-gray-400 mt-1">"Find people and see what they're watching"</p>
            </div>

            // Search
            <div class="flex gap-2 max-w-md">
                <input
                    type="text"
                    placeholder="Search users..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| search_query.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            run_search();
                        }
                    }
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=move |_| run_search()
                    disabled=move || searching.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if searching.get() { "..." } else { "Search" }}
                </button>
            </div>

            // Search results
            {move || {
                let results = search_results.get();
                (!results.is_empty()).then(|| view! {
                    <section class="space-y-2">
                        <h2 class="text-lg font-semibold">"Results"</h2>
                        {results.into_iter().map(|user| view! {
                            <UserRow user=user />
                        }).collect_view()}
                    </section>
                })
            }}

            // Followers / following tabs
            <div class="flex space-x-2">
                <button
                    on:click=move |_| set_tab.set(SocialTab::Following)
                    class=move || tab_class(tab.get() == SocialTab::Following)
                >
                    {move || format!("Following ({})", following.get().len())}
                </button>
                <button
                    on:click=move |_| set_tab.set(SocialTab::Followers)
                    class=move || tab_class(tab.get() == SocialTab::Followers)
                >
                    {move || format!("Followers ({})", followers.get().len())}
                </button>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let (users, empty_message) = match tab.get() {
                    SocialTab::Following => (following.get(), "You aren't following anyone yet."),
                    SocialTab::Followers => (followers.get(), "No followers yet."),
                };

                if users.is_empty() {
                    view! {
                        <p class="text-gray-400 py-4">{empty_message}</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="space-y-2">
                            {users.into_iter().map(|user| view! {
                                <UserRow user=user />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

fn tab_class(active: bool) -> String {
    let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
    if active {
        format!("{} bg-gray-600 text-white", base)
    } else {
        format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
    }
}

/// One user row with a follow/unfollow action
#[component]
fn UserRow(user: UserSummary) -> impl IntoView {
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
        <div class="flex items-center justify-between bg-gray-800 rounded-xl p-4">
            <A href=format!("/users/{}", user.id) class="flex items-center space-x-3">
                <div class="w-10 h-10 rounded-full bg-gray-700 flex items-center justify-center">
                    "👤"
                </div>
                <div>
                    <div class="font-medium">{user.display_name.clone()}</div>
                    <div class="text-sm text-gray-400">
                        {format!("@{}", user.username)}
                        " · "
                        {move || format!("{} followers", followers_count.get())}
                    </div>
                </div>
            </A>
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
    }
}
