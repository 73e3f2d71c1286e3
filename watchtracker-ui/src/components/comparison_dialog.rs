//! Comparison Dialog Component
//!
//! Runs up to three sequential pairwise comparisons between a newly-watched
//! item and previously-watched candidates, submitting each outcome before
//! the next round is shown. Dismissing the dialog cancels the workflow
//! without invoking the completion callback; already-submitted rounds stay
//! submitted.

use leptos::*;

use crate::api;
use crate::state::global::{ContentItem, GlobalState};

/// Upper bound on comparison rounds per dialog
const MAX_ROUNDS: usize = 3;

/// Modal dialog driving the pairwise comparison rounds
///
/// Opens in a loading state while candidates are fetched. Zero candidates
/// (or a failed fetch) complete the workflow immediately so the caller's
/// watched flag still gets set. A round only advances once its submission
/// has resolved; a failed submission keeps the round on screen for retry.
#[component]
pub fn ComparisonDialog(
    content: ContentItem,
    open: RwSignal<bool>,
    #[prop(into)] on_complete: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let candidates = create_rw_signal(Vec::<ContentItem>::new());
    let round = create_rw_signal(0usize);
    let loading = create_rw_signal(false);
    let submitting = create_rw_signal(false);

    let content_id = content.id;

    // Fetch candidates whenever the dialog opens
    create_effect(move |_| {
        if !open.get() {
            return;
        }

        candidates.set(Vec::new());
        round.set(0);
        loading.set(true);

        spawn_local(async move {
            let result = api::fetch_comparison_candidates(content_id).await;

            // The dialog may have been dismissed while the fetch was in
            // flight; a stale result must not complete the workflow
            if !open.get_untracked() {
                return;
            }

            loading.set(false);
            match result {
                Ok(items) if items.is_empty() => {
                    // Nothing to compare against: complete immediately
                    open.set(false);
                    on_complete.call(());
                }
                Ok(items) => candidates.set(items),
                Err(e) => {
                    // A failed fetch is treated as an empty sample
                    web_sys::console::warn_1(
                        &format!("Failed to fetch comparison candidates: {}", e).into(),
                    );
                    open.set(false);
                    on_complete.call(());
                }
            }
        });
    });

    let total_rounds = move || candidates.get().len().min(MAX_ROUNDS);
    let progress = move || {
        let total = total_rounds();
        if total == 0 {
            0.0
        } else {
            round.get() as f64 / total as f64 * 100.0
        }
    };

    // Resolve the active round; "skip" counts as preferring the candidate
    let choose = {
        let state = state.clone();
        move |preferred: &'static str| {
            if submitting.get_untracked() {
                return;
            }

            let r = round.get_untracked();
            let total = candidates.get_untracked().len().min(MAX_ROUNDS);
            let Some(candidate) = candidates.get_untracked().get(r).cloned() else {
                return;
            };

            submitting.set(true);
            let state = state.clone();
            spawn_local(async move {
                let result = api::submit_comparison(content_id, candidate.id, preferred).await;

                if !open.get_untracked() {
                    submitting.set(false);
                    return;
                }

                match result {
                    Ok(()) => {
                        if r + 1 >= total {
                            open.set(false);
                            on_complete.call(());
                            // Settle delay before resetting for display reuse
                            gloo_timers::callback::Timeout::new(300, move || {
                                round.set(0);
                            })
                            .forget();
                        } else {
                            round.set(r + 1);
                        }
                    }
                    Err(e) => {
                        // Round not advanced; the same choice can be retried
                        state.show_error(&format!("Could not save comparison: {}", e));
                    }
                }
                submitting.set(false);
            });
        }
    };

    let choose_new = choose.clone();
    let choose_existing = choose.clone();
    let choose_skip = choose;

    let new_title = content.title.clone();
    let new_image = content.image.clone();
    let new_rating = content.rating;
    let new_year = content.year;
    let new_platforms = content.platforms.clone();

    view! {
        {move || {
            open.get().then(|| {
                let new_title = new_title.clone();
                let new_image = new_image.clone();
                let new_platforms = new_platforms.clone();
                let choose_new = choose_new.clone();
                let choose_existing = choose_existing.clone();
                let choose_skip = choose_skip.clone();

                view! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/60">
                        <div class="bg-gray-800 rounded-xl p-6 w-full max-w-2xl mx-4">
                            // Header
                            <h2 class="text-xl font-semibold">"Compare Content"</h2>
                            <p class="text-sm text-gray-400 mt-1">
                                "Which did you enjoy more? This helps rank your watched content."
                            </p>

                            {move || {
                                if loading.get() {
                                    view! {
                                        <div class="py-12 flex justify-center">
                                            <div class="loading-spinner w-8 h-8" />
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {
                                        // Round counter and progress bar
                                        <div class="py-4">
                                            <div class="flex justify-between items-center mb-2">
                                                <span class="text-sm text-gray-400">
                                                    {move || format!(
                                                        "Round {} of {}",
                                                        (round.get() + 1).min(total_rounds().max(1)),
                                                        total_rounds()
                                                    )}
                                                </span>
                                                <span class="text-sm font-medium">
                                                    {move || format!("{:.0}%", progress())}
                                                </span>
                                            </div>
                                            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                                                <div
                                                    class="h-full bg-primary-600 transition-all"
                                                    style=move || format!("width: {}%", progress())
                                                />
                                            </div>
                                        </div>
                                    }.into_view()
                                }
                            }}

                            <div class="grid grid-cols-2 gap-8">
                                // Left: the newly-watched item
                                <div class="flex flex-col items-center">
                                    <img
                                        src=new_image.clone()
                                        alt=new_title.clone()
                                        class="w-[180px] rounded-md object-cover aspect-[2/3] mb-4"
                                    />
                                    <h3 class="font-medium text-lg text-center">{new_title.clone()}</h3>
                                    <p class="text-sm text-gray-400">{new_year}</p>
                                    <div class="mt-2 flex flex-wrap justify-center gap-1">
                                        <span class="text-xs text-yellow-400">
                                            {format!("★ {:.1}", new_rating)}
                                        </span>
                                        {new_platforms.iter().map(|p| view! {
                                            <span class="text-xs px-1 border border-gray-600 rounded text-gray-300">
                                                {p.clone()}
                                            </span>
                                        }).collect_view()}
                                    </div>
                                    <button
                                        on:click=move |_| choose_new("new")
                                        disabled=move || submitting.get() || loading.get()
                                        class="mt-4 w-full bg-primary-600 hover:bg-primary-700
                                               disabled:bg-gray-600 rounded-lg py-2 font-medium
                                               transition-colors"
                                    >
                                        "I preferred this"
                                    </button>
                                </div>

                                // Right: the current candidate
                                {move || {
                                    let choose_existing = choose_existing.clone();
                                    candidates.get().get(round.get()).cloned().map(|candidate| view! {
                                        <div class="flex flex-col items-center">
                                            <img
                                                src=candidate.image.clone()
                                                alt=candidate.title.clone()
                                                class="w-[180px] rounded-md object-cover aspect-[2/3] mb-4"
                                            />
                                            <h3 class="font-medium text-lg text-center">
                                                {candidate.title.clone()}
                                            </h3>
                                            <p class="text-sm text-gray-400">{candidate.year}</p>
                                            <div class="mt-2 flex flex-wrap justify-center gap-1">
                                                <span class="text-xs text-yellow-400">
                                                    {format!("★ {:.1}", candidate.rating)}
                                                </span>
                                                {candidate.platforms.iter().map(|p| view! {
                                                    <span class="text-xs px-1 border border-gray-600 rounded text-gray-300">
                                                        {p.clone()}
                                                    </span>
                                                }).collect_view()}
                                            </div>
                                            <button
                                                on:click=move |_| choose_existing("existing")
                                                disabled=move || submitting.get()
                                                class="mt-4 w-full bg-primary-600 hover:bg-primary-700
                                                       disabled:bg-gray-600 rounded-lg py-2 font-medium
                                                       transition-colors"
                                            >
                                                "I preferred this"
                                            </button>
                                        </div>
                                    })
                                }}
                            </div>

                            // Skip counts as a vote for the existing item
                            <div class="flex justify-center items-center mt-4">
                                <span class="text-sm text-gray-400">"Can't decide?"</span>
                                <button
                                    on:click=move |_| choose_skip("existing")
                                    disabled=move || submitting.get() || loading.get()
                                    class="text-sm text-primary-400 hover:text-primary-300 ml-1"
                                >
                                    "Skip this comparison →"
                                </button>
                            </div>

                            // Dismissal cancels: no completion, no rollback
                            <div class="flex justify-end mt-4">
                                <button
                                    on:click=move |_| open.set(false)
                                    class="px-4 py-2 border border-gray-600 rounded-lg text-gray-300
                                           hover:bg-gray-700 text-sm transition-colors"
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
