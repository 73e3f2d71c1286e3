//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for content cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg overflow-hidden animate-pulse w-[220px]">
            <div class="h-[330px] bg-gray-700" />
            <div class="p-3 space-y-2">
                <div class="h-4 bg-gray-700 rounded w-2/3" />
                <div class="h-3 bg-gray-700 rounded w-1/3" />
            </div>
        </div>
    }
}

/// Skeleton row of content cards
#[component]
pub fn CardRowSkeleton(
    #[prop(default = 4)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="flex space-x-4">
            {(0..count).map(|_| view! { <CardSkeleton /> }).collect_view()}
        </div>
    }
}
