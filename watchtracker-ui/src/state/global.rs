//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// A trackable movie or TV-show record from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub rating: f64,
    pub year: i32,
    pub content_type: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub runtime_minutes: Option<u32>,
    #[serde(default)]
    pub watched: bool,
}

/// Lightweight list view from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ListSummary {
    pub id: u64,
    pub name: String,
    pub content_count: usize,
}

/// Viewer-relative user summary from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserSummary {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub followers_count: usize,
    pub following_count: usize,
    pub is_following: bool,
}

/// Full profile view of one user
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub avatar: String,
    pub followers_count: usize,
    pub following_count: usize,
    pub is_following: bool,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    #[serde(default)]
    pub streaming_platforms: Vec<String>,
    #[serde(default)]
    pub watched_content: Vec<ContentItem>,
    #[serde(default)]
    pub watchlist_content: Vec<ContentItem>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
