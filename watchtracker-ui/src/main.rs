//! WatchTracker Dashboard
//!
//! Media-tracking frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Trending and discover browsing with client-side filter fallback
//! - Watched marking with pairwise comparison ranking
//! - Named watchlists and add-to-list dialogs
//! - Following other users and browsing their profiles
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the WatchTracker API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod filter;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
