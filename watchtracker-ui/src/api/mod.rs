//! API Client
//!
//! HTTP functions for the WatchTracker REST API.

pub mod client;

pub use client::*;
