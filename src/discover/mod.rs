//! Client-side discover filtering
//!
//! Conjunctive predicate composition over a [`FilterCriteria`] value,
//! applied to an in-memory content collection. Server-side filtering is
//! preferred where available; this engine backs both the discover endpoint
//! and offline/fallback filtering.

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, PlatformFilter, TypeFilter};
pub use engine::{apply, matches};
