//! Named activity vectors for the three pattern views.
//!
//! A [`PatternStore`] holds one fixed-length vector per entity for each of
//! the daily, weekly, and combined views. It is populated once from
//! tab-separated input via [`PatternStore::load`] and never mutated
//! afterwards, so view lookups are read-only and safe to share.

mod store;
mod view;

pub use store::PatternStore;
pub use view::{PatternView, COMBINED_LEN, DAILY_LEN, WEEKLY_LEN};
