//! # muse-learning
//!
//! Turns raw interaction records into canonical patterns and aggregates
//! feedback into per-component and per-enhancement preference profiles used
//! to re-weight suggestions.

pub mod adapt;
pub mod extraction;
pub mod preference;

pub use adapt::adapt_suggestions;
pub use extraction::extract_pattern;
pub use preference::learn_preferences;
