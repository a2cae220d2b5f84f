//! # muse-core
//!
//! Foundation crate for the Muse pattern learning engine.
//! Defines all models, traits, errors, config, and the clock abstraction.
//! Every other crate in the workspace depends on this.

pub mod clock;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use errors::{MuseError, MuseResult};
pub use models::{
    Confidence, Enhancement, Feedback, FeedbackAction, InteractionRecord, Pattern, PatternContext,
    PatternMetadata, Suggestion, SuggestionAction,
};
pub use traits::{PatternQuery, PatternStore, RetentionCriteria};
