//! # muse-confidence
//!
//! Confidence scoring for learned patterns: six weighted factors, rate-based
//! adjustments, canned-phrase explanations, a low-latency incremental update
//! for feedback events, and the idle decay sweep.

pub mod decay;
pub mod engine;
pub mod explanation;
pub mod factors;
pub mod formula;

pub use engine::{ConfidenceEngine, ConfidenceReport};
pub use factors::ContextFactors;
pub use formula::ConfidenceBreakdown;
