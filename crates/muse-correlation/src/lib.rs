//! # muse-correlation
//!
//! Pairwise correlation over learned patterns: shared context, co-occurring
//! acceptances, and A-then-B sequencing, blended into a single score and
//! classified. Advisory only: results feed the confidence engine's
//! correlation factor and suggestion neighbors.

pub mod analyzer;
pub mod metrics;

pub use analyzer::{AnalysisResult, CorrelationAnalyzer};
