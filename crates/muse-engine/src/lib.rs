//! # muse-engine
//!
//! The suggestion orchestrator: observes interactions, records feedback,
//! serves ranked and explained suggestions, and exposes the maintenance
//! entry points (decay sweep, correlation analysis, preference learning,
//! calibration, retention cleanup) for an external scheduler to invoke.

pub mod engine;
pub mod maintenance;

pub use engine::{EngineStats, SuggestionEngine};
pub use maintenance::DecaySweepReport;
