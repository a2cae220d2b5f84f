//! # muse-calibration
//!
//! Audits how well predicted confidence matches observed acceptance:
//! reliability (bin-wise agreement), sharpness (score spread), and accuracy
//! (mean absolute error), with canned remediation guidance. Diagnostic only:
//! it reports, it never adjusts weights.

mod engine;

pub use engine::{CalibrationEngine, CalibrationSample};
