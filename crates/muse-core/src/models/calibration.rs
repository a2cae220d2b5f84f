use serde::{Deserialize, Serialize};

/// One equal-width confidence bin in a calibration report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalibrationBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
    /// Mean predicted confidence of patterns in this bin.
    pub avg_predicted: f64,
    /// Mean observed acceptance rate of patterns in this bin.
    pub avg_actual: f64,
}

/// Measured agreement between predicted confidence and observed outcomes.
///
/// Diagnostic only: the engine reports, it never auto-corrects weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationReport {
    /// 1 − count-weighted mean gap between bin predictions and outcomes.
    pub reliability: f64,
    /// Std-dev of predicted confidences. Low sharpness means the model
    /// clusters around one value instead of discriminating.
    pub sharpness: f64,
    /// 1 − mean absolute prediction error.
    pub accuracy: f64,
    pub bins: Vec<CalibrationBin>,
    pub sample_count: usize,
    /// Set when the audit hit its item budget and reports partial results.
    pub truncated: bool,
    pub recommendations: Vec<String>,
}

impl CalibrationReport {
    /// Report for a window with no usable samples.
    pub fn empty() -> Self {
        Self {
            reliability: 1.0,
            sharpness: 0.0,
            accuracy: 1.0,
            bins: Vec::new(),
            sample_count: 0,
            truncated: false,
            recommendations: vec!["no feedback in window; nothing to audit".to_string()],
        }
    }
}
