use tracing::{debug, warn};

use muse_core::config::CalibrationConfig;
use muse_core::models::{CalibrationBin, CalibrationReport};

/// One audited pattern: what the engine predicted vs what users did.
#[derive(Debug, Clone)]
pub struct CalibrationSample {
    pub pattern_id: String,
    /// Stored confidence at audit time.
    pub predicted: f64,
    /// Observed acceptance rate over the window (positive / total).
    pub actual: f64,
    /// Feedback events backing `actual`.
    pub events: usize,
}

/// Calibration auditor over (predicted, actual) samples.
pub struct CalibrationEngine {
    config: CalibrationConfig,
}

impl CalibrationEngine {
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Bin the samples and compute reliability, sharpness, and accuracy.
    /// An item budget (`max_patterns`) caps the audit; exceeding it yields a
    /// partial report flagged `truncated`.
    pub fn calibrate(&self, samples: &[CalibrationSample]) -> CalibrationReport {
        if samples.is_empty() {
            return CalibrationReport::empty();
        }

        let mut audited = samples;
        let mut truncated = false;
        if self.config.max_patterns > 0 && samples.len() > self.config.max_patterns {
            warn!(
                total = samples.len(),
                budget = self.config.max_patterns,
                "calibration budget exceeded; auditing a partial sample"
            );
            audited = &samples[..self.config.max_patterns];
            truncated = true;
        }
        let total = audited.len();

        let bins = self.build_bins(audited);
        let reliability = 1.0
            - bins
                .iter()
                .filter(|b| b.count > 0)
                .map(|b| (b.avg_predicted - b.avg_actual).abs() * b.count as f64)
                .sum::<f64>()
                / total as f64;

        let mean_predicted =
            audited.iter().map(|s| s.predicted).sum::<f64>() / total as f64;
        let sharpness = (audited
            .iter()
            .map(|s| (s.predicted - mean_predicted).powi(2))
            .sum::<f64>()
            / total as f64)
            .sqrt();

        let accuracy = 1.0
            - audited
                .iter()
                .map(|s| (s.predicted - s.actual).abs())
                .sum::<f64>()
                / total as f64;

        let recommendations = self.recommend(reliability, sharpness, accuracy);
        debug!(
            samples = total,
            reliability,
            sharpness,
            accuracy,
            "calibration audit complete"
        );

        CalibrationReport {
            reliability,
            sharpness,
            accuracy,
            bins,
            sample_count: total,
            truncated,
            recommendations,
        }
    }

    fn build_bins(&self, samples: &[CalibrationSample]) -> Vec<CalibrationBin> {
        let count = self.config.bins.max(1);
        let width = 1.0 / count as f64;
        let mut sums: Vec<(usize, f64, f64)> = vec![(0, 0.0, 0.0); count];
        for sample in samples {
            let idx = ((sample.predicted / width) as usize).min(count - 1);
            let slot = &mut sums[idx];
            slot.0 += 1;
            slot.1 += sample.predicted;
            slot.2 += sample.actual;
        }
        sums.into_iter()
            .enumerate()
            .map(|(i, (n, pred_sum, actual_sum))| CalibrationBin {
                lower: i as f64 * width,
                upper: (i + 1) as f64 * width,
                count: n,
                avg_predicted: if n > 0 { pred_sum / n as f64 } else { 0.0 },
                avg_actual: if n > 0 { actual_sum / n as f64 } else { 0.0 },
            })
            .collect()
    }

    fn recommend(&self, reliability: f64, sharpness: f64, accuracy: f64) -> Vec<String> {
        let mut recommendations = Vec::new();
        if reliability < self.config.reliability_floor {
            recommendations.push(
                "confidence is not well calibrated; adjust factor weights".to_string(),
            );
        }
        if sharpness < self.config.sharpness_floor {
            recommendations.push(
                "confidence scores lack discrimination; increase factor sensitivity"
                    .to_string(),
            );
        }
        if accuracy < self.config.accuracy_floor {
            recommendations
                .push("low prediction accuracy; review the calculation method".to_string());
        }
        recommendations
    }
}

impl Default for CalibrationEngine {
    fn default() -> Self {
        Self::new(CalibrationConfig::default())
    }
}
