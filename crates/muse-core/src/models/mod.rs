pub mod calibration;
pub mod confidence;
pub mod correlation;
pub mod feedback;
pub mod pattern;
pub mod preference;
pub mod suggestion;

pub use calibration::{CalibrationBin, CalibrationReport};
pub use confidence::Confidence;
pub use correlation::{Correlation, CorrelationDetails, CorrelationKind};
pub use feedback::{Feedback, FeedbackAction, InteractionRecord};
pub use pattern::{Enhancement, Pattern, PatternContext, PatternMetadata};
pub use preference::{PreferenceProfile, PreferenceScore};
pub use suggestion::{RelatedPattern, Suggestion, SuggestionAction};
