mod store;

pub use store::{PatternQuery, PatternStore, RetentionCriteria};
