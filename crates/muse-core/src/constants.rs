/// Muse engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of the hex-truncated pattern identity hash.
pub const PATTERN_ID_LEN: usize = 16;
