// Constants for the calculator engine

/// Significant digits shown for non-integer results
pub const SIGNIFICANT_DIGITS: usize = 10;

/// Result text shown when an evaluation fails
pub const ERROR_PLACEHOLDER: &str = "Error";

/// Number of past calculations kept when no size is configured
pub const DEFAULT_HISTORY_SIZE: usize = 20;
