//! Utility functions for display formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{format_amount, format_change, format_percent, format_phone, truncate_string};
