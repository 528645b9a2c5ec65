//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Days-until-expiry below which a batch is considered critical
pub const CRITICAL_EXPIRY_DAYS: i64 = 30;

/// Days-until-expiry below which a batch is considered a warning
pub const WARNING_EXPIRY_DAYS: i64 = 90;

/// Shelf-life category of a stock batch, relative to a point in time.
///
/// The category is computed at render/request time, so the same batch can
/// change category across reloads without its data changing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Critical,
    Warning,
    Normal,
}

impl ExpiryStatus {
    /// Classify by the number of days remaining until expiry.
    ///
    /// Already-expired batches (negative days) are critical.
    pub fn from_days_left(days: i64) -> Self {
        if days < CRITICAL_EXPIRY_DAYS {
            ExpiryStatus::Critical
        } else if days < WARNING_EXPIRY_DAYS {
            ExpiryStatus::Warning
        } else {
            ExpiryStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Critical => "critical",
            ExpiryStatus::Warning => "warning",
            ExpiryStatus::Normal => "normal",
        }
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
