//! Two-way percentage split (e.g. employees vs contractors)

use serde::{Deserialize, Serialize};

/// Result of [`split_by_percentage`]; `primary + secondary == total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySplit {
    pub primary: u64,
    pub secondary: u64,
}

/// Splits `total` into `floor(total * primary_pct / 100)` and the residual.
///
/// `primary_pct` is clamped into `0..=100`; NaN is treated as 0.
#[must_use]
pub fn split_by_percentage(total: u64, primary_pct: f64) -> BinarySplit {
    let pct = if primary_pct.is_nan() { 0.0 } else { primary_pct.clamp(0.0, 100.0) };
    let primary = (((total as f64) * pct) / 100.0).floor() as u64;
    let primary = primary.min(total);

    BinarySplit { primary, secondary: total - primary }
}
