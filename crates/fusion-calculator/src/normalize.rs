//! Share normalization
//!
//! Rescales shares that were edited independently so that they sum to
//! (about) 100 while keeping their relative weights. Each share is rounded on
//! its own, so the result can still miss 100 by a few units; the allocator
//! takes up that slack for totals where it fits.
//!
//! [`apportion_share_list`] is the exact variant: it hands out the 100 points
//! themselves with the largest-remainder method, so the result always sums to
//! 100 and can be allocated against any total.

use crate::allocation::{Share, allocate_counts};
use crate::error::AllocationError;
use fusion_types::{FieldValue, Record};

/// `None` means "leave the shares as they are": the sum is already exactly
/// 100, or it is zero/non-finite and cannot be divided by.
#[allow(clippy::float_cmp)]
fn rescale(shares: &[f64]) -> Option<Vec<f64>> {
    let sum: f64 = shares.iter().sum();
    if sum == 100.0 || sum == 0.0 || !sum.is_finite() {
        return None;
    }

    Some(shares.iter().map(|s| ((s / sum) * 100.0).round().max(0.0)).collect())
}

/// Rescales raw percentages to sum to 100.
#[must_use]
pub fn normalize_shares(shares: &[f64]) -> Vec<f64> {
    rescale(shares).unwrap_or_else(|| shares.to_vec())
}

/// Rescales named shares to sum to 100.
#[must_use]
pub fn normalize_share_list(shares: &[Share]) -> Vec<Share> {
    let pcts: Vec<f64> = shares.iter().map(|s| s.share_pct).collect();
    match rescale(&pcts) {
        Some(scaled) => shares
            .iter()
            .zip(scaled)
            .map(|(share, share_pct)| Share { name: share.name.clone(), share_pct })
            .collect(),
        None => shares.to_vec(),
    }
}

/// Rescales named shares to whole percentages that sum to exactly 100.
///
/// Shares already summing to 100, or to zero, are returned unchanged.
///
/// # Errors
///
/// [`AllocationError::InvalidShare`] if a share is negative or not finite.
#[allow(clippy::float_cmp)]
pub fn apportion_share_list(shares: &[Share]) -> Result<Vec<Share>, AllocationError> {
    if let Some((index, share)) =
        shares.iter().enumerate().find(|(_, s)| !s.share_pct.is_finite() || s.share_pct < 0.0)
    {
        return Err(AllocationError::InvalidShare { index, value: share.share_pct });
    }

    let sum: f64 = shares.iter().map(|s| s.share_pct).sum();
    if sum == 100.0 || sum == 0.0 || !sum.is_finite() {
        return Ok(shares.to_vec());
    }

    let ratios: Vec<f64> = shares.iter().map(|s| s.share_pct / sum * 100.0).collect();
    let points = allocate_counts(100, &ratios)?;

    Ok(shares
        .iter()
        .zip(points)
        .map(|(share, pct)| Share { name: share.name.clone(), share_pct: pct as f64 })
        .collect())
}

/// Rescales the `share_key` field of every record. Rows are returned as-is
/// when no rescaling is needed, otherwise the field is rewritten as a float.
///
/// # Errors
///
/// [`AllocationError::MissingShare`] if a row has no numeric `share_key`.
pub fn normalize_records(rows: &[Record], share_key: &str) -> Result<Vec<Record>, AllocationError> {
    let pcts = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.get_f64(share_key)
                .ok_or_else(|| AllocationError::MissingShare { index, key: share_key.to_string() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let Some(scaled) = rescale(&pcts) else {
        return Ok(rows.to_vec());
    };

    Ok(rows
        .iter()
        .zip(scaled)
        .map(|(row, pct)| {
            let mut out = row.clone();
            out.set(share_key, FieldValue::Float(pct));
            out
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_already_at_100_are_untouched() {
        let shares = [20.5, 26.0, 11.5, 10.0, 32.0];
        assert_eq!(normalize_shares(&shares), shares.to_vec());
    }

    #[test]
    fn under_100_is_scaled_up() {
        assert_eq!(normalize_shares(&[30.0, 30.0, 30.0]), vec![33.0, 33.0, 33.0]);
    }

    #[test]
    fn over_100_is_scaled_down() {
        // 40/160 = 25, 120/160 = 75
        assert_eq!(normalize_shares(&[40.0, 120.0]), vec![25.0, 75.0]);
    }

    #[test]
    fn zero_sum_does_not_divide() {
        assert_eq!(normalize_shares(&[0.0, 0.0]), vec![0.0, 0.0]);
        assert!(normalize_shares(&[]).is_empty());
    }

    #[test]
    fn negative_results_are_clamped() {
        let out = normalize_shares(&[-10.0, 60.0]);
        assert_eq!(out, vec![0.0, 120.0]);
        assert!(out.iter().all(|s| s.is_finite() && *s >= 0.0));
    }

    #[test]
    fn named_shares_keep_names() {
        let out = normalize_share_list(&[Share::new("Ops", 10.0), Share::new("HR", 30.0)]);
        assert_eq!(out, vec![Share::new("Ops", 25.0), Share::new("HR", 75.0)]);
    }

    #[test]
    fn apportioned_shares_always_sum_to_100() {
        let function_shares = |ops: f64| {
            [("Sales", 20.0), ("Ops", ops), ("Finance", 12.0), ("HR", 10.0), ("Engineering", 32.0)]
                .into_iter()
                .map(|(name, pct)| Share::new(name, pct))
                .collect::<Vec<_>>()
        };

        // Plain rounding gives 101 here
        let rounded: f64 = normalize_share_list(&function_shares(3.0)).iter().map(|s| s.share_pct).sum();
        assert_ne!(rounded, 100.0);

        for ops in 0..=100 {
            let out = apportion_share_list(&function_shares(f64::from(ops))).unwrap();
            assert_eq!(out.iter().map(|s| s.share_pct).sum::<f64>(), 100.0, "Ops={ops}");
            assert_eq!(out[1].name, "Ops");
        }
    }

    #[test]
    fn apportioning_follows_largest_remainder() {
        let out = apportion_share_list(&[Share::new("A", 30.0), Share::new("B", 30.0), Share::new("C", 30.0)])
            .unwrap();
        assert_eq!(out, vec![Share::new("A", 34.0), Share::new("B", 33.0), Share::new("C", 33.0)]);

        // already at 100: fractional shares are kept
        let kept = [Share::new("A", 12.5), Share::new("B", 87.5)];
        assert_eq!(apportion_share_list(&kept).unwrap(), kept.to_vec());

        assert_eq!(
            apportion_share_list(&[Share::new("A", -10.0), Share::new("B", 60.0)]),
            Err(AllocationError::InvalidShare { index: 0, value: -10.0 })
        );
    }

    #[test]
    fn records_are_rescaled_in_place() {
        let rows = vec![
            Record::new().with("team", "Sales").with("sharePct", 30_i64),
            Record::new().with("team", "Ops").with("sharePct", 30_i64),
            Record::new().with("team", "HR").with("sharePct", 30_i64),
        ];
        let out = normalize_records(&rows, "sharePct").unwrap();
        assert!(out.iter().all(|r| r.get("sharePct") == Some(&FieldValue::Float(33.0))));
        assert_eq!(out[2].get("team"), Some(&FieldValue::String("HR".into())));
    }
}
