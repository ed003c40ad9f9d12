//! Largest-remainder allocation
//!
//! Distributes an integer `total` across rows according to percentage
//! shares so that the per-row counts always add up to `total`:
//!
//! 1. `raw[i] = total * share[i] / 100`
//! 2. every row gets `floor(raw[i])`
//! 3. the units left over go, one each, to the rows with the largest
//!    fractional part `raw[i] - floor(raw[i])`; ties keep input order
//!
//! Shares are expected to sum to 100 (see [`crate::normalize_shares`]).
//! When they don't, the leftover can fall outside `[0, rows]` and the request
//! is rejected with [`AllocationError::UnbalancedShares`].
//!
//! Totals are capped at [`MAX_TOTAL`] so that `total * share / 100` stays
//! within a small fraction of a unit of the exact value in `f64`.

use crate::error::AllocationError;
use fusion_types::{FieldValue, Record};
use serde::{Deserialize, Serialize};

/// Largest total [`allocate_counts`] accepts (2^40)
pub const MAX_TOTAL: u64 = 1 << 40;

/// A named category and its percentage weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub name: String,
    pub share_pct: f64,
}

impl Share {
    pub fn new(name: impl Into<String>, share_pct: f64) -> Self {
        Self { name: name.into(), share_pct }
    }
}

/// A category together with the whole-number count it was allocated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub name: String,
    pub share_pct: f64,
    pub count: u64,
}

/// Allocates `total` across `shares` (percentages), returning one count per
/// share in input order.
///
/// # Errors
///
/// * [`AllocationError::InvalidTotal`] if `total` exceeds [`MAX_TOTAL`]
/// * [`AllocationError::InvalidShare`] if any share is negative or not finite
/// * [`AllocationError::UnbalancedShares`] if the shares are far enough from
///   summing to 100 that the leftover cannot be handed out one unit per row
pub fn allocate_counts(total: u64, shares: &[f64]) -> Result<Vec<u64>, AllocationError> {
    if total > MAX_TOTAL {
        return Err(AllocationError::InvalidTotal(total as f64));
    }
    if shares.is_empty() {
        return Ok(Vec::new());
    }

    if let Some((index, &value)) =
        shares.iter().enumerate().find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(AllocationError::InvalidShare { index, value });
    }

    let raw: Vec<f64> = shares.iter().map(|pct| (total as f64 * pct) / 100.0).collect();
    // `as` saturates, so absurdly large shares surface as a negative remainder below
    let mut counts: Vec<u64> = raw.iter().map(|x| x.floor() as u64).collect();

    let assigned: u128 = counts.iter().map(|&c| u128::from(c)).sum();
    let remainder = i128::from(total) - assigned as i128;
    if remainder < 0 || remainder > shares.len() as i128 {
        return Err(AllocationError::UnbalancedShares {
            remainder: i64::try_from(remainder).unwrap_or(i64::MIN),
            rows: shares.len(),
        });
    }

    let fractions: Vec<f64> = raw.iter().map(|x| x - x.floor()).collect();
    let mut order: Vec<usize> = (0..shares.len()).collect();
    // `sort_by` is stable: equal fractions stay in input order
    order.sort_by(|&a, &b| fractions[b].total_cmp(&fractions[a]));

    for &idx in order.iter().take(remainder as usize) {
        counts[idx] += 1;
    }

    Ok(counts)
}

/// Typed variant of [`allocate_counts`] over named shares.
///
/// # Errors
///
/// Same as [`allocate_counts`].
pub fn allocate(total: u64, shares: &[Share]) -> Result<Vec<Allocation>, AllocationError> {
    let pcts: Vec<f64> = shares.iter().map(|s| s.share_pct).collect();
    let counts = allocate_counts(total, &pcts)?;

    Ok(shares
        .iter()
        .zip(counts)
        .map(|(share, count)| Allocation {
            name: share.name.clone(),
            share_pct: share.share_pct,
            count,
        })
        .collect())
}

/// Record variant: reads each row's share from `share_key` and returns copies
/// of the rows with the allocated count written to `out_key` as an integer.
/// Any existing `out_key` value is overwritten.
///
/// # Errors
///
/// * [`AllocationError::MissingShare`] if a row has no numeric `share_key`
/// * anything [`allocate_counts`] reports
pub fn allocate_by_share(
    total: u64,
    rows: &[Record],
    share_key: &str,
    out_key: &str,
) -> Result<Vec<Record>, AllocationError> {
    let shares = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.get_f64(share_key)
                .ok_or_else(|| AllocationError::MissingShare { index, key: share_key.to_string() })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let counts = allocate_counts(total, &shares)?;

    Ok(rows
        .iter()
        .zip(counts)
        .map(|(row, count)| {
            let mut out = row.clone();
            // count <= total <= MAX_TOTAL
            out.set(out_key, FieldValue::Integer(count as i64));
            out
        })
        .collect())
}

/// Interprets a dynamically typed total (e.g. from JSON) as a headcount.
///
/// # Errors
///
/// [`AllocationError::InvalidTotal`] unless the value is a non-negative whole
/// number.
pub fn total_from_value(value: &FieldValue) -> Result<u64, AllocationError> {
    match value {
        FieldValue::Integer(i) => u64::try_from(*i).map_err(|_| AllocationError::InvalidTotal(*i as f64)),
        FieldValue::Float(f) => {
            if f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f < i64::MAX as f64 {
                Ok(*f as u64)
            } else {
                Err(AllocationError::InvalidTotal(*f))
            }
        }
        _ => Err(AllocationError::InvalidTotal(f64::NAN)),
    }
}
